//! Client configuration.
//!
//! - `ENGAGEMENT_API_URL`: Base URL of the engagement service (default: "http://127.0.0.1:3000")
//! - `ENGAGEMENT_INTERACTIONS_PATH`: JSON file holding this client's likes/dislikes
//!   (default: "./interactions.json")
//! - `ENGAGEMENT_REQUEST_TIMEOUT_SECS`: Per-request timeout (default: 10)
//! - `ENGAGEMENT_ROLLBACK_ON_FAILURE`: Undo the local toggle when the server call fails
//!   without a definite answer (default: false)

use crate::config::env_or;
use std::{path::PathBuf, time::Duration};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub interactions_path: PathBuf,
    pub request_timeout: Duration,
    pub rollback_on_failure: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            interactions_path: PathBuf::from("./interactions.json"),
            request_timeout: Duration::from_secs(10),
            rollback_on_failure: false,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            base_url: env_or("ENGAGEMENT_API_URL", defaults.base_url)?,
            interactions_path: env_or("ENGAGEMENT_INTERACTIONS_PATH", defaults.interactions_path)?,
            request_timeout: Duration::from_secs(env_or("ENGAGEMENT_REQUEST_TIMEOUT_SECS", 10)?),
            rollback_on_failure: env_or("ENGAGEMENT_ROLLBACK_ON_FAILURE", false)?,
        })
    }
}
