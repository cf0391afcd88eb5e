use crate::{application::engagement::use_case::EngagementService, config::Config};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engagement: Arc<EngagementService>,
}
