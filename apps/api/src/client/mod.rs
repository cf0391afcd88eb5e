//! Client-resident half of the engagement subsystem.
//!
//! The [`interaction_cache`] tracks what this client has liked or disliked, the
//! [`api`] talks to the engagement endpoints, and [`sync`] sequences the two.

pub mod api;
pub mod config;
pub mod errors;
pub mod interaction_cache;
pub mod store;
pub mod sync;
