//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use crate::web::controller::DashboardController;
use media_monitor_core::{Catalog, CredentialVerifier};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: Arc<dyn CredentialVerifier>,
    pub dashboard: Arc<DashboardController>,
}

impl AppState {
    /// Builds the state around the sample catalog.
    pub fn new(config: Arc<Config>, verifier: Arc<dyn CredentialVerifier>) -> Self {
        let dashboard = DashboardController::new(Catalog::sample(), config.alert_ttl);
        Self {
            config,
            verifier,
            dashboard,
        }
    }
}
