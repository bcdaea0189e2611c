//! crates/media_monitor_core/src/ports.rs
//!
//! Defines the service contracts (traits) the dashboard core depends on.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to stay independent of how credentials are actually checked.

use crate::session::Credentials;
use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Accepts or refuses a username/password pair that already passed form
    /// validation. Refusal is `PortError::Unauthorized`.
    async fn verify(&self, credentials: &Credentials) -> PortResult<()>;
}
