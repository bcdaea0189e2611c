//! services/api/src/adapters/credentials.rs
//!
//! Adapters implementing the `CredentialVerifier` port from the `core` crate.

use argon2::{
    password_hash::{PasswordHash, PasswordVerifier},
    Argon2,
};
use async_trait::async_trait;
use media_monitor_core::ports::{CredentialVerifier, PortError, PortResult};
use media_monitor_core::session::Credentials;
use tracing::{error, warn};

//=========================================================================================
// Demo Adapter
//=========================================================================================

/// Accepts every pair that passed form validation. This is the demo login.
#[derive(Clone, Debug, Default)]
pub struct AcceptAnyCredentials;

#[async_trait]
impl CredentialVerifier for AcceptAnyCredentials {
    async fn verify(&self, _credentials: &Credentials) -> PortResult<()> {
        Ok(())
    }
}

//=========================================================================================
// Argon2 Adapter
//=========================================================================================

/// Checks the password against a single configured argon2 hash. Any username
/// is accepted; it only becomes the display name.
#[derive(Clone, Debug)]
pub struct Argon2PasswordVerifier {
    hash: String,
}

impl Argon2PasswordVerifier {
    /// Creates a verifier, rejecting hashes that are not valid PHC strings.
    pub fn new(hash: impl Into<String>) -> PortResult<Self> {
        let hash = hash.into();
        PasswordHash::new(&hash).map_err(|e| {
            error!("Configured password hash is not a valid PHC string: {:?}", e);
            PortError::Unexpected(format!("invalid password hash: {}", e))
        })?;
        Ok(Self { hash })
    }
}

#[async_trait]
impl CredentialVerifier for Argon2PasswordVerifier {
    async fn verify(&self, credentials: &Credentials) -> PortResult<()> {
        let parsed_hash = PasswordHash::new(&self.hash)
            .map_err(|e| PortError::Unexpected(format!("invalid password hash: {}", e)))?;

        let valid = Argon2::default()
            .verify_password(credentials.password.as_bytes(), &parsed_hash)
            .is_ok();

        if !valid {
            warn!("Rejected login attempt for user '{}'", credentials.username);
            return Err(PortError::Unauthorized);
        }
        Ok(())
    }
}
