//! services/api/src/bin/api.rs

use api_lib::{
    adapters::{AcceptAnyCredentials, Argon2PasswordVerifier},
    config::Config,
    error::ApiError,
    web::{app_router, AppState},
};
use media_monitor_core::CredentialVerifier;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Initialize the Credential Adapter ---
    let verifier: Arc<dyn CredentialVerifier> = match &config.password_hash {
        Some(hash) => {
            info!("Password login enabled.");
            Arc::new(Argon2PasswordVerifier::new(hash.clone())?)
        }
        None => {
            warn!("DASHBOARD_PASSWORD_HASH is not set; any non-empty credentials will log in.");
            Arc::new(AcceptAnyCredentials)
        }
    };

    // --- 3. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState::new(config.clone(), verifier));
    let app = app_router(app_state)?;

    // --- 4. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/swagger-ui",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
