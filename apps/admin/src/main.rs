//! Coachdesk admin back-office composition root.

#![forbid(unsafe_code)]

mod admin_config;
mod admin_router;
mod admin_services;
mod auth;
mod dto;
mod error;
mod handlers;
mod middleware;
mod state;

use coachdesk_core::AppError;
use tracing::info;

use crate::admin_config::{AdminConfig, init_tracing};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AdminConfig::load()?;
    let app_state = admin_services::build_app_state(&config)?;
    let session_layer = admin_services::build_session_layer(config.cookie_secure);
    let app = admin_router::build_router(app_state, &config.frontend_url, session_layer)?;

    let address = config.socket_address()?;
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(
        %address,
        platform = %config.platform_api_base_url,
        theme = config.theme.name(),
        "coachdesk-admin listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("admin server error: {error}")))
}
