//! Session sign-in and sign-out for admin operators.
//!
//! The browser never holds the platform token: it is stored in the
//! server-side session and attached to platform calls by the middleware.

use axum::Json;
use axum::extract::State;
use coachdesk_application::token_fingerprint;
use coachdesk_core::{AccessToken, AppError};
use tower_sessions::Session;
use tracing::info;

use crate::dto::{LogoutResponse, SessionRequest, SessionStatusResponse};
use crate::error::ApiResult;
use crate::state::AppState;

/// Session key holding the platform bearer token.
pub const SESSION_TOKEN_KEY: &str = "admin.access_token";

/// Page the console returns to after sign-out.
pub const SIGN_IN_PATH: &str = "/signin";

/// Reads the bearer token stored in the session, if any.
pub async fn session_token(session: &Session) -> Result<Option<AccessToken>, AppError> {
    session
        .get::<AccessToken>(SESSION_TOKEN_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session token: {error}")))
}

/// Prefix shared by every coalescer key of one token.
pub fn coalescer_prefix(token: &AccessToken) -> String {
    format!("{}:", token_fingerprint(token))
}

/// POST /auth/session - Store a platform token in a fresh session.
pub async fn create_session_handler(
    session: Session,
    Json(payload): Json<SessionRequest>,
) -> ApiResult<Json<SessionStatusResponse>> {
    let token = AccessToken::new(payload.token)?;

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    session
        .insert(SESSION_TOKEN_KEY, &token)
        .await
        .map_err(|error| AppError::Internal(format!("failed to persist session token: {error}")))?;

    info!("admin session started");
    Ok(Json(SessionStatusResponse {
        authenticated: true,
    }))
}

/// GET /auth/session - Report whether the session carries a token.
pub async fn session_status_handler(session: Session) -> ApiResult<Json<SessionStatusResponse>> {
    let authenticated = session_token(&session).await?.is_some();
    Ok(Json(SessionStatusResponse { authenticated }))
}

/// POST /auth/logout - Drop the session and everything cached for its token.
pub async fn logout_handler(
    State(state): State<AppState>,
    session: Session,
) -> ApiResult<Json<LogoutResponse>> {
    if let Some(token) = session_token(&session).await? {
        state.notification_service.forget(&token).await?;
        state.search_coalescer.forget(&coalescer_prefix(&token));
    }

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    info!("admin session ended");
    Ok(Json(LogoutResponse {
        redirect: SIGN_IN_PATH.to_owned(),
    }))
}
