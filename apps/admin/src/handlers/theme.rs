use axum::Json;
use axum::extract::State;

use crate::dto::ThemeResponse;
use crate::state::AppState;

pub async fn theme_handler(State(state): State<AppState>) -> Json<ThemeResponse> {
    Json(ThemeResponse::from(state.theme.as_ref()))
}
