use std::collections::BTreeMap;

use coachdesk_domain::ThemeConfig;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Incoming payload that signs an operator in with a platform token.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-request.ts"
)]
pub struct SessionRequest {
    pub token: String,
}

/// Whether the current session carries a platform token.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-status-response.ts"
)]
pub struct SessionStatusResponse {
    pub authenticated: bool,
}

/// Where the console navigates after sign-out.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/logout-response.ts"
)]
pub struct LogoutResponse {
    pub redirect: String,
}

/// Active console theme as CSS custom properties.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/theme-response.ts"
)]
pub struct ThemeResponse {
    pub name: String,
    pub variables: BTreeMap<String, String>,
}

impl From<&ThemeConfig> for ThemeResponse {
    fn from(theme: &ThemeConfig) -> Self {
        Self {
            name: theme.name().to_owned(),
            variables: theme.variables().clone(),
        }
    }
}
