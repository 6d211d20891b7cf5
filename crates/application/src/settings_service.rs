use std::sync::Arc;

use coachdesk_core::{AccessToken, AppError, AppResult};
use coachdesk_domain::SettingsSection;
use serde_json::Value;
use tracing::info;

use crate::gateway_ports::SettingsGateway;

/// Free-form platform settings sections.
#[derive(Clone)]
pub struct SettingsService {
    settings: Arc<dyn SettingsGateway>,
}

impl SettingsService {
    /// Creates a settings service.
    #[must_use]
    pub fn new(settings: Arc<dyn SettingsGateway>) -> Self {
        Self { settings }
    }

    /// Saves one section. The values must be a JSON object.
    pub async fn save_section(
        &self,
        token: &AccessToken,
        section: &str,
        values: Value,
    ) -> AppResult<Value> {
        let section = SettingsSection::new(section)?;
        if !values.is_object() {
            return Err(AppError::Validation(format!(
                "settings for '{}' must be a JSON object",
                section.as_str()
            )));
        }

        let saved = self.settings.save_section(token, &section, &values).await?;
        info!(section = section.as_str(), "settings section saved");
        Ok(saved)
    }
}
