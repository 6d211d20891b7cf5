use coachdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Name of a platform settings section (`general`, `payment`, ...).
///
/// Restricted to `[a-z0-9_-]` because it becomes a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SettingsSection(NonEmptyString);

impl SettingsSection {
    /// Creates a validated section name.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = NonEmptyString::new(value)?;
        let valid = value.as_str().chars().all(|character| {
            character.is_ascii_lowercase()
                || character.is_ascii_digit()
                || character == '-'
                || character == '_'
        });

        if !valid {
            return Err(AppError::Validation(format!(
                "settings section '{}' may only contain lowercase letters, digits, '-' and '_'",
                value.as_str()
            )));
        }

        Ok(Self(value))
    }

    /// Returns the section name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::SettingsSection;

    #[test]
    fn accepts_simple_names() {
        assert!(SettingsSection::new("payment").is_ok());
        assert!(SettingsSection::new("hero_banner-2").is_ok());
    }

    #[test]
    fn rejects_path_characters() {
        assert!(SettingsSection::new("../admin").is_err());
        assert!(SettingsSection::new("Payment").is_err());
        assert!(SettingsSection::new(" ").is_err());
    }
}
