use std::collections::BTreeMap;

use coachdesk_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Named set of CSS custom properties applied once at the console root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    name: String,
    variables: BTreeMap<String, String>,
}

const SHARED_VARIABLES: [(&str, &str); 4] = [
    ("--font-family", "'Prompt', 'Noto Sans Thai', sans-serif"),
    ("--radius", "12px"),
    ("--sidebar-width", "260px"),
    ("--accent-color", "#ff6b35"),
];

const DEFAULT_VARIABLES: [(&str, &str); 5] = [
    ("--primary-color", "#232956"),
    ("--background-color", "#f8f9fb"),
    ("--surface-color", "#ffffff"),
    ("--text-color", "#1f2937"),
    ("--muted-color", "#6b7280"),
];

const DARK_VARIABLES: [(&str, &str); 5] = [
    ("--primary-color", "#8b93ff"),
    ("--background-color", "#0f172a"),
    ("--surface-color", "#1e293b"),
    ("--text-color", "#f1f5f9"),
    ("--muted-color", "#94a3b8"),
];

impl ThemeConfig {
    /// Resolves a built-in theme by name.
    pub fn named(name: &str) -> AppResult<Self> {
        let palette = match name {
            "default" => DEFAULT_VARIABLES,
            "dark" => DARK_VARIABLES,
            other => {
                return Err(AppError::Validation(format!(
                    "unknown theme '{other}', expected 'default' or 'dark'"
                )));
            }
        };

        let variables = SHARED_VARIABLES
            .iter()
            .chain(palette.iter())
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();

        Ok(Self {
            name: name.to_owned(),
            variables,
        })
    }

    /// Returns the theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns CSS custom properties keyed by property name.
    #[must_use]
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

#[cfg(test)]
mod tests {
    use super::ThemeConfig;

    #[test]
    fn dark_theme_overrides_palette_and_keeps_shared_values() {
        let theme = ThemeConfig::named("dark").unwrap_or_else(|_| unreachable!());
        assert_eq!(theme.name(), "dark");
        assert_eq!(
            theme.variables().get("--background-color").map(String::as_str),
            Some("#0f172a")
        );
        assert_eq!(
            theme.variables().get("--radius").map(String::as_str),
            Some("12px")
        );
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(ThemeConfig::named("neon").is_err());
    }
}
