use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use coachdesk_core::AppError;
use coachdesk_domain::ThemeConfig;
use tracing_subscriber::EnvFilter;
use url::Url;

const DEFAULT_UPLOAD_MAX_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub platform_api_base_url: String,
    pub frontend_url: String,
    pub admin_host: String,
    pub admin_port: u16,
    pub cookie_secure: bool,
    pub platform_timeout: Duration,
    pub search_debounce: Duration,
    pub notification_poll_seconds: u32,
    pub theme: ThemeConfig,
    pub upload_max_bytes: usize,
}

impl AdminConfig {
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let platform_api_base_url = required(&lookup, "PLATFORM_API_BASE_URL")?;
        Url::parse(&platform_api_base_url).map_err(|error| {
            AppError::Validation(format!("invalid PLATFORM_API_BASE_URL: {error}"))
        })?;

        let frontend_url = lookup("FRONTEND_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_owned())
            .trim_end_matches('/')
            .to_owned();
        Url::parse(&frontend_url)
            .map_err(|error| AppError::Validation(format!("invalid FRONTEND_URL: {error}")))?;

        let admin_host = lookup("ADMIN_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let admin_port = parsed_or(&lookup, "ADMIN_PORT", 3002_u16)?;
        let cookie_secure = lookup("SESSION_COOKIE_SECURE")
            .unwrap_or_else(|| "false".to_owned())
            .eq_ignore_ascii_case("true");

        let timeout_seconds = parsed_or(&lookup, "PLATFORM_TIMEOUT_SECONDS", 15_u64)?;
        if timeout_seconds == 0 {
            return Err(AppError::Validation(
                "PLATFORM_TIMEOUT_SECONDS must be greater than zero".to_owned(),
            ));
        }

        let debounce_ms = parsed_or(&lookup, "SEARCH_DEBOUNCE_MS", 300_u64)?;
        let notification_poll_seconds = parsed_or(&lookup, "NOTIFICATION_POLL_SECONDS", 30_u32)?;
        let theme = ThemeConfig::named(
            lookup("ADMIN_THEME")
                .unwrap_or_else(|| "default".to_owned())
                .trim(),
        )?;

        let upload_max_bytes = parsed_or(&lookup, "UPLOAD_MAX_BYTES", DEFAULT_UPLOAD_MAX_BYTES)?;
        if upload_max_bytes == 0 {
            return Err(AppError::Validation(
                "UPLOAD_MAX_BYTES must be greater than zero".to_owned(),
            ));
        }

        Ok(Self {
            platform_api_base_url,
            frontend_url,
            admin_host,
            admin_port,
            cookie_secure,
            platform_timeout: Duration::from_secs(timeout_seconds),
            search_debounce: Duration::from_millis(debounce_ms),
            notification_poll_seconds,
            theme,
            upload_max_bytes,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.admin_host).map_err(|error| {
            AppError::Internal(format!("invalid ADMIN_HOST '{}': {error}", self.admin_host))
        })?;
        Ok(SocketAddr::from((host, self.admin_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn required(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<String, AppError> {
    lookup(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("{name} is required")))
}

fn parsed_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}
