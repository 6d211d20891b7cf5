use std::time::Duration;

use coachdesk_core::{AccessToken, AppError, AppResult};
use reqwest::header;
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

mod envelope;

use envelope::{unwrap_list, unwrap_record};

/// Authenticated JSON client for the platform REST API.
///
/// Every request carries the operator's bearer token. Non-success statuses
/// map onto [`AppError`] categories; transport and decoding failures become
/// [`AppError::Upstream`].
#[derive(Clone)]
pub struct PlatformApiClient {
    http_client: reqwest::Client,
    base_url: Url,
}

impl PlatformApiClient {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| AppError::Internal(format!("failed to build HTTP client: {error}")))?;

        Self::with_http_client(http_client, base_url)
    }

    /// Creates a client reusing an existing HTTP client.
    pub fn with_http_client(http_client: reqwest::Client, base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url).map_err(|error| {
            AppError::Validation(format!("invalid platform base URL '{base_url}': {error}"))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(AppError::Validation(format!(
                "platform base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Returns the platform base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetches one record, unwrapping a `data` envelope when present.
    pub async fn get_record<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let request = self.request(Method::GET, token, segments)?.query(query);
        decode(unwrap_record(self.execute(request).await?))
    }

    /// Fetches a list given either as a bare array or inside `data`.
    pub async fn get_list<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> AppResult<Vec<T>> {
        let request = self.request(Method::GET, token, segments)?.query(query);
        decode(unwrap_list(self.execute(request).await?)?)
    }

    /// Sends a JSON body and decodes the returned record.
    pub async fn send_record<B, T>(
        &self,
        method: Method,
        token: &AccessToken,
        segments: &[&str],
        body: &B,
    ) -> AppResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let request = self.request(method, token, segments)?.json(body);
        decode(unwrap_record(self.execute(request).await?))
    }

    /// Sends a JSON body and ignores the response body.
    pub async fn send_command<B>(
        &self,
        method: Method,
        token: &AccessToken,
        segments: &[&str],
        body: &B,
    ) -> AppResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let request = self.request(method, token, segments)?.json(body);
        self.execute(request).await.map(|_| ())
    }

    /// Deletes a resource.
    pub async fn delete(&self, token: &AccessToken, segments: &[&str]) -> AppResult<()> {
        let request = self.request(Method::DELETE, token, segments)?;
        self.execute(request).await.map(|_| ())
    }

    /// Sends a multipart form and decodes the returned record.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        segments: &[&str],
        form: reqwest::multipart::Form,
    ) -> AppResult<T> {
        let request = self.request(Method::POST, token, segments)?.multipart(form);
        decode(unwrap_record(self.execute(request).await?))
    }

    /// Builds the URL for a path below the base URL. Segments are
    /// percent-encoded, so record ids never alter the path structure.
    pub fn endpoint(&self, segments: &[&str]) -> AppResult<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                AppError::Internal("platform base URL cannot carry a path".to_owned())
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    fn request(
        &self,
        method: Method,
        token: &AccessToken,
        segments: &[&str],
    ) -> AppResult<RequestBuilder> {
        Ok(self
            .http_client
            .request(method, self.endpoint(segments)?)
            .header(header::AUTHORIZATION, token.bearer_header())
            .header(header::ACCEPT, "application/json"))
    }

    async fn execute(&self, request: RequestBuilder) -> AppResult<Value> {
        let response = request.send().await.map_err(|error| {
            AppError::Upstream(format!("failed to reach platform API: {error}"))
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<body unavailable>".to_owned());

        if !status.is_success() {
            return Err(status_error(status, &body));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&body).map_err(|error| {
            AppError::Upstream(format!("platform API returned invalid JSON: {error}"))
        })
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> AppResult<T> {
    serde_json::from_value(value).map_err(|error| {
        AppError::Upstream(format!(
            "platform API response has an unexpected shape: {error}"
        ))
    })
}

/// Maps a non-success platform status onto the error taxonomy.
pub(crate) fn status_error(status: StatusCode, body: &str) -> AppError {
    let message = platform_message(body).unwrap_or_else(|| {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("no message")
                .to_owned()
        } else {
            trimmed.to_owned()
        }
    });

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation(message),
        StatusCode::UNAUTHORIZED => AppError::Unauthorized(message),
        StatusCode::FORBIDDEN => AppError::Forbidden(message),
        StatusCode::NOT_FOUND => AppError::NotFound(message),
        StatusCode::CONFLICT => AppError::Conflict(message),
        _ => AppError::Upstream(format!(
            "platform API returned status {}: {message}",
            status.as_u16()
        )),
    }
}

fn platform_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(Value::as_str))
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use coachdesk_core::AppError;
    use reqwest::StatusCode;

    use super::{PlatformApiClient, status_error};

    #[test]
    fn endpoint_appends_encoded_segments() {
        let client = PlatformApiClient::new("https://api.example.test/v1/", Duration::from_secs(5))
            .unwrap_or_else(|_| unreachable!());

        let url = client
            .endpoint(&["articles", "a/b c"])
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(url.as_str(), "https://api.example.test/v1/articles/a%2Fb%20c");
    }

    #[test]
    fn endpoint_works_without_base_path() {
        let client = PlatformApiClient::new("http://127.0.0.1:4000", Duration::from_secs(5))
            .unwrap_or_else(|_| unreachable!());

        let url = client
            .endpoint(&["admin", "hero-banners", "order"])
            .unwrap_or_else(|_| unreachable!());

        assert_eq!(url.as_str(), "http://127.0.0.1:4000/admin/hero-banners/order");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let result = PlatformApiClient::new("not a url", Duration::from_secs(5));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn statuses_map_to_error_categories() {
        assert!(matches!(
            status_error(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"code taken"}"#),
            AppError::Validation(message) if message == "code taken"
        ));
        assert!(matches!(
            status_error(StatusCode::UNAUTHORIZED, ""),
            AppError::Unauthorized(message) if message == "Unauthorized"
        ));
        assert!(matches!(
            status_error(StatusCode::FORBIDDEN, r#"{"error":"admins only"}"#),
            AppError::Forbidden(message) if message == "admins only"
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND, "missing"),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            status_error(StatusCode::CONFLICT, "{}"),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            status_error(StatusCode::BAD_GATEWAY, "down"),
            AppError::Upstream(message) if message.contains("502")
        ));
    }
}
