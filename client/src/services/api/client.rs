//! # API Client
//!
//! Authenticated HTTP client for the swap API.
//!
//! Every request carries `Authorization: Bearer <token>`, with the token read
//! from the injected [`TokenProvider`] at call time. There is no retry, no
//! backoff and no timeout: failures go straight back to the caller.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde_json::Value;
use shared::ErrorResponse;
use std::sync::Arc;

use crate::config::normalize_base_url;
use crate::core::{AppError, Result, TokenProvider};

/// Method, extra headers and JSON body of a request.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl FetchConfig {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// HTTP client for the swap API.
///
/// Holds one connection pool for the lifetime of the application.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base_url: &str, tokens: Arc<dyn TokenProvider>) -> Self {
        let client = Client::builder().build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Falling back to default HTTP client");
            Client::new()
        });

        Self {
            client,
            base_url: normalize_base_url(base_url),
            tokens,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/create/`
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Build the request without sending it.
    pub fn build_request(&self, path: &str, config: &FetchConfig) -> RequestBuilder {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in config.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        match self.tokens.access_token() {
            Some(token) => match HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(AUTHORIZATION, value);
                }
                Err(_) => tracing::warn!("Stored access token is not a valid header value"),
            },
            None => tracing::warn!(path = path, "No access token available, sending unauthenticated"),
        }

        let mut builder = self
            .client
            .request(config.method.clone(), self.url(path))
            .headers(headers);

        if let Some(body) = &config.body {
            builder = builder.body(body.to_string());
        }

        builder
    }

    /// Send an authenticated request.
    ///
    /// Returns the raw response for 2xx statuses. Transport failures become
    /// [`AppError::Network`], other statuses [`AppError::Http`].
    pub async fn fetch_with_auth(&self, path: &str, config: FetchConfig) -> Result<Response> {
        let response = self
            .build_request(path, &config)
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(http_error(status, &body))
    }
}

/// Map a non-2xx status and its body to [`AppError::Http`].
pub(crate) fn http_error(status: StatusCode, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|e| e.error)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    AppError::Http {
        status: status.as_u16(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::token::StaticToken;

    fn client_with(token: StaticToken) -> ApiClient {
        ApiClient::new("http://api.test/swap/", Arc::new(token))
    }

    #[test]
    fn test_url_joins_paths() {
        let client = client_with(StaticToken::none());
        assert_eq!(client.base_url(), "http://api.test/swap");
        assert_eq!(client.url("/create/"), "http://api.test/swap/create/");
        assert_eq!(client.url("requests/"), "http://api.test/swap/requests/");
    }

    #[test]
    fn test_request_carries_bearer_token_and_json_type() {
        let client = client_with(StaticToken::new("secret-token"));
        let request = client
            .build_request("/requests/", &FetchConfig::get())
            .build()
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "http://api.test/swap/requests/");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer secret-token");
        assert_eq!(request.headers()[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn test_request_without_token_has_no_authorization() {
        let client = client_with(StaticToken::none());
        let request = client
            .build_request("/requests/", &FetchConfig::get())
            .build()
            .unwrap();

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_token_read_at_call_time() {
        struct Rotating(parking_lot::Mutex<u32>);
        impl TokenProvider for Rotating {
            fn access_token(&self) -> Option<String> {
                let mut n = self.0.lock();
                *n += 1;
                Some(format!("token-{}", n))
            }
        }

        let client = ApiClient::new("http://api.test", Arc::new(Rotating(parking_lot::Mutex::new(0))));
        let first = client.build_request("/a/", &FetchConfig::get()).build().unwrap();
        let second = client.build_request("/a/", &FetchConfig::get()).build().unwrap();

        assert_eq!(first.headers()[AUTHORIZATION], "Bearer token-1");
        assert_eq!(second.headers()[AUTHORIZATION], "Bearer token-2");
    }

    #[test]
    fn test_body_is_serialized_json() {
        let client = client_with(StaticToken::new("t"));
        let config = FetchConfig::post()
            .json(&serde_json::json!({ "from_session": 1 }))
            .unwrap();
        let request = client.build_request("/create/", &config).build().unwrap();

        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let body: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(body["from_session"], 1);
    }

    #[test]
    fn test_http_error_prefers_error_body() {
        let err = http_error(StatusCode::CONFLICT, r#"{"error":"Sessions overlap"}"#);
        assert!(matches!(
            err,
            AppError::Http { status: 409, ref message } if message == "Sessions overlap"
        ));

        let err = http_error(StatusCode::NOT_FOUND, "<html>nope</html>");
        assert!(matches!(
            err,
            AppError::Http { status: 404, ref message } if message == "Not Found"
        ));
    }
}
