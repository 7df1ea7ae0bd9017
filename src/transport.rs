//! HTTP plumbing shared by every API call. One `reqwest::Client` carries the
//! fixed base endpoint, the JSON content-negotiation headers, the cookie jar
//! for session and CSRF cookies, and the bearer-token attachment hook. All
//! verbs funnel through a single execute path, so the hook cannot be skipped
//! for an individual request. No retry, no caching, no queuing.

use crate::{config::ApiConfig, error::Error, token::TokenStore, APP_USER_AGENT};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Method, Response,
};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{sync::Arc, time::Duration};
use tracing::{debug, info_span, Instrument};
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Maximum number of error body characters surfaced to callers.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone)]
pub struct Transport {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl Transport {
    /// Build a transport from the endpoint configuration and a token store.
    /// # Errors
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(config: &ApiConfig, tokens: Arc<dyn TokenStore>) -> Result<Self, Error> {
        let base_url = validate_base_url(&config.api_base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .cookie_store(true)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url,
            tokens,
        })
    }

    /// GET a JSON resource relative to the base endpoint.
    /// # Errors
    /// Returns an error if the request fails, the server answers non-2xx, or
    /// the body does not decode.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let url = join_url(&self.base_url, path);
        let response = self.execute(Method::GET, &url, None::<&()>).await?;
        decode_json(response).await
    }

    /// POST a JSON body relative to the base endpoint and decode the reply.
    /// # Errors
    /// Returns an error if the request fails, the server answers non-2xx, or
    /// the body does not decode.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let url = join_url(&self.base_url, path);
        let response = self.execute(Method::POST, &url, Some(body)).await?;
        decode_json(response).await
    }

    /// POST without a body, discarding any response payload.
    /// # Errors
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn post_empty(&self, path: &str) -> Result<(), Error> {
        let url = join_url(&self.base_url, path);
        self.execute(Method::POST, &url, None::<&()>).await?;
        Ok(())
    }

    /// Cookie-bearing GET against a full URL outside the base prefix. Used
    /// for the CSRF priming endpoint, which is not under the API root.
    /// # Errors
    /// Returns an error if the request fails or the server answers non-2xx.
    pub async fn get_absolute(&self, url: &str) -> Result<(), Error> {
        self.execute(Method::GET, url, None::<&()>).await?;
        Ok(())
    }

    async fn execute<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, Error> {
        debug!("request: {} {}", method, url);

        let mut request = self.client.request(method.clone(), url);

        // Every request passes through here; a stored token always rides along.
        if let Some(token) = self.tokens.get() {
            request = request.bearer_auth(token.expose_secret());
        }

        if let Some(body) = body {
            request = request.json(body);
        }

        let span = info_span!(
            "api.request",
            http.method = %method,
            url = %url
        );
        let response = request
            .send()
            .instrument(span)
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(Error::Api {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url)
            .finish()
    }
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    response
        .json::<T>()
        .await
        .map_err(|e| Error::Parse(format!("failed to decode response: {e}")))
}

fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::Timeout("request timed out".to_string())
    } else {
        Error::Network(format!("unable to reach the server: {err}"))
    }
}

/// Extract the server's `message` field when the body is JSON; otherwise
/// surface a sanitized slice of the raw body.
fn error_message(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(message) = json.get("message").and_then(Value::as_str) {
            let trimmed = message.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    sanitize_body(body)
}

fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn validate_base_url(raw: &str) -> Result<String, Error> {
    let url =
        Url::parse(raw).map_err(|e| Error::Config(format!("invalid base URL {raw}: {e}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(Error::Config(format!(
                "unsupported scheme {scheme} in base URL"
            )))
        }
    }

    if url.host().is_none() {
        return Err(Error::Config("base URL has no host".to_string()));
    }

    Ok(raw.trim().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("http://127.0.0.1:8000/api", "/login"),
            "http://127.0.0.1:8000/api/login"
        );
        assert_eq!(
            join_url("http://127.0.0.1:8000/api/", "login"),
            "http://127.0.0.1:8000/api/login"
        );
    }

    #[test]
    fn validate_base_url_accepts_http_and_https() {
        assert!(validate_base_url("http://127.0.0.1:8000/api").is_ok());
        assert!(validate_base_url("https://api.madrasati.app/api").is_ok());
    }

    #[test]
    fn validate_base_url_rejects_unsupported_scheme() {
        let err = validate_base_url("ftp://example.com/api").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn validate_base_url_strips_trailing_slash() {
        let base = validate_base_url("http://127.0.0.1:8000/api/").expect("valid base URL");
        assert_eq!(base, "http://127.0.0.1:8000/api");
    }

    #[test]
    fn error_message_prefers_json_message_field() {
        let body = r#"{"message": "Email already taken", "errors": {}}"#;
        assert_eq!(error_message(body), "Email already taken");
    }

    #[test]
    fn error_message_falls_back_to_raw_body() {
        assert_eq!(error_message("Server Error"), "Server Error");
        assert_eq!(error_message(""), "Request failed.");
    }

    #[test]
    fn error_message_truncates_long_bodies() {
        let body = "x".repeat(1000);
        assert_eq!(error_message(&body).len(), MAX_ERROR_CHARS);
    }
}
