//! Core request building and dispatch.
//!
//! Every wrapper operation funnels through [`Client::get`] or
//! [`Client::post`]: compose the full URL, build a fresh [`RequestState`],
//! obtain the `Authorization` header from the signer, and perform exactly
//! one HTTP round trip.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use tracing::{debug, warn};

use crate::config::{Config, ErrorMode};
use crate::error::{Error, Result};
use crate::oauth::Signer;
use crate::params::query_string;
use crate::request::{Method, RequestState};

/// Twitter REST API v1.1 client.
///
/// Holds only long-term state: the HTTP client, the signer with its
/// credentials, and any explicit signing overrides. Per-request signing
/// state is built fresh for each call, so calls never contaminate each
/// other.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    signer: Signer,
    error_mode: ErrorMode,
    overrides: Overrides,
}

/// Explicit signing overrides, applied to every fresh request state.
///
/// Timestamp and nonce overrides exist for deterministic signing in tests;
/// the verifier is needed once during the access-token exchange.
#[derive(Debug, Clone, Default)]
struct Overrides {
    timestamp: Option<u64>,
    nonce: Option<String>,
    verifier: Option<String>,
}

impl Client {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("chirp/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: format!("{}/", config.api_url.trim_end_matches('/')),
            signer: Signer::new(config),
            error_mode: config.error_mode,
            overrides: Overrides::default(),
        })
    }

    /// Pin the OAuth timestamp for subsequent requests.
    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.overrides.timestamp = Some(timestamp);
    }

    /// Pin the OAuth nonce for subsequent requests.
    pub fn set_nonce(&mut self, nonce: impl Into<String>) {
        self.overrides.nonce = Some(nonce.into());
    }

    /// Carry an `oauth_verifier` in subsequent requests.
    pub fn set_verifier(&mut self, verifier: impl Into<String>) {
        self.overrides.verifier = Some(verifier.into());
    }

    /// Drop all signing overrides, returning to generated values.
    pub fn clear_overrides(&mut self) {
        self.overrides = Overrides::default();
    }

    /// Make a signed GET request to a relative endpoint.
    ///
    /// Params become the query string in the order given; an empty slice
    /// produces a URL with no `?` suffix.
    pub async fn get(&self, endpoint: &str, params: &[(String, String)]) -> Result<String> {
        let url = format!("{}{}{}", self.base_url, endpoint, query_string(params));
        let state = self.request_state(Method::Get, url);

        let header = self.signer.authorization_header(&state)?;
        debug!(method = "GET", url = %state.url, "dispatching signed request");

        let result = match self
            .http
            .get(state.url.as_str())
            .header(AUTHORIZATION, &header)
            .send()
            .await
        {
            Ok(response) => handle_response(response).await,
            Err(e) => Err(Error::Http(e)),
        };

        self.finish(result)
    }

    /// Make a signed POST request to a relative endpoint.
    ///
    /// Params are stored as body fields with their values percent-encoded,
    /// signed, and sent as an `application/x-www-form-urlencoded` body.
    pub async fn post(&self, endpoint: &str, params: &[(String, String)]) -> Result<String> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut state = self.request_state(Method::Post, url);
        state.set_body_fields(params);

        let header = self.signer.authorization_header(&state)?;
        debug!(method = "POST", url = %state.url, "dispatching signed request");

        let result = match self
            .http
            .post(state.url.as_str())
            .header(AUTHORIZATION, &header)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(state.form_body())
            .send()
            .await
        {
            Ok(response) => handle_response(response).await,
            Err(e) => Err(Error::Http(e)),
        };

        self.finish(result)
    }

    /// Build the per-call signing state, applying any overrides.
    fn request_state(&self, method: Method, url: String) -> RequestState {
        let mut state = RequestState::new(method, url);
        state.timestamp = self.overrides.timestamp;
        state.nonce = self.overrides.nonce.clone();
        state.verifier = self.overrides.verifier.clone();
        state
    }

    /// Apply the configured error mode to an API-level failure.
    ///
    /// Under the lenient default, a 4xx/5xx response comes back as its
    /// message text in place of a body; callers distinguish it by content.
    /// Transport failures stay typed in both modes.
    fn finish(&self, result: Result<String>) -> Result<String> {
        match result {
            Err(e @ (Error::Api { .. } | Error::Unauthorized { .. }))
                if self.error_mode == ErrorMode::Lenient =>
            {
                warn!(error = %e, "returning API error as response body");
                Ok(e.to_string())
            }
            other => other,
        }
    }
}

/// Convert an HTTP response into a body string or a typed error.
async fn handle_response(response: Response) -> Result<String> {
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return Ok(text);
    }

    let message = extract_error_message(&text, status);

    if status == StatusCode::UNAUTHORIZED {
        Err(Error::Unauthorized { message })
    } else {
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull the message out of a v1.1 error payload, falling back to the raw
/// body or the status line.
fn extract_error_message(body: &str, status: StatusCode) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorPayload {
        #[serde(default)]
        errors: Vec<ErrorDetail>,
    }

    #[derive(serde::Deserialize)]
    struct ErrorDetail {
        message: String,
    }

    serde_json::from_str::<ErrorPayload>(body)
        .ok()
        .and_then(|payload| payload.errors.into_iter().next())
        .map(|detail| detail.message)
        .unwrap_or_else(|| {
            if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body.to_string()
            }
        })
}
