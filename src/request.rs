//! Per-request signing state.
//!
//! A [`RequestState`] is built fresh for every dispatched call, so signing
//! context can never leak between requests. Only the fields a caller has
//! explicitly overridden (timestamp, nonce, verifier) are carried in; unset
//! fields are resolved by the signer at header-build time.

use crate::params::percent_encode;

/// HTTP methods the client dispatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    /// Uppercase wire form, as used in the signature base string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Signing state for a single request.
#[derive(Debug, Clone)]
pub struct RequestState {
    /// HTTP method
    pub method: Method,

    /// Full resource URL, query string included for GET requests
    pub url: String,

    /// Explicit OAuth timestamp; `None` lets the signer use the clock
    pub timestamp: Option<u64>,

    /// Explicit OAuth nonce; `None` lets the signer generate one
    pub nonce: Option<String>,

    /// OAuth verifier for the token exchange step, omitted when unset
    pub verifier: Option<String>,

    /// Form body fields; values are stored percent-encoded
    body_fields: Vec<(String, String)>,
}

impl RequestState {
    /// Create the state for one request.
    #[must_use]
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            timestamp: None,
            nonce: None,
            verifier: None,
            body_fields: Vec::new(),
        }
    }

    /// Store the POST body fields, percent-encoding each value.
    ///
    /// The encoded form is what both the signature base string and the wire
    /// body use; encoding here once keeps the two in agreement.
    pub fn set_body_fields(&mut self, fields: &[(String, String)]) {
        self.body_fields = fields
            .iter()
            .map(|(key, value)| (key.clone(), percent_encode(value)))
            .collect();
    }

    /// The stored body fields, values already percent-encoded.
    #[must_use]
    pub fn body_fields(&self) -> &[(String, String)] {
        &self.body_fields
    }

    /// Render the body fields as an `application/x-www-form-urlencoded` body.
    #[must_use]
    pub(crate) fn form_body(&self) -> String {
        self.body_fields
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
