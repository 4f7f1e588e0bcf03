//! Convenience wrappers for the direct message endpoints.

use crate::client::Client;
use crate::error::Result;
use crate::params::filter;

const LATEST_MESSAGES_PARAMS: &[&str] = &[
    "since_id",
    "max_id",
    "count",
    "include_entities",
    "skip_status",
];

const LATEST_SENT_MESSAGES_PARAMS: &[&str] =
    &["since_id", "max_id", "count", "include_entities", "page"];

/// Wrapper for the direct message endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DirectMessages<'a> {
    client: &'a Client,
}

impl<'a> DirectMessages<'a> {
    #[must_use]
    pub const fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Retrieve the most recent direct messages sent to the authenticated
    /// user.
    pub async fn retrieve_latest_messages(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "direct_messages.json",
                &filter(LATEST_MESSAGES_PARAMS, options),
            )
            .await
    }

    /// Retrieve the most recent direct messages sent by the authenticated
    /// user.
    pub async fn retrieve_latest_sent_messages(&self, options: &[(&str, &str)]) -> Result<String> {
        self.client
            .get(
                "direct_messages/sent.json",
                &filter(LATEST_SENT_MESSAGES_PARAMS, options),
            )
            .await
    }
}
