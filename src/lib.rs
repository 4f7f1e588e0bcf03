//! Twitter REST API v1.1 client with OAuth 1.0a request signing.
//!
//! Every operation funnels through a single request-building core
//! ([`Client`]): compose the URL, build fresh per-request signing state,
//! obtain an HMAC-SHA1 signature, assemble the `Authorization` header, and
//! perform one HTTP round trip. Resource wrappers ([`Statuses`],
//! [`DirectMessages`]) add allow-list parameter filtering per endpoint and
//! nothing else.
//!
//! ## Usage
//!
//! ```no_run
//! use chirp::{Client, Config, Statuses};
//!
//! # async fn run() -> chirp::Result<()> {
//! let client = Client::new(&Config {
//!     consumer_key: "ck".into(),
//!     consumer_secret: "cs".into(),
//!     access_token: "at".into(),
//!     access_token_secret: "ats".into(),
//!     ..Default::default()
//! })?;
//!
//! let timeline = Statuses::new(&client)
//!     .retrieve_user_timeline(&[("screen_name", "rustlang"), ("count", "20")])
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! Response bodies come back as opaque strings; this crate does not model
//! the API's payloads. By default, 4xx/5xx responses also come back as
//! their message text ([`ErrorMode::Lenient`]); switch to
//! [`ErrorMode::Strict`] for typed errors.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod client;
mod config;
mod direct_messages;
mod error;
mod oauth;
pub mod params;
mod request;
mod statuses;

pub use client::Client;
pub use config::{Config, ErrorMode};
pub use direct_messages::DirectMessages;
pub use error::{Error, Result};
pub use oauth::Signer;
pub use request::{Method, RequestState};
pub use statuses::Statuses;
