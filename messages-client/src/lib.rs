//! Client for the upstream member `/messages` API.
//!
//! Public surface:
//! - [`MessagesClient`] performs one GET per call and normalizes the body;
//! - [`MemberMessage`] is the structurally-open record the API returns;
//! - [`MessagesClientConfig`] holds the immutable upstream settings;
//! - [`MessagesError`] / [`ConfigError`] cover every failure the client reports.

pub mod client;
pub mod config;
pub mod error_handler;
pub mod message;

pub use client::{MessagesClient, decode_messages};
pub use config::MessagesClientConfig;
pub use error_handler::{ConfigError, MessagesError, Result};
pub use message::{MemberMessage, is_truthy};
