//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP operations (GET, POST, PUT, streaming POST)
//! - [`Notifier`] - user-visible success/error notifications

pub mod http;
pub mod notifier;

pub use http::{json_headers, ByteStream, Headers, HttpClient, HttpError, Response};
pub use notifier::{Notification, NotificationKind, Notifier};
