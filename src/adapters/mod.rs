//! Concrete implementations of the trait abstractions in `crate::traits`.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//! - [`TracingNotifier`] / [`ConsoleNotifier`] - notification sinks
//!
//! The [`mock`] submodule provides test doubles.

pub mod mock;
pub mod notifier;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockResponse, RecordingNotifier};
pub use notifier::{ConsoleNotifier, TracingNotifier};
pub use reqwest_http::ReqwestHttpClient;
