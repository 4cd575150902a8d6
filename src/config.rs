//! Client configuration.
//!
//! Use the builder methods to customize, or [`ClientConfig::from_env`] to
//! read the `RAGDESK_*` environment variables.
//!
//! ```ignore
//! use ragdesk::config::ClientConfig;
//!
//! let config = ClientConfig::default()
//!     .with_base_url("http://localhost:9000")
//!     .with_stream_chunk_chars(10);
//! ```

use std::time::Duration;

use crate::error::{DeskError, DeskResult};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_USER_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const DEFAULT_QUERY_ID: &str = "query_1";
pub const DEFAULT_WELCOME_MESSAGE: &str = "Welcome to the AI-powered document evaluation system. \
You can ask questions about the documents you've uploaded. Let's get started!";

/// How the `query_id` of each chat request is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryIdStrategy {
    /// The same identifier for every query.
    Fixed(String),
    /// A fresh UUID v4 per query.
    PerQuery,
}

impl QueryIdStrategy {
    pub fn next_id(&self) -> String {
        match self {
            QueryIdStrategy::Fixed(id) => id.clone(),
            QueryIdStrategy::PerQuery => uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without trailing slash
    pub base_url: String,
    /// User identifier sent with chat, upload and RAG requests
    pub user_id: String,
    pub query_id: QueryIdStrategy,
    /// Request streamed chat delivery (default: true)
    pub stream: bool,
    /// Characters per re-chunked piece while streaming (default: 10)
    pub stream_chunk_chars: usize,
    /// Distance from bottom, in pixels, that still counts as "at the bottom"
    pub auto_scroll_threshold: u32,
    /// Quiet period after the last scroll event before auto-follow resumes
    pub scroll_debounce: Duration,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// System message the transcript starts with
    pub welcome_message: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID.to_string(),
            query_id: QueryIdStrategy::Fixed(DEFAULT_QUERY_ID.to_string()),
            stream: true,
            stream_chunk_chars: 10,
            auto_scroll_threshold: 100,
            scroll_debounce: Duration::from_millis(500),
            request_timeout: None,
            welcome_message: Some(DEFAULT_WELCOME_MESSAGE.to_string()),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_query_id(mut self, strategy: QueryIdStrategy) -> Self {
        self.query_id = strategy;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    /// Set the re-chunk size. Zero is treated as one.
    pub fn with_stream_chunk_chars(mut self, chars: usize) -> Self {
        self.stream_chunk_chars = chars.max(1);
        self
    }

    pub fn with_auto_scroll_threshold(mut self, pixels: u32) -> Self {
        self.auto_scroll_threshold = pixels;
        self
    }

    pub fn with_scroll_debounce(mut self, debounce: Duration) -> Self {
        self.scroll_debounce = debounce;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_welcome_message(mut self, message: Option<String>) -> Self {
        self.welcome_message = message;
        self
    }

    /// Build a config from `RAGDESK_*` environment variables.
    ///
    /// - `RAGDESK_API_URL` - backend base URL
    /// - `RAGDESK_USER_ID` - user identifier
    /// - `RAGDESK_UNIQUE_QUERY_IDS` - when set, one UUID per query
    /// - `RAGDESK_NO_STREAM` - when set, request non-streamed answers
    /// - `RAGDESK_TIMEOUT_SECS` - request timeout in seconds
    pub fn from_env() -> DeskResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("RAGDESK_API_URL") {
            if url.trim().is_empty() {
                return Err(DeskError::Config("RAGDESK_API_URL is empty".to_string()));
            }
            config = config.with_base_url(url);
        }

        if let Ok(user_id) = std::env::var("RAGDESK_USER_ID") {
            config = config.with_user_id(user_id);
        }

        if std::env::var("RAGDESK_UNIQUE_QUERY_IDS").is_ok() {
            config = config.with_query_id(QueryIdStrategy::PerQuery);
        }

        if std::env::var("RAGDESK_NO_STREAM").is_ok() {
            config = config.with_stream(false);
        }

        if let Ok(secs) = std::env::var("RAGDESK_TIMEOUT_SECS") {
            let secs: u64 = secs
                .parse()
                .map_err(|e| DeskError::Config(format!("invalid RAGDESK_TIMEOUT_SECS: {}", e)))?;
            config = config.with_request_timeout(Some(Duration::from_secs(secs)));
        }

        Ok(config)
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
