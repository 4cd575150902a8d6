//! Domain objects shared by the chat and document views.
//!
//! - [`AutoScroll`] - follow-the-bottom decision for the transcript

pub mod scroll;

pub use scroll::{AutoScroll, ScrollMetrics};
