//! Auto-scroll state management.
//!
//! [`AutoScroll`] decides whether newly arrived transcript content should
//! pull the view to the bottom. The view reports scroll events; the chat
//! controller asks [`AutoScroll::should_follow`] whenever content grows.
//!
//! Time is passed in explicitly so the debounce can be driven from tests.

use std::time::{Duration, Instant};

/// Geometry of the scrolled transcript at the moment of a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Total height of the scrollable content
    pub scroll_height: u32,
    /// Offset of the viewport's top edge
    pub scroll_top: u32,
    /// Height of the viewport
    pub client_height: u32,
}

impl ScrollMetrics {
    pub fn new(scroll_height: u32, scroll_top: u32, client_height: u32) -> Self {
        Self {
            scroll_height,
            scroll_top,
            client_height,
        }
    }

    /// Distance between the viewport's bottom edge and the end of content.
    pub fn distance_from_bottom(&self) -> u32 {
        self.scroll_height
            .saturating_sub(self.scroll_top)
            .saturating_sub(self.client_height)
    }
}

/// Follow-the-bottom state machine.
///
/// - A scroll event re-evaluates `should_auto_scroll` against the threshold
///   and marks the user as scrolling.
/// - `is_user_scrolling` clears once no scroll event arrived for the
///   debounce window. Each event re-arms the window.
/// - Content follows when `should_auto_scroll && !is_user_scrolling`.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    should_auto_scroll: bool,
    is_user_scrolling: bool,
    last_scroll_at: Option<Instant>,
    threshold: u32,
    debounce: Duration,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self::new(100, Duration::from_millis(500))
    }
}

impl AutoScroll {
    /// Create a state that follows new content until the user scrolls.
    pub fn new(threshold: u32, debounce: Duration) -> Self {
        Self {
            should_auto_scroll: true,
            is_user_scrolling: false,
            last_scroll_at: None,
            threshold,
            debounce,
        }
    }

    /// Record a scroll event from the view.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, now: Instant) {
        self.on_scroll_distance(metrics.distance_from_bottom(), now);
    }

    /// Record a scroll event given the distance from the bottom directly.
    pub fn on_scroll_distance(&mut self, distance_from_bottom: u32, now: Instant) {
        self.should_auto_scroll = distance_from_bottom <= self.threshold;
        self.is_user_scrolling = true;
        self.last_scroll_at = Some(now);
    }

    /// Clear the scrolling flag once the debounce window has elapsed.
    ///
    /// Returns true if the flag was cleared by this call.
    pub fn settle(&mut self, now: Instant) -> bool {
        match self.debounce_deadline() {
            Some(deadline) if now >= deadline => {
                self.is_user_scrolling = false;
                self.last_scroll_at = None;
                true
            }
            _ => false,
        }
    }

    /// When the pending debounce expires, if one is armed.
    pub fn debounce_deadline(&self) -> Option<Instant> {
        if !self.is_user_scrolling {
            return None;
        }
        self.last_scroll_at.map(|at| at + self.debounce)
    }

    /// Whether new content arriving at `now` should scroll to the bottom.
    pub fn should_follow(&mut self, now: Instant) -> bool {
        self.settle(now);
        self.should_auto_scroll && !self.is_user_scrolling
    }

    /// Submitting a query always returns to following.
    pub fn reset_for_submit(&mut self) {
        self.should_auto_scroll = true;
        self.is_user_scrolling = false;
        self.last_scroll_at = None;
    }

    pub fn should_auto_scroll(&self) -> bool {
        self.should_auto_scroll
    }

    pub fn is_user_scrolling(&self) -> bool {
        self.is_user_scrolling
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}
