//! Configuration types for the Storybook tools

use std::net::IpAddr;
use std::time::Duration;

use crate::props::PropFilter;
use crate::utils::{
    CODE_SETTLE_TIMEOUT, NAVIGATION_TIMEOUT, PREVIEW_FRAME_TIMEOUT, PROP_TABLE_TIMEOUT,
    SELECTOR_POLL_INTERVAL, SETTLE_POLL_INTERVAL, STORY_ANCHOR_TIMEOUT,
};

/// Server configuration
///
/// Built with [`ServerConfig::builder`] or loaded from the environment with
/// [`ServerConfig::from_env`]. Only the Storybook base URL is required.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Storybook base URL without a trailing slash
    pub(crate) storybook_url: String,
    pub(crate) bind_address: IpAddr,
    pub(crate) port: u16,
    pub(crate) headless: bool,
    pub(crate) prop_filter: PropFilter,
    pub(crate) timeouts: ScrapeTimeouts,
}

/// Bounds for every wait performed while scraping a page
///
/// Each wait either falls back (preview frame, prop table), fails
/// (story anchors, navigation) or proceeds with what is present (code
/// settling) once its bound elapses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeTimeouts {
    pub navigation: Duration,
    pub preview_frame: Duration,
    pub prop_table: Duration,
    pub story_anchor: Duration,
    pub code_settle: Duration,
    pub selector_poll: Duration,
    pub settle_poll: Duration,
}

impl Default for ScrapeTimeouts {
    fn default() -> Self {
        Self {
            navigation: NAVIGATION_TIMEOUT,
            preview_frame: PREVIEW_FRAME_TIMEOUT,
            prop_table: PROP_TABLE_TIMEOUT,
            story_anchor: STORY_ANCHOR_TIMEOUT,
            code_settle: CODE_SETTLE_TIMEOUT,
            selector_poll: SELECTOR_POLL_INTERVAL,
            settle_poll: SETTLE_POLL_INTERVAL,
        }
    }
}

impl ScrapeTimeouts {
    /// Uniform short bounds, for tests and local fixtures
    #[must_use]
    pub fn uniform(wait: Duration, poll: Duration) -> Self {
        Self {
            navigation: wait,
            preview_frame: wait,
            prop_table: wait,
            story_anchor: wait,
            code_settle: wait,
            selector_poll: poll,
            settle_poll: poll,
        }
    }
}
