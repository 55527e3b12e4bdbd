//! Shared configuration constants for the Storybook tools
//!
//! Default values used throughout the codebase to keep timeouts, selectors
//! and fallbacks consistent and avoid magic numbers.

use std::time::Duration;

/// Default HTTP listen port for the streamable MCP transport
pub const DEFAULT_PORT: u16 = 3000;

/// Default bind address for the streamable MCP transport
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0";

/// Path the MCP service is mounted under
pub const MCP_ENDPOINT_PATH: &str = "/mcp";

/// Primary Storybook index (Storybook 7+), entries under `entries`
pub const PRIMARY_MANIFEST: &str = "index.json";

/// Legacy Storybook index (Storybook 6), entries under `stories`
pub const LEGACY_MANIFEST: &str = "stories.json";

/// Timeout for a single manifest request
pub const MANIFEST_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Page navigation timeout
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Bounded wait for the preview iframe
pub const PREVIEW_FRAME_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounded wait for the first prop table row
pub const PROP_TABLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Bounded wait for the first story anchor
pub const STORY_ANCHOR_TIMEOUT: Duration = Duration::from_secs(10);

/// Upper bound for revealed code blocks to stop changing
pub const CODE_SETTLE_TIMEOUT: Duration = Duration::from_secs(2);

/// Interval between DOM checks while waiting for a selector
pub const SELECTOR_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Interval between snapshots while waiting for revealed code to settle
pub const SETTLE_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Component name reported when the docs page has no title element
pub const UNKNOWN_COMPONENT: &str = "Unknown";

/// Story name used when neither a heading nor an anchor id is available
pub const FALLBACK_STORY_NAME: &str = "Story";

/// Chrome user agent string
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
