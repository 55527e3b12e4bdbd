//! Error types for Storybook extraction
//!
//! Fatal conditions of every tool share one enum so the gateway can convert
//! them to a failure payload in a single place. Degraded-but-usable states
//! (preview frame missing, no prop table rendered) are not represented here:
//! they are absorbed where they happen and only logged.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Storybook operations
pub type Result<T> = std::result::Result<T, StorybookError>;

/// Error types for Storybook operations
#[derive(Debug, Error)]
pub enum StorybookError {
    /// Neither the primary nor the legacy manifest could be read
    #[error("Storybook manifest unavailable (index.json: {primary}; stories.json: {legacy})")]
    ManifestUnavailable { primary: String, legacy: String },

    /// No example section rendered within the bounded wait
    #[error(
        "No story sections matching '{selector}' appeared within {}s; the page does not look like a Storybook docs page",
        .timeout.as_secs_f64()
    )]
    AnchorNotFound { selector: String, timeout: Duration },

    /// DOM-side script failed or returned an unexpected shape
    #[error("Page evaluation failed: {0}")]
    Evaluation(String),

    /// Navigation did not complete
    #[error("Failed to load {url}: {message}")]
    Navigation { url: String, message: String },

    /// Browser could not be launched or a page could not be opened
    #[error("Browser session failed: {0}")]
    Browser(String),

    /// Tool name is not one of the published operations
    #[error("Unknown tool '{0}'")]
    NotFound(String),

    /// Tool arguments are missing or malformed
    #[error("{0}")]
    InvalidArguments(String),

    /// Startup configuration is invalid
    #[error("Configuration error: {0}")]
    Config(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl From<anyhow::Error> for StorybookError {
    fn from(error: anyhow::Error) -> Self {
        StorybookError::Other(format!("{error:#}"))
    }
}

impl From<chromiumoxide::error::CdpError> for StorybookError {
    fn from(error: chromiumoxide::error::CdpError) -> Self {
        StorybookError::Evaluation(error.to_string())
    }
}

impl StorybookError {
    /// Whether the error was caused by the caller rather than the site or browser
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            StorybookError::NotFound(_) | StorybookError::InvalidArguments(_)
        )
    }
}
