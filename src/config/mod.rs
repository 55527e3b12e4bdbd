//! Configuration module for the Storybook tools
//!
//! Provides `ServerConfig`, its type-safe builder and environment loading,
//! plus `ScrapeTimeouts` which bounds every wait performed on a page.

// Sub-modules
pub mod builder;
pub mod env;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{ServerConfigBuilder, WithSiteUrl};
pub use types::{ScrapeTimeouts, ServerConfig};
