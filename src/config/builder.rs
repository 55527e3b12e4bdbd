//! Type-safe builder for `ServerConfig` using the typestate pattern
//!
//! The Storybook base URL is the only required field; `build()` exists only
//! once it has been supplied.

use std::marker::PhantomData;
use std::net::IpAddr;

use super::types::{ScrapeTimeouts, ServerConfig};
use crate::error::{Result, StorybookError};
use crate::props::PropFilter;
use crate::utils::{DEFAULT_BIND_ADDRESS, DEFAULT_PORT, is_valid_url, normalize_base_url};

// Type states for the builder
pub struct WithSiteUrl;

pub struct ServerConfigBuilder<State = ()> {
    pub(crate) storybook_url: Option<String>,
    pub(crate) bind_address: String,
    pub(crate) port: u16,
    pub(crate) headless: bool,
    pub(crate) prop_filter: PropFilter,
    pub(crate) timeouts: ScrapeTimeouts,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for ServerConfigBuilder<()> {
    fn default() -> Self {
        Self {
            storybook_url: None,
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            headless: true,
            prop_filter: PropFilter::default(),
            timeouts: ScrapeTimeouts::default(),
            _phantom: PhantomData,
        }
    }
}

impl ServerConfig {
    /// Create a builder for configuring a `ServerConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> ServerConfigBuilder<()> {
        ServerConfigBuilder::default()
    }
}

impl ServerConfigBuilder<()> {
    pub fn storybook_url(self, url: impl Into<String>) -> ServerConfigBuilder<WithSiteUrl> {
        ServerConfigBuilder {
            storybook_url: Some(normalize_base_url(&url.into())),
            bind_address: self.bind_address,
            port: self.port,
            headless: self.headless,
            prop_filter: self.prop_filter,
            timeouts: self.timeouts,
            _phantom: PhantomData,
        }
    }
}

impl<State> ServerConfigBuilder<State> {
    #[must_use]
    pub fn bind_address(mut self, address: impl Into<String>) -> Self {
        self.bind_address = address.into();
        self
    }

    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    #[must_use]
    pub fn headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    #[must_use]
    pub fn prop_filter(mut self, filter: PropFilter) -> Self {
        self.prop_filter = filter;
        self
    }

    #[must_use]
    pub fn timeouts(mut self, timeouts: ScrapeTimeouts) -> Self {
        self.timeouts = timeouts;
        self
    }
}

impl ServerConfigBuilder<WithSiteUrl> {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns `StorybookError::Config` if the Storybook URL is not an
    /// http(s) URL or the bind address is not an IP address.
    pub fn build(self) -> Result<ServerConfig> {
        let storybook_url = self.storybook_url.unwrap_or_default();
        if !is_valid_url(&storybook_url) {
            return Err(StorybookError::Config(format!(
                "Storybook URL '{storybook_url}' is not a valid http(s) URL"
            )));
        }

        let bind_address: IpAddr = self.bind_address.parse().map_err(|e| {
            StorybookError::Config(format!(
                "Bind address '{}' is not an IP address: {e}",
                self.bind_address
            ))
        })?;

        Ok(ServerConfig {
            storybook_url,
            bind_address,
            port: self.port,
            headless: self.headless,
            prop_filter: self.prop_filter,
            timeouts: self.timeouts,
        })
    }
}
