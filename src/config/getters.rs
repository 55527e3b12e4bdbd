//! Getter methods for `ServerConfig`

use std::net::{IpAddr, SocketAddr};

use super::types::{ScrapeTimeouts, ServerConfig};
use crate::props::PropFilter;

impl ServerConfig {
    #[must_use]
    pub fn storybook_url(&self) -> &str {
        &self.storybook_url
    }

    #[must_use]
    pub fn bind_address(&self) -> IpAddr {
        self.bind_address
    }

    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }

    #[must_use]
    pub fn headless(&self) -> bool {
        self.headless
    }

    #[must_use]
    pub fn prop_filter(&self) -> PropFilter {
        self.prop_filter
    }

    #[must_use]
    pub fn timeouts(&self) -> &ScrapeTimeouts {
        &self.timeouts
    }
}
