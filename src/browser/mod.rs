//! Browser sessions
//!
//! Prop and story extraction each run in a session of their own: one Chrome
//! process, one profile directory, one page. The gateway acquires a session
//! through a [`SessionProvider`] and always hands it back through
//! [`PageSession::close`], whatever the extraction returned.

mod session;
mod wrapper;

pub use session::{ChromeSession, ChromeSessionProvider};
pub use wrapper::BrowserWrapper;

use std::future::Future;

use crate::dom::DomHost;
use crate::error::Result;

/// How long to wait after navigation before scraping starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationWait {
    /// Wait for the navigation's load event
    Load,
    /// Additionally poll until `document.readyState === "complete"`
    DocumentComplete,
}

/// A navigated page that extraction scripts can run against
pub trait PageSession: DomHost {
    /// Release the page and everything acquired for it
    fn close(self) -> impl Future<Output = ()> + Send;
}

/// Opens a fresh, exclusively owned session per call
pub trait SessionProvider: Send + Sync {
    type Session: PageSession;

    /// Launch a browser and navigate to `url`
    fn open(&self, url: &str, wait: NavigationWait)
    -> impl Future<Output = Result<Self::Session>> + Send;
}
