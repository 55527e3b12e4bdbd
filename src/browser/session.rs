//! Chrome-backed sessions

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use chromiumoxide::page::Page;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::wrapper::BrowserWrapper;
use super::{NavigationWait, PageSession, SessionProvider};
use crate::browser_setup::launch_browser;
use crate::config::ScrapeTimeouts;
use crate::dom::{DomHost, Script, wait_until};
use crate::error::{Result, StorybookError};
use crate::page_model::js_scripts;
use crate::utils::with_page_timeout;

/// One browser process with one navigated page
///
/// The wrapper sits behind a mutex so the session stays `Sync`; only
/// `close` touches it.
pub struct ChromeSession {
    page: Page,
    wrapper: Mutex<BrowserWrapper>,
    label: String,
}

impl DomHost for ChromeSession {
    async fn evaluate(&self, script: &Script) -> Result<Value> {
        DomHost::evaluate(&self.page, script).await
    }
}

impl PageSession for ChromeSession {
    async fn close(self) {
        let ChromeSession {
            page,
            wrapper,
            label,
        } = self;
        let mut wrapper = wrapper.into_inner().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = page.close().await {
            debug!("Page close for {} returned: {}", label, e);
        }
        wrapper.shutdown().await;
        info!("Browser session closed: {}", label);
    }
}

/// Launches a dedicated Chrome per session
#[derive(Debug, Clone)]
pub struct ChromeSessionProvider {
    headless: bool,
    timeouts: ScrapeTimeouts,
}

impl ChromeSessionProvider {
    #[must_use]
    pub fn new(headless: bool, timeouts: ScrapeTimeouts) -> Self {
        Self { headless, timeouts }
    }

    async fn navigate(&self, page: &Page, url: &str, wait: NavigationWait) -> Result<()> {
        with_page_timeout(
            async {
                page.goto(url).await?;
                Ok::<_, anyhow::Error>(())
            },
            self.timeouts.navigation,
            "Navigation",
        )
        .await
        .map_err(|e| StorybookError::Navigation {
            url: url.to_string(),
            message: format!("{e:#}"),
        })?;

        if wait == NavigationWait::DocumentComplete
            && !wait_until(
                page,
                &js_scripts::ready_state_check(),
                self.timeouts.navigation,
                Duration::from_millis(200),
            )
            .await
        {
            warn!("{} did not reach readyState 'complete'; scraping anyway", url);
        }

        Ok(())
    }
}

impl SessionProvider for ChromeSessionProvider {
    type Session = ChromeSession;

    async fn open(&self, url: &str, wait: NavigationWait) -> Result<ChromeSession> {
        let user_data_dir = std::env::temp_dir().join(format!(
            "kodegen_storybook_{}",
            uuid::Uuid::new_v4().simple()
        ));

        let (browser, handler) = launch_browser(self.headless, &user_data_dir)
            .await
            .map_err(|e| StorybookError::Browser(format!("{e:#}")))?;
        let mut wrapper = BrowserWrapper::new(browser, handler, user_data_dir);

        let page = match wrapper.browser().new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                wrapper.shutdown().await;
                return Err(StorybookError::Browser(format!("Failed to create page: {e}")));
            }
        };

        if let Err(e) = self.navigate(&page, url, wait).await {
            let _ = page.close().await;
            wrapper.shutdown().await;
            return Err(e);
        }

        info!("Browser session opened: {}", url);
        Ok(ChromeSession {
            page,
            wrapper: Mutex::new(wrapper),
            label: url.to_string(),
        })
    }
}
