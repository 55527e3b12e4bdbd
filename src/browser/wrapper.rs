//! Browser process ownership

use chromiumoxide::browser::Browser;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Owns a browser, its event handler task and its profile directory
///
/// `shutdown()` closes Chrome gracefully. If the wrapper is dropped without
/// it (task aborted, panic), the handler is aborted, chromiumoxide kills the
/// child process on `Browser` drop, and the profile directory is removed.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    pub(crate) fn new(browser: Browser, handler: JoinHandle<()>, user_data_dir: PathBuf) -> Self {
        Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        }
    }

    /// Get reference to inner browser
    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close Chrome, wait for the process to exit and remove the profile
    ///
    /// Safe to call more than once.
    pub async fn shutdown(&mut self) {
        if let Err(e) = self.browser.close().await {
            debug!("Browser close returned: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            debug!("Browser wait returned: {}", e);
        }
        self.handler.abort();
        self.cleanup_temp_dir();
    }

    /// Remove the profile directory
    ///
    /// MUST run after Chrome exited; Windows refuses to remove locked files.
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            debug!("Cleaning up profile directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                warn!(
                    "Failed to clean up profile directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();
        if self.user_data_dir.is_some() {
            info!("BrowserWrapper dropped without shutdown - removing profile in Drop");
            self.cleanup_temp_dir();
        }
    }
}
