//! Page Context Resolver
//!
//! Storybook renders docs inside a preview iframe. Both extractors scrape
//! that frame's document when it shows up in time and the top-level page
//! otherwise. Falling back is not an error.

use tracing::{info, warn};

use crate::config::ScrapeTimeouts;
use crate::dom::{DomContext, DomHost, wait_until};
use crate::page_model::{PageModel, js_scripts};

/// Resolve the document to scrape on a navigated page
pub async fn resolve_context<H, M>(host: &H, model: &M, timeouts: &ScrapeTimeouts) -> DomContext
where
    H: DomHost,
    M: PageModel,
{
    let preview = model.preview();
    let check = js_scripts::frame_check(&preview);

    if wait_until(host, &check, timeouts.preview_frame, timeouts.selector_poll).await {
        info!("Using preview frame '{}'", preview.frame_selector);
        DomContext::PreviewFrame {
            frame_selector: preview.frame_selector.to_string(),
        }
    } else {
        warn!(
            "Preview frame '{}' not found within {:?}, scraping the top-level document",
            preview.frame_selector, timeouts.preview_frame
        );
        DomContext::TopLevel
    }
}
