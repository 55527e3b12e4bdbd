//! Story Code Extractor
//!
//! Opens every collapsed source block on a docs page, waits for the revealed
//! code to stop changing and reads one name/code pair per example anchor.
//! A page where no example section renders at all is reported as an error:
//! its layout is not one this extractor understands.

mod naming;

pub use naming::{
    ID_SEPARATOR, RawAnchor, StoryEntry, accept_code, collect_stories, derive_story_name,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ScrapeTimeouts;
use crate::dom::{DomHost, evaluate_as, wait_for_selector, wait_for_stable_snapshot};
use crate::error::{Result, StorybookError};
use crate::page_context::resolve_context;
use crate::page_model::{PageModel, js_scripts};

/// Payload of `extract_component_stories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesReport {
    pub total: usize,
    pub stories: Vec<StoryEntry>,
}

impl From<Vec<StoryEntry>> for StoriesReport {
    fn from(stories: Vec<StoryEntry>) -> Self {
        Self {
            total: stories.len(),
            stories,
        }
    }
}

/// Extract example sources from a navigated docs page
pub async fn extract_stories<H, M>(
    host: &H,
    model: &M,
    timeouts: &ScrapeTimeouts,
) -> Result<StoriesReport>
where
    H: DomHost,
    M: PageModel,
{
    let context = resolve_context(host, model, timeouts).await;
    let anchors = model.example_anchors();

    if !wait_for_selector(
        host,
        &context,
        anchors.ready_selector,
        timeouts.story_anchor,
        timeouts.selector_poll,
    )
    .await
    {
        return Err(StorybookError::AnchorNotFound {
            selector: anchors.ready_selector.to_string(),
            timeout: timeouts.story_anchor,
        });
    }

    let reveal = model.reveal_controls();
    let clicked: usize =
        evaluate_as(host, &js_scripts::reveal_controls(&context, &reveal)).await?;
    debug!("Clicked {} reveal control(s)", clicked);

    let snapshot_script = js_scripts::example_anchors(&context, &anchors);
    let outcome = wait_for_stable_snapshot(
        host,
        &snapshot_script,
        timeouts.code_settle,
        timeouts.settle_poll,
    )
    .await?;
    let settled = outcome.is_stable();

    let raw: Vec<RawAnchor> = serde_json::from_value(outcome.into_snapshot()).map_err(|e| {
        StorybookError::Evaluation(format!("Example anchors returned an unexpected shape: {e}"))
    })?;
    let found = raw.len();

    let report = StoriesReport::from(collect_stories(raw, reveal.label));
    info!(
        "Extracted {} story source(s) from {} anchor(s) in the {}{}",
        report.total,
        found,
        if context.is_degraded() { "top-level document" } else { "preview frame" },
        if settled { "" } else { " (code still changing at timeout)" }
    );

    Ok(report)
}
