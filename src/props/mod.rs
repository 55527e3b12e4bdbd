//! Prop Table Extractor
//!
//! Reads the args tables of a docs page and normalizes their rows. A page
//! without any table is a valid result (a component may take no args).

mod normalize;

pub use normalize::{
    HEADER_ARTIFACT_NAMES, PLACEHOLDER_DEFAULT, PropFilter, PropRow, STRICT_ARTIFACT_NAMES,
    clean_prop_name, normalize_rows,
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ScrapeTimeouts;
use crate::dom::{DomHost, evaluate_as, wait_for_selector};
use crate::error::Result;
use crate::page_context::resolve_context;
use crate::page_model::{PageModel, js_scripts};
use crate::utils::UNKNOWN_COMPONENT;

/// Payload of `analyze_storybook_props`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropsReport {
    pub component: String,
    pub props: Vec<PropRow>,
}

/// Raw result of the prop table script
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPropTables {
    title: Option<String>,
    #[serde(default)]
    table_count: usize,
    table_selector: Option<String>,
    #[serde(default)]
    rows: Vec<Vec<String>>,
}

/// Extract the prop table of a navigated docs page
pub async fn extract_props<H, M>(
    host: &H,
    model: &M,
    timeouts: &ScrapeTimeouts,
    filter: PropFilter,
) -> Result<PropsReport>
where
    H: DomHost,
    M: PageModel,
{
    let context = resolve_context(host, model, timeouts).await;
    let tables = model.property_tables();

    if !wait_for_selector(
        host,
        &context,
        tables.ready_selector,
        timeouts.prop_table,
        timeouts.selector_poll,
    )
    .await
    {
        warn!(
            "No prop table rows ('{}') within {:?}; continuing with what is rendered",
            tables.ready_selector, timeouts.prop_table
        );
    }

    let raw: RawPropTables =
        evaluate_as(host, &js_scripts::prop_tables(&context, &tables)).await?;

    let component = raw
        .title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| UNKNOWN_COMPONENT.to_string());

    debug!(
        "Found {} table(s) via {:?} with {} row(s)",
        raw.table_count,
        raw.table_selector,
        raw.rows.len()
    );

    let props = normalize_rows(&raw.rows, filter);
    info!(
        "Extracted {} prop(s) for '{}' ({} filter, {})",
        props.len(),
        component,
        filter,
        if context.is_degraded() { "top-level document" } else { "preview frame" }
    );

    Ok(PropsReport { component, props })
}
