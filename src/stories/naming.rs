//! Story names and code acceptance

use serde::{Deserialize, Serialize};

use crate::utils::FALLBACK_STORY_NAME;

/// Separator between segments of a Storybook id (`title--story`)
pub const ID_SEPARATOR: &str = "--";

/// One example with its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryEntry {
    pub name: String,
    pub code: String,
}

/// Raw anchor as read from the DOM
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawAnchor {
    pub id: Option<String>,
    pub heading: Option<String>,
    pub code: Option<String>,
}

/// Display name of an example
///
/// A non-empty heading wins. Otherwise the last `--` segment of the anchor
/// id is used with its first character upper-cased, so
/// `anchor--example-button--primary` becomes `Primary`.
#[must_use]
pub fn derive_story_name(heading: Option<&str>, anchor_id: Option<&str>) -> String {
    if let Some(heading) = heading.map(str::trim).filter(|h| !h.is_empty()) {
        return heading.to_string();
    }

    anchor_id
        .and_then(|id| id.rsplit(ID_SEPARATOR).next())
        .map(capitalize_first)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_STORY_NAME.to_string())
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trimmed code if it is real source
///
/// Empty text and text containing the reveal label (the toggle never
/// expanded, so only its caption was read) are rejected.
#[must_use]
pub fn accept_code(code: Option<&str>, reveal_label: &str) -> Option<String> {
    let code = code?.trim();
    if code.is_empty() || code.to_lowercase().contains(&reveal_label.to_lowercase()) {
        return None;
    }
    Some(code.to_string())
}

/// Turn raw anchors into story entries, keeping DOM order
#[must_use]
pub fn collect_stories(anchors: Vec<RawAnchor>, reveal_label: &str) -> Vec<StoryEntry> {
    anchors
        .into_iter()
        .filter_map(|anchor| {
            let code = accept_code(anchor.code.as_deref(), reveal_label)?;
            Some(StoryEntry {
                name: derive_story_name(anchor.heading.as_deref(), anchor.id.as_deref()),
                code,
            })
        })
        .collect()
}
