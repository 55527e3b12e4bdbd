//! Folding manifest entries into the component catalog

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use super::types::{CatalogEntry, ComponentCatalog, ComponentGroup, ManifestEntry, StoryRef};
use crate::utils::{docs_page_url, story_page_url};

/// Pull the entry collection out of a manifest document
///
/// `index.json` keeps entries under `entries`, `stories.json` under
/// `stories`; both keys are checked whichever document was fetched. The
/// collection is usually an object keyed by id, but arrays are accepted too.
/// Returns `None` when neither key holds a collection.
///
/// Entries that do not deserialize (no `id` or `title`) are skipped.
#[must_use]
pub fn entries_from_document(document: &Value) -> Option<Vec<ManifestEntry>> {
    let collection = ["entries", "stories"]
        .iter()
        .filter_map(|key| document.get(*key))
        .find(|v| v.is_object() || v.is_array())?;

    let raw: Vec<&Value> = match collection {
        Value::Object(map) => map.values().collect(),
        Value::Array(items) => items.iter().collect(),
        _ => return None,
    };

    let entries = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<ManifestEntry>(value.clone()) {
            Ok(entry) => Some(entry),
            Err(e) => {
                debug!("Skipping malformed manifest entry: {}", e);
                None
            }
        })
        .collect();

    Some(entries)
}

/// Group entries by title in first-seen order
///
/// Stories keep their encounter order inside a group. The docs id is set by
/// entries of type `docs` or tagged `docs`; a later qualifying entry
/// replaces an earlier one.
#[must_use]
pub fn group_entries(entries: &[ManifestEntry]) -> Vec<ComponentGroup> {
    let mut groups: Vec<ComponentGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.title.as_str()).or_insert_with(|| {
            groups.push(ComponentGroup {
                title: entry.title.clone(),
                docs_id: None,
                stories: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];

        if entry.is_story() {
            group.stories.push(StoryRef {
                name: entry.name.clone(),
                id: entry.id.clone(),
            });
        }
        if entry.is_docs() {
            group.docs_id = Some(entry.id.clone());
        }
    }

    groups
}

/// Build the published catalog; groups without stories are dropped
#[must_use]
pub fn build_catalog(base_url: &str, entries: &[ManifestEntry]) -> ComponentCatalog {
    let components = group_entries(entries)
        .into_iter()
        .filter_map(|group| {
            let first_story = group.stories.first()?;
            let url = match &group.docs_id {
                Some(docs_id) => docs_page_url(base_url, docs_id),
                None => story_page_url(base_url, &first_story.id),
            };
            Some(CatalogEntry {
                name: group.title,
                has_docs: group.docs_id.is_some(),
                url,
                available_stories: group.stories.into_iter().map(|s| s.name).collect(),
            })
        })
        .collect();

    ComponentCatalog {
        config_url: base_url.to_string(),
        components,
    }
}
