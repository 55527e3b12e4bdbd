//! Data structures for the Storybook manifest and the derived catalog

use serde::{Deserialize, Serialize};

/// Kind of a manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Story,
    Docs,
    #[serde(other)]
    Other,
}

/// One row of the site's raw index
///
/// `stories.json` (Storybook 6) entries carry no `type`; they only ever list
/// stories, so a missing type reads as a story.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<EntryKind>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ManifestEntry {
    /// Whether the entry is a story
    ///
    /// Deliberately broader than `type == "story"`: an entry without `type`
    /// also counts, otherwise a legacy `stories.json` would yield an empty
    /// catalog. Entries of `index.json` always carry a type, so for them the
    /// two readings agree.
    #[must_use]
    pub fn is_story(&self) -> bool {
        matches!(self.kind, None | Some(EntryKind::Story))
    }

    #[must_use]
    pub fn is_docs(&self) -> bool {
        self.kind == Some(EntryKind::Docs) || self.tags.iter().any(|t| t == "docs")
    }
}

/// Reference to one story of a component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoryRef {
    pub name: String,
    pub id: String,
}

/// Entries folded by title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentGroup {
    pub title: String,
    pub docs_id: Option<String>,
    pub stories: Vec<StoryRef>,
}

/// One component as published by `list_storybook_components`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub has_docs: bool,
    pub url: String,
    pub available_stories: Vec<String>,
}

/// Payload of `list_storybook_components`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentCatalog {
    pub config_url: String,
    pub components: Vec<CatalogEntry>,
}
