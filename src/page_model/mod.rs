//! Page-model adapter
//!
//! All knowledge of Storybook's markup lives behind [`PageModel`]: where the
//! preview frame is, which tables hold args, how example sections and their
//! code blocks are delimited, and what the "Show code" toggles look like.
//! Extractors only consume the locators, so a markup change means a new
//! `PageModel` implementation rather than edits across the extraction code.

pub mod js_scripts;
mod storybook;

pub use storybook::StorybookPageModel;

/// Where the live preview renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewLocator {
    /// Selector of the iframe hosting the docs/preview document
    pub frame_selector: &'static str,
}

/// How prop tables are found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLocator {
    /// Selector that signals at least one table row has rendered
    pub ready_selector: &'static str,
    /// Title element candidates, first non-empty wins
    pub title_selectors: Vec<&'static str>,
    /// Table selector tiers; the first tier matching anything is used
    pub table_selectors: Vec<&'static str>,
    /// Body rows within a table
    pub row_selector: &'static str,
    /// Cells within a row
    pub cell_selector: &'static str,
}

/// How example sections are found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorLocator {
    /// Selector that signals the example sections have rendered
    pub ready_selector: &'static str,
    /// One element per example, in document order
    pub anchor_selector: &'static str,
    /// Heading inside an anchor carrying the example's display name
    pub heading_selector: &'static str,
    /// Code element tiers inside an anchor; first match wins
    pub code_selectors: Vec<&'static str>,
}

/// How collapsed source blocks are opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealLocator {
    /// Candidate controls
    pub control_selector: &'static str,
    /// Lower-case label text identifying a reveal control
    pub label: &'static str,
    /// Class marking a reveal control regardless of its label
    pub toggle_class: &'static str,
}

/// Markup adapter for a documentation site
pub trait PageModel: Send + Sync {
    /// Locate the preview context
    fn preview(&self) -> PreviewLocator;

    /// Locate property tables
    fn property_tables(&self) -> TableLocator;

    /// Locate example anchors
    fn example_anchors(&self) -> AnchorLocator;

    /// Locate reveal controls
    fn reveal_controls(&self) -> RevealLocator;
}
