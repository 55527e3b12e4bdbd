//! Storybook 7/8 docs markup

use super::{AnchorLocator, PageModel, PreviewLocator, RevealLocator, TableLocator};

/// Selectors for the Storybook manager + docs renderer
#[derive(Debug, Clone, Copy, Default)]
pub struct StorybookPageModel;

impl PageModel for StorybookPageModel {
    fn preview(&self) -> PreviewLocator {
        PreviewLocator {
            frame_selector: "#storybook-preview-iframe",
        }
    }

    fn property_tables(&self) -> TableLocator {
        TableLocator {
            ready_selector: ".docblock-argstable tbody tr",
            title_selectors: vec![".sbdocs-title", "h1"],
            table_selectors: vec![".docblock-argstable", ".sb-argstableBlock table", "table"],
            row_selector: "tbody tr",
            cell_selector: "td",
        }
    }

    fn example_anchors(&self) -> AnchorLocator {
        AnchorLocator {
            ready_selector: ".sb-anchor, .sbdocs-preview",
            anchor_selector: ".sb-anchor",
            heading_selector: "h3, h2",
            code_selectors: vec![".docblock-source", "pre", "code"],
        }
    }

    fn reveal_controls(&self) -> RevealLocator {
        RevealLocator {
            control_selector: "button",
            label: "show code",
            toggle_class: "docblock-code-toggle",
        }
    }
}
