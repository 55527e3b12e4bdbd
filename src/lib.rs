pub mod browser;
pub mod browser_setup;
pub mod config;
pub mod dom;
pub mod error;
pub mod gateway;
pub mod manifest;
pub mod mcp;
pub mod page_context;
pub mod page_model;
pub mod props;
pub mod stories;
pub mod utils;

pub use browser::{ChromeSession, ChromeSessionProvider, NavigationWait, PageSession, SessionProvider};
pub use browser_setup::{download_managed_browser, find_browser_executable, launch_browser};
pub use config::{ScrapeTimeouts, ServerConfig};
pub use dom::{DomContext, DomHost, Script, ScriptKind};
pub use error::{Result, StorybookError};
pub use gateway::{Gateway, Operation, ToolName, ToolOutcome};
pub use manifest::{CatalogEntry, ComponentCatalog, ManifestEntry, ManifestReader};
pub use mcp::{ChromeGateway, ErrorContext, StorybookServer};
pub use page_context::resolve_context;
pub use page_model::{PageModel, StorybookPageModel};
pub use props::{PropFilter, PropRow, PropsReport, extract_props};
pub use stories::{StoriesReport, StoryEntry, extract_stories};
