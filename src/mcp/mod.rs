//! MCP surface
//!
//! The three Storybook tools as an `rmcp` server handler. Served over
//! streamable HTTP (one handler per session, see `main.rs`) or stdio.

mod server;
pub mod types;
pub mod validation;

pub use server::{ChromeGateway, StorybookServer};
pub use types::UrlArgs;
pub use validation::ErrorContext;
