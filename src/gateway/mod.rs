//! Tool Gateway
//!
//! Routes the three operations to their extractors and turns every outcome
//! into one text payload. Property and story calls open a browser session of
//! their own and release it before the outcome leaves this module, whatever
//! the extractor returned.

mod operation;

pub use operation::{Operation, ToolName};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{error, info, warn};

use crate::browser::{NavigationWait, PageSession, SessionProvider};
use crate::config::ServerConfig;
use crate::error::{Result, StorybookError};
use crate::manifest::ManifestReader;
use crate::mcp::validation::ErrorContext;
use crate::page_model::{PageModel, StorybookPageModel};
use crate::props::extract_props;
use crate::stories::extract_stories;

/// Text payload of a finished tool call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutcome {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutcome {
    fn success(value: &Value) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self {
                text,
                is_error: false,
            },
            Err(e) => Self {
                text: format!("Failed to serialize result: {e}"),
                is_error: true,
            },
        }
    }

    fn failure(tool: ToolName, error: &StorybookError) -> Self {
        Self {
            text: format!("{}: {}", tool.failure_prefix(), error),
            is_error: true,
        }
    }

    fn unknown_tool(error: &StorybookError) -> Self {
        let available = ToolName::ALL.map(ToolName::as_str).join(", ");
        Self {
            text: ErrorContext::new(error.to_string())
                .detail(format!("Available tools: {available}"))
                .build(),
            is_error: true,
        }
    }
}

/// Dispatches operations against one Storybook site
pub struct Gateway<P, M = StorybookPageModel> {
    config: ServerConfig,
    manifest: ManifestReader,
    provider: P,
    model: M,
}

impl<P: SessionProvider> Gateway<P> {
    /// Create a gateway with the stock Storybook page model
    pub fn new(config: ServerConfig, provider: P) -> Result<Self> {
        Self::with_model(config, provider, StorybookPageModel)
    }
}

impl<P, M> Gateway<P, M>
where
    P: SessionProvider,
    M: PageModel,
{
    pub fn with_model(config: ServerConfig, provider: P, model: M) -> Result<Self> {
        Ok(Self {
            config,
            manifest: ManifestReader::new()?,
            provider,
            model,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Run an operation and return its JSON payload
    pub async fn dispatch(&self, operation: &Operation) -> Result<Value> {
        match operation {
            Operation::ListComponents => {
                let catalog = self
                    .manifest
                    .fetch_catalog(self.config.storybook_url())
                    .await?;
                to_value(&catalog)
            }
            Operation::AnalyzeProps { url } => {
                let session = self.provider.open(url, NavigationWait::Load).await?;
                let report = extract_props(
                    &session,
                    &self.model,
                    self.config.timeouts(),
                    self.config.prop_filter(),
                )
                .await;
                session.close().await;
                to_value(&report?)
            }
            Operation::ExtractStories { url } => {
                let session = self
                    .provider
                    .open(url, NavigationWait::DocumentComplete)
                    .await?;
                let report = extract_stories(&session, &self.model, self.config.timeouts()).await;
                session.close().await;
                to_value(&report?)
            }
        }
    }

    /// Run a typed operation and convert the result to a payload
    pub async fn execute(&self, operation: &Operation) -> ToolOutcome {
        let tool = operation.tool();
        info!("Executing {}", tool);

        match self.dispatch(operation).await {
            Ok(value) => ToolOutcome::success(&value),
            Err(e) => {
                if e.is_caller_error() {
                    warn!("{} rejected: {}", tool, e);
                } else {
                    error!("{} failed: {}", tool, e);
                }
                ToolOutcome::failure(tool, &e)
            }
        }
    }

    /// Run a known tool with its raw `url` argument
    pub async fn execute_url(&self, tool: ToolName, url: Option<&Value>) -> ToolOutcome {
        match Operation::from_url_argument(tool, url) {
            Ok(operation) => self.execute(&operation).await,
            Err(e) => {
                warn!("{} rejected: {}", tool, e);
                ToolOutcome::failure(tool, &e)
            }
        }
    }

    /// Run an untyped call by tool name
    pub async fn call(&self, name: &str, arguments: Option<&Map<String, Value>>) -> ToolOutcome {
        match Operation::from_call(name, arguments) {
            Ok(operation) => self.execute(&operation).await,
            Err(e @ StorybookError::NotFound(_)) => {
                warn!("Rejected call to unknown tool '{}'", name);
                ToolOutcome::unknown_tool(&e)
            }
            Err(e) => match name.parse::<ToolName>() {
                Ok(tool) => ToolOutcome::failure(tool, &e),
                Err(_) => ToolOutcome::unknown_tool(&e),
            },
        }
    }
}

fn to_value<T: Serialize>(payload: &T) -> Result<Value> {
    serde_json::to_value(payload)
        .map_err(|e| StorybookError::Other(format!("Failed to serialize result: {e}")))
}
