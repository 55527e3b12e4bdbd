//! Closed set of tool operations

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::error::{Result, StorybookError};
use crate::mcp::validation::ErrorContext;
use crate::utils::is_valid_url;

/// Published tool names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    ListComponents,
    AnalyzeProps,
    ExtractStories,
}

impl ToolName {
    pub const ALL: [ToolName; 3] = [
        ToolName::ListComponents,
        ToolName::AnalyzeProps,
        ToolName::ExtractStories,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::ListComponents => "list_storybook_components",
            ToolName::AnalyzeProps => "analyze_storybook_props",
            ToolName::ExtractStories => "extract_component_stories",
        }
    }

    /// Prefix of the failure text returned by this tool
    #[must_use]
    pub fn failure_prefix(self) -> &'static str {
        match self {
            ToolName::ListComponents => "Listing failed",
            ToolName::AnalyzeProps => "Prop analysis failed",
            ToolName::ExtractStories => "Story extraction failed",
        }
    }

    /// Whether the tool needs a `url` argument
    #[must_use]
    pub fn takes_url(self) -> bool {
        !matches!(self, ToolName::ListComponents)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = StorybookError;

    fn from_str(s: &str) -> Result<Self> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| StorybookError::NotFound(s.to_string()))
    }
}

/// One validated tool request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    ListComponents,
    AnalyzeProps { url: String },
    ExtractStories { url: String },
}

impl Operation {
    #[must_use]
    pub fn tool(&self) -> ToolName {
        match self {
            Operation::ListComponents => ToolName::ListComponents,
            Operation::AnalyzeProps { .. } => ToolName::AnalyzeProps,
            Operation::ExtractStories { .. } => ToolName::ExtractStories,
        }
    }

    /// Build an operation from a tool name and its page URL
    pub fn with_url(tool: ToolName, url: &str) -> Result<Self> {
        let url = url.trim();
        if !is_valid_url(url) {
            return Err(StorybookError::InvalidArguments(
                ErrorContext::new(format!("Invalid 'url' argument for {tool}"))
                    .detail(format!("Received: {url:?}"))
                    .suggest("Pass an absolute http(s) URL of a Storybook docs page")
                    .suggest("Use list_storybook_components to find component URLs")
                    .build(),
            ));
        }

        let url = url.to_string();
        Ok(match tool {
            ToolName::ListComponents => Operation::ListComponents,
            ToolName::AnalyzeProps => Operation::AnalyzeProps { url },
            ToolName::ExtractStories => Operation::ExtractStories { url },
        })
    }

    /// Parse an untyped call
    ///
    /// Unknown names fail with [`StorybookError::NotFound`]; a missing or
    /// non-string `url` fails with [`StorybookError::InvalidArguments`].
    pub fn from_call(name: &str, arguments: Option<&Map<String, Value>>) -> Result<Self> {
        let tool = name.parse::<ToolName>()?;
        Self::from_url_argument(tool, arguments.and_then(|args| args.get("url")))
    }

    /// Build an operation from the raw `url` argument of a known tool
    ///
    /// Tools without a URL ignore the argument.
    pub fn from_url_argument(tool: ToolName, url: Option<&Value>) -> Result<Self> {
        if !tool.takes_url() {
            return Ok(Operation::ListComponents);
        }

        match url {
            Some(Value::String(url)) => Self::with_url(tool, url),
            Some(other) => Err(StorybookError::InvalidArguments(
                ErrorContext::new(format!("Invalid 'url' argument for {tool}"))
                    .detail(format!("Expected a string, received: {other}"))
                    .suggest("Pass the URL as a JSON string")
                    .build(),
            )),
            None => Err(StorybookError::InvalidArguments(
                ErrorContext::new(format!("Missing required argument 'url' for {tool}"))
                    .suggest("Call with {\"url\": \"<storybook docs page URL>\"}")
                    .suggest("Use list_storybook_components to find component URLs")
                    .build(),
            )),
        }
    }
}
