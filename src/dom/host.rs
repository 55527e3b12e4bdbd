//! Script evaluation hosts

use std::future::Future;

use chromiumoxide::page::Page;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::trace;

use crate::error::{Result, StorybookError};

/// What a script does, for logging and for hosts that answer by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScriptKind {
    /// Is the preview iframe present with a reachable document
    FrameCheck,
    /// Does a selector match anything in the context
    SelectorCheck,
    /// Has the top-level document finished loading
    ReadyState,
    /// Read title and prop table rows
    PropTables,
    /// Click reveal controls
    RevealControls,
    /// Read example anchors with their code
    ExampleAnchors,
}

/// A JavaScript expression to evaluate in a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    kind: ScriptKind,
    source: String,
}

impl Script {
    #[must_use]
    pub fn new(kind: ScriptKind, source: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

/// Something that can evaluate scripts against a rendered page
pub trait DomHost: Send + Sync {
    /// Evaluate a script and return its JSON result
    fn evaluate(&self, script: &Script) -> impl Future<Output = Result<Value>> + Send;
}

impl DomHost for Page {
    async fn evaluate(&self, script: &Script) -> Result<Value> {
        trace!("Evaluating {:?} script", script.kind());
        let result = Page::evaluate(self, script.source()).await?;
        result.into_value::<Value>().map_err(|e| {
            StorybookError::Evaluation(format!(
                "{:?} script returned no usable value: {e}",
                script.kind()
            ))
        })
    }
}

/// Evaluate a script and deserialize its result
pub async fn evaluate_as<H, T>(host: &H, script: &Script) -> Result<T>
where
    H: DomHost,
    T: DeserializeOwned,
{
    let value = host.evaluate(script).await?;
    serde_json::from_value(value).map_err(|e| {
        StorybookError::Evaluation(format!(
            "{:?} script returned an unexpected shape: {e}",
            script.kind()
        ))
    })
}
