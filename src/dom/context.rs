//! Evaluation context resolved for a page

/// Document that extraction scripts run against
///
/// Storybook renders docs inside a same-origin preview iframe. When the
/// iframe cannot be found the top-level document is used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomContext {
    /// `contentDocument` of the iframe matched by `frame_selector`
    PreviewFrame { frame_selector: String },
    /// The page's own `document`
    TopLevel,
}

impl DomContext {
    /// JavaScript expression evaluating to the context's document (or null)
    #[must_use]
    pub fn root_expression(&self) -> String {
        match self {
            DomContext::PreviewFrame { frame_selector } => format!(
                "(() => {{ const frame = document.querySelector({}); return frame ? frame.contentDocument : null; }})()",
                js_string(frame_selector)
            ),
            DomContext::TopLevel => "document".to_string(),
        }
    }

    /// Whether the resolver had to fall back to the top-level document
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        matches!(self, DomContext::TopLevel)
    }

    /// Wrap a script body so `root` is bound to this context's document
    ///
    /// If the document is gone (frame detached mid-call) the script throws,
    /// which surfaces as an evaluation failure.
    #[must_use]
    pub fn wrap(&self, body: &str) -> String {
        format!(
            "(() => {{\n  const root = {};\n  if (!root) {{ throw new Error('evaluation context is no longer available'); }}\n{}\n}})()",
            self.root_expression(),
            body
        )
    }

    /// Like [`wrap`](Self::wrap) but evaluates to `false` when the document is gone
    #[must_use]
    pub fn wrap_check(&self, body: &str) -> String {
        format!(
            "(() => {{\n  const root = {};\n  if (!root) {{ return false; }}\n{}\n}})()",
            self.root_expression(),
            body
        )
    }
}

/// Encode a Rust string as a JavaScript string literal
#[must_use]
pub fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
