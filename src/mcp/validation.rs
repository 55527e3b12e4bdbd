//! Error context builder for tool failure messages
//!
//! Argument and lookup failures are reported with:
//! - Operation that failed
//! - Details about what was received
//! - Suggestions for fixing the call

/// Builder for structured error messages with context and suggestions
#[derive(Debug, Clone)]
pub struct ErrorContext {
    operation: String,
    details: Vec<String>,
    suggestions: Vec<String>,
}

impl ErrorContext {
    /// Create new error context for an operation
    ///
    /// # Example
    /// ```
    /// use kodegen_tools_storybook::ErrorContext;
    ///
    /// let ctx = ErrorContext::new("analyze_storybook_props");
    /// ```
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            details: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    /// Add detail about what was received or why it was rejected
    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }

    /// Add actionable suggestion for resolution
    pub fn suggest(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Build formatted error message
    ///
    /// Format:
    /// ```text
    /// {operation}
    ///
    /// Details:
    ///   - {detail1}
    ///
    /// Suggestions:
    ///   - {suggestion1}
    /// ```
    #[must_use]
    pub fn build(self) -> String {
        let mut msg = self.operation;

        if !self.details.is_empty() {
            msg.push_str("\n\nDetails:");
            for detail in &self.details {
                msg.push_str(&format!("\n  - {detail}"));
            }
        }

        if !self.suggestions.is_empty() {
            msg.push_str("\n\nSuggestions:");
            for suggestion in &self.suggestions {
                msg.push_str(&format!("\n  - {suggestion}"));
            }
        }

        msg
    }
}
