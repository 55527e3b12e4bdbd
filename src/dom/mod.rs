//! DOM evaluation seam
//!
//! Extraction logic never talks to chromiumoxide directly. It builds
//! [`Script`]s, hands them to a [`DomHost`] and deserializes the JSON that
//! comes back. `chromiumoxide::Page` is the production host; tests drive the
//! same extractors with an in-memory host.

mod context;
mod host;
pub mod wait;

pub use context::{DomContext, js_string};
pub use host::{DomHost, Script, ScriptKind, evaluate_as};
pub use wait::{SettleOutcome, wait_for_selector, wait_for_stable_snapshot, wait_until};
