//! Bounded polling waits
//!
//! Every wait polls the DOM on an interval until a condition holds or its
//! bound elapses. What a timeout means (fallback, failure, proceed) is up to
//! the caller, so the helpers only report whether the condition was met.

use std::time::Duration;

use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, trace};

use super::context::{DomContext, js_string};
use super::host::{DomHost, Script, ScriptKind};

/// Poll a boolean script until it returns `true` or `timeout` elapses
///
/// Evaluation errors count as "not yet": pages that are still booting throw
/// from half-initialized frames. The condition is checked at least once.
pub async fn wait_until<H: DomHost>(
    host: &H,
    script: &Script,
    timeout: Duration,
    poll_interval: Duration,
) -> bool {
    let start = Instant::now();

    loop {
        match host.evaluate(script).await {
            Ok(Value::Bool(true)) => {
                debug!(
                    "{:?} satisfied after {:.2}s",
                    script.kind(),
                    start.elapsed().as_secs_f64()
                );
                return true;
            }
            Ok(_) => {}
            Err(e) => trace!("{:?} check failed, retrying: {}", script.kind(), e),
        }

        if start.elapsed() >= timeout {
            debug!("{:?} not satisfied within {:?}", script.kind(), timeout);
            return false;
        }

        tokio::time::sleep(poll_interval).await;
    }
}

/// Check script: does `selector` match anything in the context
#[must_use]
pub fn selector_check(context: &DomContext, selector: &str) -> Script {
    Script::new(
        ScriptKind::SelectorCheck,
        context.wrap_check(&format!(
            "  return root.querySelector({}) !== null;",
            js_string(selector)
        )),
    )
}

/// Wait for `selector` to match within the context
pub async fn wait_for_selector<H: DomHost>(
    host: &H,
    context: &DomContext,
    selector: &str,
    timeout: Duration,
    poll_interval: Duration,
) -> bool {
    wait_until(host, &selector_check(context, selector), timeout, poll_interval).await
}

/// Result of waiting for a snapshot to stop changing
#[derive(Debug, Clone, PartialEq)]
pub enum SettleOutcome {
    /// Two consecutive snapshots were identical
    Stable(Value),
    /// The bound elapsed; carries the most recent snapshot
    TimedOut(Value),
}

impl SettleOutcome {
    #[must_use]
    pub fn into_snapshot(self) -> Value {
        match self {
            SettleOutcome::Stable(v) | SettleOutcome::TimedOut(v) => v,
        }
    }

    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, SettleOutcome::Stable(_))
    }
}

/// Re-evaluate `script` until two consecutive results are equal
///
/// Used after revealing collapsed code blocks: the snapshot is the data that
/// will be extracted, so the stable value is returned directly. A failed
/// evaluation resets the comparison but not the latest good snapshot, which
/// is what a timeout returns. Only if no evaluation ever succeeds is the
/// last error returned.
pub async fn wait_for_stable_snapshot<H: DomHost>(
    host: &H,
    script: &Script,
    timeout: Duration,
    poll_interval: Duration,
) -> crate::error::Result<SettleOutcome> {
    let start = Instant::now();
    let mut previous: Option<Value> = None;
    let mut latest: Option<Value> = None;
    let mut last_error = None;

    loop {
        match host.evaluate(script).await {
            Ok(snapshot) => {
                if previous.as_ref() == Some(&snapshot) {
                    debug!(
                        "{:?} stable after {:.2}s",
                        script.kind(),
                        start.elapsed().as_secs_f64()
                    );
                    return Ok(SettleOutcome::Stable(snapshot));
                }
                previous = Some(snapshot.clone());
                latest = Some(snapshot);
            }
            Err(e) => {
                trace!("{:?} snapshot failed: {}", script.kind(), e);
                previous = None;
                last_error = Some(e);
            }
        }

        if start.elapsed() >= timeout {
            return match (latest, last_error) {
                (Some(snapshot), _) => {
                    debug!("{:?} still changing after {:?}, using latest", script.kind(), timeout);
                    Ok(SettleOutcome::TimedOut(snapshot))
                }
                (None, Some(e)) => Err(e),
                (None, None) => Ok(SettleOutcome::TimedOut(Value::Null)),
            };
        }

        tokio::time::sleep(poll_interval).await;
    }
}
