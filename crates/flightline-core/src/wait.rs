// Explicit-wait engine
//
// Bounded polling with a success predicate and a timeout-driven failure.
// Every interaction helper in the suite is built on `wait_until`; fixed
// sleeps are not used anywhere.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::{Element, Session};

/// Default wait budget for element readiness.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default interval between predicate evaluations.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Outcome of one predicate evaluation.
///
/// Retry-vs-propagate is explicit: `NotReady` (and transient errors, see
/// [`Error::is_transient`]) means "poll again"; any other error aborts the
/// wait immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll<T> {
    /// The condition holds; carries the evaluated value.
    Ready(T),
    /// The condition does not hold yet.
    NotReady,
}

/// Timeout and poll interval for one wait.
///
/// Constructed per call, not persisted. A zero timeout means "check
/// exactly once, no retry".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitSpec {
    pub timeout: Duration,
    pub poll_interval: Duration,
}

impl WaitSpec {
    pub const fn new(timeout: Duration, poll_interval: Duration) -> Self {
        Self {
            timeout,
            poll_interval,
        }
    }

    /// Spec that evaluates the predicate exactly once.
    pub const fn once() -> Self {
        Self::new(Duration::ZERO, DEFAULT_POLL_INTERVAL)
    }

    /// Default spec with a shorter timeout.
    pub const fn with_timeout(timeout: Duration) -> Self {
        Self::new(timeout, DEFAULT_POLL_INTERVAL)
    }
}

impl Default for WaitSpec {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT, DEFAULT_POLL_INTERVAL)
    }
}

/// Repeatedly evaluates `condition` until it is ready or `spec.timeout`
/// elapses.
///
/// The first evaluation happens immediately and a ready result returns
/// with no extra poll delay. Transient errors (element not found, not
/// interactable, stale reference) are treated as a negative result and
/// retried; all other errors propagate immediately, so a dead session
/// aborts the wait instead of being polled forever.
///
/// On timeout the error names `condition` and `target` plus the elapsed
/// time. The overshoot past `spec.timeout` is bounded by one poll
/// interval.
pub async fn wait_until<T, F, Fut>(
    condition: &str,
    target: &str,
    spec: WaitSpec,
    mut evaluate: F,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Poll<T>>>,
{
    let start = Instant::now();
    loop {
        match evaluate().await {
            Ok(Poll::Ready(value)) => return Ok(value),
            Ok(Poll::NotReady) => {}
            Err(e) if e.is_transient() => {
                tracing::trace!(condition, target, error = %e, "transient error, retrying");
            }
            Err(e) => return Err(e),
        }

        let elapsed = start.elapsed();
        if elapsed >= spec.timeout {
            tracing::debug!(condition, target, ?elapsed, "wait timed out");
            return Err(Error::Timeout {
                condition: condition.to_string(),
                locator: target.to_string(),
                elapsed,
            });
        }

        tokio::time::sleep(spec.poll_interval).await;
    }
}

/// Readiness level of an element, each level implying the ones before it:
/// clickable ⇒ visible ⇒ present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadyWhen {
    /// Attached to the document.
    Present,
    /// Present and displayed.
    Visible,
    /// Visible and enabled.
    Clickable,
}

impl ReadyWhen {
    pub fn describe(self) -> &'static str {
        match self {
            ReadyWhen::Present => "present",
            ReadyWhen::Visible => "visible",
            ReadyWhen::Clickable => "clickable",
        }
    }
}

/// Evaluates element readiness once.
///
/// The readiness ladder is one composed check, not three independent
/// implementations: higher levels run the lower levels' checks first.
/// Returns the first matching element, or `NotReady` if none qualifies.
pub async fn element_ready(
    session: &dyn Session,
    locator: &Locator,
    ready: ReadyWhen,
) -> Result<Poll<Box<dyn Element>>> {
    let candidates = session.find(locator).await?;
    for element in candidates {
        if ready >= ReadyWhen::Visible && !element.is_displayed().await? {
            continue;
        }
        if ready >= ReadyWhen::Clickable && !element.is_enabled().await? {
            continue;
        }
        return Ok(Poll::Ready(element));
    }
    Ok(Poll::NotReady)
}

/// Waits until an element matching `locator` reaches the requested
/// readiness level, returning it.
pub async fn wait_for_element(
    session: &dyn Session,
    locator: &Locator,
    ready: ReadyWhen,
    spec: WaitSpec,
) -> Result<Box<dyn Element>> {
    wait_until(ready.describe(), &locator.to_string(), spec, || {
        element_ready(session, locator, ready)
    })
    .await
}
