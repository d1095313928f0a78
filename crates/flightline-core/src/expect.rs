// Auto-retry assertions for scenario tests
//
// Provides an expect() API that re-checks a condition until it passes or
// the wait budget runs out, built on the same engine as the action
// helpers.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::{self, Poll, ReadyWhen, WaitSpec};

/// Creates an expectation for an element with auto-retry behavior.
///
/// Assertions retry until they pass or time out (default: 5 seconds).
///
/// # Example
///
/// ```ignore
/// use flightline_core::{expect, locator::Locator};
///
/// const GREETING: Locator = Locator::css("navbar span a");
/// expect(session, &GREETING).to_be_visible().await?;
/// expect(session, &GREETING).to_contain_text("Hi").await?;
/// expect(session, &PRICE).to_match_text(r"^\$\d+$").await?;
/// ```
pub fn expect<'a>(session: &'a dyn Session, locator: &'a Locator) -> Expectation<'a> {
    Expectation::new(session, locator)
}

/// Default timeout for assertions.
const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Default polling interval for assertions.
const DEFAULT_ASSERTION_POLL: Duration = Duration::from_millis(100);

/// Expectation wraps a locator and provides assertion methods with
/// auto-retry.
///
/// Negated expectations still require the element to exist: `not()` flips
/// the condition under test, not the presence check, so a missing element
/// times out either way.
pub struct Expectation<'a> {
    session: &'a dyn Session,
    locator: &'a Locator,
    spec: WaitSpec,
    negate: bool,
}

// The to_* methods consume self; assertions are chained and consumed.
#[allow(clippy::wrong_self_convention)]
impl<'a> Expectation<'a> {
    fn new(session: &'a dyn Session, locator: &'a Locator) -> Self {
        Self {
            session,
            locator,
            spec: WaitSpec::new(DEFAULT_ASSERTION_TIMEOUT, DEFAULT_ASSERTION_POLL),
            negate: false,
        }
    }

    /// Sets a custom timeout for this assertion.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.spec.timeout = timeout;
        self
    }

    /// Sets a custom poll interval for this assertion.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.spec.poll_interval = interval;
        self
    }

    /// Negates the assertion.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = !self.negate;
        self
    }

    fn describe(&self, condition: &str) -> String {
        if self.negate {
            format!("NOT {condition}")
        } else {
            condition.to_string()
        }
    }

    async fn check_readiness(self, ready: ReadyWhen) -> Result<()> {
        let condition = self.describe(ready.describe());
        wait::wait_until(&condition, &self.locator.to_string(), self.spec, || async {
            let holds = matches!(
                wait::element_ready(self.session, self.locator, ready).await?,
                Poll::Ready(_)
            );
            if holds != self.negate {
                Ok(Poll::Ready(()))
            } else {
                Ok(Poll::NotReady)
            }
        })
        .await
    }

    /// Asserts that the element is attached to the document.
    pub async fn to_be_present(self) -> Result<()> {
        self.check_readiness(ReadyWhen::Present).await
    }

    /// Asserts that the element is visible.
    pub async fn to_be_visible(self) -> Result<()> {
        self.check_readiness(ReadyWhen::Visible).await
    }

    /// Asserts that a checkbox, radio button, or option is selected.
    pub async fn to_be_selected(self) -> Result<()> {
        let condition = self.describe("selected");
        wait::wait_until(&condition, &self.locator.to_string(), self.spec, || async {
            let selected = match wait::element_ready(self.session, self.locator, ReadyWhen::Present)
                .await?
            {
                Poll::Ready(element) => element.is_selected().await?,
                Poll::NotReady => return Ok(Poll::NotReady),
            };
            if selected != self.negate {
                Ok(Poll::Ready(()))
            } else {
                Ok(Poll::NotReady)
            }
        })
        .await
    }

    /// Asserts that the element's trimmed text equals `expected`.
    pub async fn to_have_text(self, expected: &str) -> Result<()> {
        let expected = expected.trim().to_string();
        let condition = self.describe(&format!("text '{expected}'"));
        self.check_text(condition, move |actual| actual == expected)
            .await
    }

    /// Asserts that the element's text contains `expected`.
    pub async fn to_contain_text(self, expected: &str) -> Result<()> {
        let expected = expected.to_string();
        let condition = self.describe(&format!("text containing '{expected}'"));
        self.check_text(condition, move |actual| actual.contains(&expected))
            .await
    }

    /// Asserts that the element's text matches the regex `pattern`.
    pub async fn to_match_text(self, pattern: &str) -> Result<()> {
        let re = regex::Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("invalid regex '{pattern}': {e}")))?;
        let condition = self.describe(&format!("text matching '{pattern}'"));
        self.check_text(condition, move |actual| re.is_match(actual))
            .await
    }

    async fn check_text<F>(self, condition: String, matches: F) -> Result<()>
    where
        F: Fn(&str) -> bool,
    {
        wait::wait_until(&condition, &self.locator.to_string(), self.spec, || async {
            let element =
                match wait::element_ready(self.session, self.locator, ReadyWhen::Visible).await? {
                    Poll::Ready(element) => element,
                    Poll::NotReady => return Ok(Poll::NotReady),
                };
            let text = element.text().await?;
            if matches(text.trim()) != self.negate {
                Ok(Poll::Ready(()))
            } else {
                Ok(Poll::NotReady)
            }
        })
        .await
    }
}
