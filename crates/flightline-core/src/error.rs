// Error types for flightline-core

use std::time::Duration;

use thiserror::Error;

/// Result type alias for flightline-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the application under test
#[derive(Debug, Error)]
pub enum Error {
    /// Requested browser kind is not recognized
    ///
    /// Carries the offending string. Fatal to the test that asked for it;
    /// no session is spawned and the error is never retried.
    #[error("Browser '{0}' is not supported. Supported browsers: chrome, firefox, edge")]
    UnsupportedBrowser(String),

    /// A wait predicate never became true within its budget
    ///
    /// Contains the condition that was being waited for, the locator it was
    /// checking, and the elapsed wall-clock time, to aid debugging flaky
    /// tests. Retrying is a scenario-layer policy, not engine policy.
    #[error("Timed out after {elapsed:?} waiting for {locator} to be {condition}")]
    Timeout {
        condition: String,
        locator: String,
        elapsed: Duration,
    },

    /// Element could not be located
    ///
    /// Treated as "not ready yet" by the wait engine and retried; surfaced
    /// as a final failure only once the overall timeout elapses.
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Element exists but cannot receive the requested interaction
    ///
    /// Transient for the wait engine, same as [`Error::ElementNotFound`].
    #[error("Element not interactable: {0}")]
    NotInteractable(String),

    /// Malformed input to an adapter or helper call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The browser session is dead or disconnected
    ///
    /// Always fatal: the wait engine propagates this immediately instead of
    /// polling a session that can no longer answer.
    #[error("Session closed: {0}")]
    SessionClosed(String),

    /// Error from the underlying WebDriver client
    #[error("WebDriver error: {0}")]
    WebDriver(#[from] thirtyfour::error::WebDriverError),
}

impl Error {
    /// Whether the wait engine should treat this error as "not ready yet".
    ///
    /// Transient errors are retried until the overall timeout elapses;
    /// everything else aborts the wait immediately.
    pub fn is_transient(&self) -> bool {
        use thirtyfour::error::WebDriverErrorInner;

        match self {
            Error::ElementNotFound(_) | Error::NotInteractable(_) => true,
            Error::WebDriver(e) => matches!(
                e.as_inner(),
                WebDriverErrorInner::NoSuchElement(_)
                    | WebDriverErrorInner::StaleElementReference(_)
                    | WebDriverErrorInner::ElementNotInteractable(_)
                    | WebDriverErrorInner::ElementClickIntercepted(_)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(Error::ElementNotFound("#missing".into()).is_transient());
        assert!(Error::NotInteractable("#covered".into()).is_transient());
        assert!(!Error::UnsupportedBrowser("opera".into()).is_transient());
        assert!(!Error::SessionClosed("gone".into()).is_transient());
        assert!(
            !Error::Timeout {
                condition: "visible".into(),
                locator: "#x".into(),
                elapsed: Duration::from_secs(10),
            }
            .is_transient()
        );
    }

    #[test]
    fn timeout_message_names_condition_and_locator() {
        let err = Error::Timeout {
            condition: "clickable".into(),
            locator: "css selector '.btn'".into(),
            elapsed: Duration::from_secs(10),
        };
        let msg = err.to_string();
        assert!(msg.contains("clickable"));
        assert!(msg.contains(".btn"));
    }
}
