//! flightline-core: driver, wait, and session utilities for the
//! Flightline UI test suite.
//!
//! This crate holds everything below the page-object layer: the
//! [`Session`]/[`Element`] capability traits, the WebDriver-backed
//! session, the driver factory, configuration resolution, the
//! explicit-wait engine, element-action helpers, and the auto-retry
//! [`expect`] assertion API.
//!
//! # Examples
//!
//! ## Launching a session and interacting with a page
//!
//! ```ignore
//! use flightline_core::{actions, driver, Config, Locator, WaitSpec};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let session = driver::launch_named(&config.browser, &config).await?;
//!
//!     session.navigate(&config.app_url).await?;
//!
//!     const LOGIN_LINK: Locator = Locator::link_text("Login");
//!     actions::click_when_ready(&session, &LOGIN_LINK, WaitSpec::default()).await?;
//!
//!     session.quit().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Waiting on an arbitrary condition
//!
//! ```ignore
//! use flightline_core::wait::{wait_until, Poll, WaitSpec};
//!
//! let title = wait_until("booking title", "page", WaitSpec::default(), || async {
//!     let title = session.page_title().await?;
//!     if title.is_empty() {
//!         Ok(Poll::NotReady)
//!     } else {
//!         Ok(Poll::Ready(title))
//!     }
//! })
//! .await?;
//! ```

pub mod actions;
pub mod config;
pub mod driver;
pub mod error;
pub mod expect;
pub mod fake;
pub mod locator;
pub mod session;
pub mod wait;

// Re-export error types
pub use error::{Error, Result};

// Re-export the configuration surface
pub use config::Config;

// Re-export the session capability traits and the live implementation
pub use session::{DriverSession, Element, Session};

// Re-export locators and the wait engine's public types
pub use locator::{Locator, Strategy};
pub use wait::{Poll, ReadyWhen, WaitSpec};

// Re-export the driver factory entry points
pub use driver::{BrowserKind, launch, launch_named};

// Re-export the auto-retry assertion API
pub use expect::expect;
