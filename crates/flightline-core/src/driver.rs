// Driver factory - creates WebDriver sessions for the supported browsers
//
// Matching on the browser kind is case-insensitive; an unsupported kind
// fails fast with `UnsupportedBrowser` before any session is spawned.
// Successful creation returns a ready-to-navigate session with no
// implicit navigation performed; the caller owns its shutdown.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thirtyfour::prelude::*;
use thirtyfour::TimeoutConfiguration;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::DriverSession;

/// A supported browser engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Firefox,
    Edge,
}

impl BrowserKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Edge => "edge",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "firefox" => Ok(BrowserKind::Firefox),
            "edge" => Ok(BrowserKind::Edge),
            _ => Err(Error::UnsupportedBrowser(s.to_string())),
        }
    }
}

/// Opens a new session for the requested browser against the configured
/// WebDriver endpoint.
pub async fn launch(kind: BrowserKind, config: &Config) -> Result<DriverSession> {
    tracing::debug!(browser = %kind, endpoint = %config.webdriver_url, "launching browser session");

    let driver = match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if config.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&config.webdriver_url, caps).await?
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if config.headless {
                caps.set_headless()?;
            }
            WebDriver::new(&config.webdriver_url, caps).await?
        }
        BrowserKind::Edge => {
            // msedgedriver takes its headless flag through driver-specific
            // options; Edge sessions run headed.
            let caps = DesiredCapabilities::edge();
            WebDriver::new(&config.webdriver_url, caps).await?
        }
    };

    // Zero out the implicit wait so the explicit-wait engine is the only
    // synchronization mechanism in play.
    let timeouts = TimeoutConfiguration::new(None, None, Some(Duration::ZERO));
    driver.update_timeouts(timeouts).await?;

    tracing::info!(browser = %kind, "browser session ready");
    Ok(DriverSession::new(driver))
}

/// String-kind front door used by scenario setup.
///
/// Parses `kind` case-insensitively and launches, so a bad configuration
/// value fails before any browser process is spawned.
pub async fn launch_named(kind: &str, config: &Config) -> Result<DriverSession> {
    launch(kind.parse()?, config).await
}
