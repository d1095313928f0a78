// Session and Element capability traits, plus the WebDriver-backed
// implementation.
//
// Page adapters depend only on these traits, so any concrete
// browser-session implementation substitutes (including the in-memory
// fake used by tests). A Session is accessed by at most one adapter
// chain at a time; adapters never quit a Session they do not own.

use async_trait::async_trait;
use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;

use crate::error::Result;
use crate::locator::Locator;

/// A located UI element the suite can interact with.
#[async_trait]
pub trait Element: Send + Sync {
    async fn click(&self) -> Result<()>;

    /// Clears any existing content from an input element.
    async fn clear(&self) -> Result<()>;

    /// Sends keystrokes to the element without clearing it first.
    async fn send_keys(&self, text: &str) -> Result<()>;

    /// Visible text content, trimmed by the browser's rendering rules.
    async fn text(&self) -> Result<String>;

    /// Current `value` attribute of an input element, if any.
    async fn value(&self) -> Result<Option<String>>;

    async fn is_displayed(&self) -> Result<bool>;
    async fn is_enabled(&self) -> Result<bool>;
    async fn is_selected(&self) -> Result<bool>;

    /// Selects the `<option>` of a `<select>` element by its visible text.
    async fn select_by_visible_text(&self, text: &str) -> Result<()>;
}

/// An open browser-automation connection.
///
/// Created by the driver factory at test setup and quit at teardown;
/// it must be quit on every exit path so a failing test never leaks a
/// browser process (see `flightline_pages::scenario::with_session`).
#[async_trait]
pub trait Session: Send + Sync {
    /// Navigates the session to `url`.
    async fn navigate(&self, url: &str) -> Result<()>;

    /// Finds all elements matching `locator`.
    ///
    /// Absence is data, not an error: an empty vector means "not present",
    /// which the wait engine treats as "not ready yet".
    async fn find(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>>;

    /// Title of the current document.
    async fn page_title(&self) -> Result<String>;

    /// URL of the current document.
    async fn current_url(&self) -> Result<String>;

    /// Maximizes the browser window for stable element geometry.
    async fn maximize_window(&self) -> Result<()>;

    /// Ends the session and shuts the browser down.
    async fn quit(&self) -> Result<()>;
}

/// [`Session`] implementation over a live [`thirtyfour::WebDriver`].
pub struct DriverSession {
    driver: WebDriver,
}

impl DriverSession {
    pub fn new(driver: WebDriver) -> Self {
        Self { driver }
    }

    /// Access to the raw client, for operations outside the capability set.
    pub fn inner(&self) -> &WebDriver {
        &self.driver
    }
}

#[async_trait]
impl Session for DriverSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        tracing::debug!(url, "navigating");
        self.driver.goto(url).await?;
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        let found = self.driver.find_all(locator.to_by()).await?;
        Ok(found
            .into_iter()
            .map(|element| Box::new(DriverElement { element }) as Box<dyn Element>)
            .collect())
    }

    async fn page_title(&self) -> Result<String> {
        Ok(self.driver.title().await?)
    }

    async fn current_url(&self) -> Result<String> {
        Ok(self.driver.current_url().await?.to_string())
    }

    async fn maximize_window(&self) -> Result<()> {
        self.driver.maximize_window().await?;
        Ok(())
    }

    async fn quit(&self) -> Result<()> {
        tracing::debug!("quitting browser session");
        // WebDriver::quit consumes self; the handle is a cheap clone of the
        // same underlying session.
        self.driver.clone().quit().await?;
        Ok(())
    }
}

/// [`Element`] implementation over a live [`thirtyfour::WebElement`].
struct DriverElement {
    element: WebElement,
}

#[async_trait]
impl Element for DriverElement {
    async fn click(&self) -> Result<()> {
        self.element.click().await?;
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.element.clear().await?;
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        self.element.send_keys(text).await?;
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        Ok(self.element.text().await?)
    }

    async fn value(&self) -> Result<Option<String>> {
        Ok(self.element.value().await?)
    }

    async fn is_displayed(&self) -> Result<bool> {
        Ok(self.element.is_displayed().await?)
    }

    async fn is_enabled(&self) -> Result<bool> {
        Ok(self.element.is_enabled().await?)
    }

    async fn is_selected(&self) -> Result<bool> {
        Ok(self.element.is_selected().await?)
    }

    async fn select_by_visible_text(&self, text: &str) -> Result<()> {
        let select = SelectElement::new(&self.element).await?;
        select.select_by_exact_text(text).await?;
        Ok(())
    }
}
