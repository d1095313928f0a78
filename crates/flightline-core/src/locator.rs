// Locator - immutable description of how to find an element
//
// Pure value type; pages bake these in as constants, helpers turn them
// into WebDriver `By` selectors on demand.

use std::borrow::Cow;
use std::fmt;

use thirtyfour::By;

/// Element location strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// CSS selector
    Css,
    /// XPath expression
    XPath,
    /// `id` attribute
    Id,
    /// Exact visible text of an anchor element
    LinkText,
}

/// An immutable description of how to find a UI element.
///
/// Locators are the contract between the suite and the application's
/// markup: page adapters declare them as constants and must update them
/// whenever that markup changes.
///
/// # Example
///
/// ```ignore
/// use flightline_core::locator::Locator;
///
/// const USERNAME: Locator = Locator::id("username");
/// const LOGIN_LINK: Locator = Locator::link_text("Login");
/// let day = Locator::xpath_of(format!("//td[normalize-space()='{}']", 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locator {
    strategy: Strategy,
    selector: Cow<'static, str>,
}

impl Locator {
    /// CSS selector locator, usable in `const` position.
    pub const fn css(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: Cow::Borrowed(selector),
        }
    }

    /// XPath locator, usable in `const` position.
    pub const fn xpath(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: Cow::Borrowed(selector),
        }
    }

    /// `id` attribute locator, usable in `const` position.
    pub const fn id(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::Id,
            selector: Cow::Borrowed(selector),
        }
    }

    /// Link-text locator, usable in `const` position.
    pub const fn link_text(selector: &'static str) -> Self {
        Self {
            strategy: Strategy::LinkText,
            selector: Cow::Borrowed(selector),
        }
    }

    /// CSS locator built at runtime (e.g. with an index substituted in).
    pub fn css_of(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::Css,
            selector: Cow::Owned(selector.into()),
        }
    }

    /// XPath locator built at runtime.
    pub fn xpath_of(selector: impl Into<String>) -> Self {
        Self {
            strategy: Strategy::XPath,
            selector: Cow::Owned(selector.into()),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Converts to the WebDriver client's selector type.
    pub fn to_by(&self) -> By {
        match self.strategy {
            Strategy::Css => By::Css(self.selector()),
            Strategy::XPath => By::XPath(self.selector()),
            Strategy::Id => By::Id(self.selector()),
            Strategy::LinkText => By::LinkText(self.selector()),
        }
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Strategy::Css => write!(f, "css selector '{}'", self.selector),
            Strategy::XPath => write!(f, "xpath '{}'", self.selector),
            Strategy::Id => write!(f, "id '{}'", self.selector),
            Strategy::LinkText => write!(f, "link text '{}'", self.selector),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn const_constructors() {
        const BTN: Locator = Locator::css(".btn");
        assert_eq!(BTN.strategy(), Strategy::Css);
        assert_eq!(BTN.selector(), ".btn");
    }

    #[test]
    fn runtime_constructors() {
        let day = Locator::xpath_of(format!("//td[normalize-space()='{}']", 20));
        assert_eq!(day.strategy(), Strategy::XPath);
        assert_eq!(day.selector(), "//td[normalize-space()='20']");
    }

    #[test]
    fn display_names_strategy_and_selector() {
        assert_eq!(
            Locator::id("username").to_string(),
            "id 'username'"
        );
        assert_eq!(
            Locator::link_text("Login").to_string(),
            "link text 'Login'"
        );
    }
}
