// Home page adapter: hero content and recommended destinations

use async_trait::async_trait;
use flightline_core::wait::{self, ReadyWhen};
use flightline_core::{Locator, Poll, Result, Session, WaitSpec, actions};

use crate::contracts::HomePage;

pub const LOGO: Locator = Locator::css("img.block-navbar-left-logo");
pub const HERO_TITLE: Locator = Locator::xpath("//span[contains(normalize-space(.), 'want to go?')]");
pub const DEALS_HEADING: Locator = Locator::xpath("//h2[normalize-space()='Flight deals']");
pub const RECOMMENDED_HEADING: Locator =
    Locator::xpath("//h2[normalize-space()='Recommended for you']");

pub fn caption(city: &str) -> Locator {
    Locator::xpath_of(format!("//figcaption[normalize-space()='{city}']"))
}

/// Adapter for the landing page.
pub struct ContosoHomePage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> ContosoHomePage<'a> {
    pub fn new(session: &'a dyn Session) -> Self {
        Self {
            session,
            wait: WaitSpec::default(),
        }
    }

    pub fn with_wait(session: &'a dyn Session, wait: WaitSpec) -> Self {
        Self { session, wait }
    }
}

#[async_trait]
impl HomePage for ContosoHomePage<'_> {
    async fn logo_displayed(&self) -> Result<bool> {
        let ready = wait::element_ready(self.session, &LOGO, ReadyWhen::Visible).await?;
        Ok(matches!(ready, Poll::Ready(_)))
    }

    async fn hero_title(&self) -> Result<String> {
        actions::read_text_when_ready(self.session, &HERO_TITLE, self.wait).await
    }

    async fn deals_heading(&self) -> Result<String> {
        actions::read_text_when_ready(self.session, &DEALS_HEADING, self.wait).await
    }

    async fn recommended_heading(&self) -> Result<String> {
        actions::read_text_when_ready(self.session, &RECOMMENDED_HEADING, self.wait).await
    }

    async fn destination_caption(&self, city: &str) -> Result<String> {
        actions::read_text_when_ready(self.session, &caption(city), self.wait).await
    }
}
