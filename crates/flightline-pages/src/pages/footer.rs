// Footer links adapter
//
// Presence is checked before clicking in scenarios, so a link that
// disappears from the footer reports as an assertion failure rather than
// an opaque timeout.

use async_trait::async_trait;
use flightline_core::wait::{self, ReadyWhen};
use flightline_core::{Locator, Poll, Result, Session, WaitSpec, actions};

use crate::contracts::{Footer, FooterLink};

pub fn link_locator(link: FooterLink) -> Locator {
    Locator::link_text(link.label())
}

/// Adapter for the page footer's link columns.
pub struct FooterPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> FooterPage<'a> {
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
impl Footer for FooterPage<'_> {
    async fn is_present(&self, link: FooterLink) -> Result<bool> {
        let ready =
            wait::element_ready(self.session, &link_locator(link), ReadyWhen::Present).await?;
        Ok(matches!(ready, Poll::Ready(_)))
    }

    async fn click(&self, link: FooterLink) -> Result<()> {
        tracing::debug!(link = link.label(), "clicking footer link");
        actions::click_when_ready(self.session, &link_locator(link), self.wait).await
    }
}
