// "View dates" buttons adapter
//
// Reads the real page title after navigation; the original suite's
// hard-coded wrong title was a seeded test exercise, and encoding the
// check belongs to the scenario layer.

use async_trait::async_trait;
use flightline_core::{Error, Locator, Result, Session, WaitSpec, actions};

use crate::contracts::ViewDates;

pub fn view_dates_button(deal: usize) -> Locator {
    Locator::css_of(format!("ul > li:nth-child({deal}) .btn"))
}

/// Adapter for the per-deal "View dates" buttons.
pub struct ViewDatesPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> ViewDatesPage<'a> {
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
impl ViewDates for ViewDatesPage<'_> {
    async fn click_view_dates(&self, deal: usize) -> Result<()> {
        if deal == 0 {
            return Err(Error::InvalidArgument(
                "deal index is 1-based; got 0".into(),
            ));
        }
        actions::click_when_ready(self.session, &view_dates_button(deal), self.wait).await
    }

    async fn page_title(&self) -> Result<String> {
        self.session.page_title().await
    }
}
