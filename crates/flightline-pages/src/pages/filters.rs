// "View by" / "Filter results" adapter
//
// The checkboxes sit behind their labels, so selection state is read
// through presence rather than visibility.

use async_trait::async_trait;
use flightline_core::{Locator, Result, Session, WaitSpec, actions};

use crate::contracts::{BookingFilters, Filter};

pub fn checkbox(filter: Filter) -> Locator {
    Locator::xpath_of(format!(
        "//label[contains(normalize-space(.),'{}')]/preceding-sibling::input",
        filter.label()
    ))
}

/// Adapter for the booking page's filter checkboxes.
pub struct BookingFiltersPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> BookingFiltersPage<'a> {
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
impl BookingFilters for BookingFiltersPage<'_> {
    async fn toggle(&self, filter: Filter) -> Result<()> {
        tracing::debug!(filter = filter.label(), "toggling filter");
        actions::click_when_ready(self.session, &checkbox(filter), self.wait).await
    }

    async fn is_selected(&self, filter: Filter) -> Result<bool> {
        actions::is_selected_when_present(self.session, &checkbox(filter), WaitSpec::once()).await
    }
}
