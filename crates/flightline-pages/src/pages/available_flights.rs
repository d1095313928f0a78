// "Available flights" carousel adapter: date cards and prices

use async_trait::async_trait;
use flightline_core::wait::{self, ReadyWhen};
use flightline_core::{Locator, Poll, Result, Session, WaitSpec, actions};

use crate::contracts::AvailableFlights;

pub const PRICES: Locator = Locator::xpath(
    "//div[contains(@class,'available-flights')]//div[starts-with(normalize-space(.), '$')]",
);

pub fn date_card(date_text: &str) -> Locator {
    Locator::xpath_of(format!(
        "//div[contains(@class,'available-flights')]//div[contains(normalize-space(.), '{date_text}')]"
    ))
}

pub fn selected_date_card(date_text: &str) -> Locator {
    Locator::xpath_of(format!(
        "//div[contains(@class,'available-flights')]//div[contains(normalize-space(.), '{date_text}') and contains(@class,'selected')]"
    ))
}

/// Adapter for the departing-flight date/price carousel.
pub struct AvailableFlightsPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> AvailableFlightsPage<'a> {
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
impl AvailableFlights for AvailableFlightsPage<'_> {
    async fn select_departing_flight_by_date(&self, date_text: &str) -> Result<()> {
        tracing::debug!(date_text, "selecting departing flight");
        actions::click_when_ready(self.session, &date_card(date_text), self.wait).await
    }

    async fn departing_flight_prices(&self) -> Result<Vec<String>> {
        actions::read_texts(self.session, &PRICES, self.wait).await
    }

    async fn is_date_selected(&self, date_text: &str) -> Result<bool> {
        let ready =
            wait::element_ready(self.session, &selected_date_card(date_text), ReadyWhen::Present)
                .await?;
        Ok(matches!(ready, Poll::Ready(_)))
    }
}
