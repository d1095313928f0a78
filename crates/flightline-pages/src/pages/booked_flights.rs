// Booked-flight history adapter

use async_trait::async_trait;
use flightline_core::{Error, Locator, Result, Session, WaitSpec, actions};

use crate::contracts::BookedFlights;

pub const MY_FLIGHTS_LINK: Locator = Locator::link_text("My Flights");
pub const FLIGHT_LISTINGS: Locator = Locator::xpath("//main//form//ul");
pub const SHOP_ANOTHER: Locator = Locator::link_text("Shop for another flight");
pub const GET_ANOTHER: Locator = Locator::link_text("Get another flight");

pub fn listing(index: usize) -> Locator {
    // XPath is 1-based.
    Locator::xpath_of(format!("(//main//form//ul)[{}]", index + 1))
}

/// Adapter for the signed-in user's booked-flight history.
pub struct BookedFlightsPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> BookedFlightsPage<'a> {
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
impl BookedFlights for BookedFlightsPage<'_> {
    async fn open_my_flights(&self) -> Result<()> {
        actions::click_when_ready(self.session, &MY_FLIGHTS_LINK, self.wait).await
    }

    async fn booked_flights(&self) -> Result<Vec<String>> {
        actions::read_texts(self.session, &FLIGHT_LISTINGS, self.wait).await
    }

    async fn view_flight_details(&self, index: usize) -> Result<()> {
        let listings = self.session.find(&FLIGHT_LISTINGS).await?;
        if index >= listings.len() {
            return Err(Error::InvalidArgument(format!(
                "flight index {index} out of range; {} listings present",
                listings.len()
            )));
        }
        actions::click_when_ready(self.session, &listing(index), self.wait).await
    }

    async fn shop_for_another_flight(&self) -> Result<()> {
        actions::click_when_ready(self.session, &SHOP_ANOTHER, self.wait).await
    }

    async fn get_another_flight(&self) -> Result<()> {
        actions::click_when_ready(self.session, &GET_ANOTHER, self.wait).await
    }
}
