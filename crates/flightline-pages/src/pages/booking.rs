// Booking form adapter: route, dates, passengers, trip type

use async_trait::async_trait;
use flightline_core::wait::{self, ReadyWhen};
use flightline_core::{Error, Locator, Poll, Result, Session, WaitSpec, actions};

use crate::contracts::BookingPage;

pub const BOOK_LINK: Locator = Locator::link_text("Book");
pub const FROM: Locator = Locator::id("fromCode");
pub const TO: Locator = Locator::id("toCode");
pub const DEPARTURE_PICKER: Locator = Locator::id("dpa");
pub const RETURN_PICKER: Locator = Locator::id("dpb");
pub const PASSENGERS: Locator = Locator::id("passengers");
pub const FIND_FLIGHTS: Locator = Locator::css(".btn-md");
pub const ONE_WAY: Locator = Locator::xpath("//booking//div[normalize-space()='One way']");
pub const MULTI_CITY: Locator = Locator::xpath("//booking//div[normalize-space()='Multi-city']");

/// Exact-text match avoids picking "12" or "21" when looking for day 1.
pub fn day_cell(day: u8) -> Locator {
    Locator::xpath_of(format!(
        "//td[contains(@class,'day') and normalize-space()='{day}']"
    ))
}

/// A round-trip booking request.
///
/// Days are day-of-month values clicked in the open date picker, matching
/// how the booking form is operated by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    pub from: String,
    pub to: String,
    pub departure_day: u8,
    pub return_day: u8,
    pub passengers: u8,
}

impl Itinerary {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        departure_day: u8,
        return_day: u8,
        passengers: u8,
    ) -> Result<Self> {
        let itinerary = Self {
            from: from.into(),
            to: to.into(),
            departure_day,
            return_day,
            passengers,
        };
        itinerary.validate()?;
        Ok(itinerary)
    }

    fn validate(&self) -> Result<()> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "origin and destination must not be empty".into(),
            ));
        }
        if !(1..=31).contains(&self.departure_day) || !(1..=31).contains(&self.return_day) {
            return Err(Error::InvalidArgument(format!(
                "days must be within 1..=31, got departure {} return {}",
                self.departure_day, self.return_day
            )));
        }
        if !(1..=9).contains(&self.passengers) {
            return Err(Error::InvalidArgument(format!(
                "passenger count must be within 1..=9, got {}",
                self.passengers
            )));
        }
        Ok(())
    }
}

/// Adapter for the flight-booking form.
pub struct BookingFormPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> BookingFormPage<'a> {
    pub fn new(session: &'a dyn Session) -> Self {
        Self {
            session,
            wait: WaitSpec::default(),
        }
    }

    pub fn with_wait(session: &'a dyn Session, wait: WaitSpec) -> Self {
        Self { session, wait }
    }

    async fn pick_day(&self, picker: &Locator, day: u8) -> Result<()> {
        actions::click_when_ready(self.session, picker, self.wait).await?;
        actions::click_when_ready(self.session, &day_cell(day), self.wait).await
    }
}

#[async_trait]
impl BookingPage for BookingFormPage<'_> {
    async fn open(&self) -> Result<()> {
        actions::click_when_ready(self.session, &BOOK_LINK, self.wait).await
    }

    async fn select_flight_details(&self, itinerary: &Itinerary) -> Result<()> {
        tracing::info!(from = %itinerary.from, to = %itinerary.to, "filling booking form");

        actions::select_by_visible_text(self.session, &FROM, &itinerary.from, self.wait).await?;
        actions::select_by_visible_text(self.session, &TO, &itinerary.to, self.wait).await?;
        self.pick_day(&DEPARTURE_PICKER, itinerary.departure_day)
            .await?;
        actions::select_by_visible_text(
            self.session,
            &PASSENGERS,
            &itinerary.passengers.to_string(),
            self.wait,
        )
        .await?;
        self.pick_day(&RETURN_PICKER, itinerary.return_day).await
    }

    async fn click_one_way(&self) -> Result<()> {
        actions::click_when_ready(self.session, &ONE_WAY, self.wait).await
    }

    async fn click_multi_city(&self) -> Result<()> {
        actions::click_when_ready(self.session, &MULTI_CITY, self.wait).await
    }

    async fn is_return_date_visible(&self) -> Result<bool> {
        let ready = wait::element_ready(self.session, &RETURN_PICKER, ReadyWhen::Visible).await?;
        Ok(matches!(ready, Poll::Ready(_)))
    }

    async fn find_flights(&self) -> Result<()> {
        actions::click_when_ready(self.session, &FIND_FLIGHTS, self.wait).await
    }
}
