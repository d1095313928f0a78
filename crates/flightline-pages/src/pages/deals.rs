// "Flight deals" boxes adapter

use async_trait::async_trait;
use flightline_core::{Error, Locator, Result, Session, WaitSpec, actions};

use crate::contracts::FlightDeals;

pub const DEALS_HEADING: Locator = Locator::xpath("//h2[normalize-space()='Flight deals']");

// The deal boxes carry no stable classes; position inside the <deals>
// custom element is the contract with the markup.
pub fn deal_span(deal: usize, suffix: &str) -> Locator {
    Locator::xpath_of(format!("//deals/ul/li[{deal}]/span/span/{suffix}"))
}

fn check_index(deal: usize) -> Result<()> {
    if deal == 0 {
        return Err(Error::InvalidArgument(
            "deal index is 1-based; got 0".into(),
        ));
    }
    Ok(())
}

/// Adapter for the flight-deal boxes on the home page.
pub struct FlightDealsPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> FlightDealsPage<'a> {
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
impl FlightDeals for FlightDealsPage<'_> {
    async fn deals_heading(&self) -> Result<String> {
        actions::read_text_when_ready(self.session, &DEALS_HEADING, self.wait).await
    }

    async fn deal_route(&self, deal: usize) -> Result<(String, String)> {
        check_index(deal)?;
        let origin = actions::read_text_when_ready(
            self.session,
            &deal_span(deal, "span[1]/span[1]"),
            self.wait,
        )
        .await?;
        let destination = actions::read_text_when_ready(
            self.session,
            &deal_span(deal, "span[1]/span[2]"),
            self.wait,
        )
        .await?;
        Ok((origin, destination))
    }

    async fn deal_end_date(&self, deal: usize) -> Result<String> {
        check_index(deal)?;
        actions::read_text_when_ready(self.session, &deal_span(deal, "span[1]/span[3]"), self.wait)
            .await
    }

    async fn deal_description(&self, deal: usize) -> Result<String> {
        check_index(deal)?;
        actions::read_text_when_ready(self.session, &deal_span(deal, "span[2]"), self.wait).await
    }
}
