// End-to-end demo: sign in, fill the booking form, and print the
// departing-flight prices.
//
// Needs a running ContosoAir app plus a WebDriver endpoint, e.g.:
//
//   chromedriver --port=9515 &
//   FLIGHTLINE_APP_URL=http://localhost:3000/ cargo run --example book_a_flight

use flightline_core::Config;
use flightline_pages::contracts::{AvailableFlights, BookingPage};
use flightline_pages::pages::{AvailableFlightsPage, BookingFormPage, Itinerary};
use flightline_pages::scenario::{login_as, with_session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let itinerary = Itinerary::new("Seisia ABM", "Egg Harbor City ACY", 20, 25, 1)?;

    let prices = with_session(&config, |session| {
        let config = config.clone();
        let itinerary = itinerary.clone();
        async move {
            let session = session.as_ref();
            login_as(session, &config).await?;

            let booking = BookingFormPage::new(session);
            booking.open().await?;
            booking.select_flight_details(&itinerary).await?;
            booking.find_flights().await?;

            let flights = AvailableFlightsPage::new(session);
            flights.departing_flight_prices().await
        }
    })
    .await?;

    println!("departing prices: {prices:?}");
    Ok(())
}
