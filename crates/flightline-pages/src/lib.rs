//! flightline-pages: Page Object Model suite for the ContosoAir
//! flight-booking sample application.
//!
//! Capability traits in [`contracts`] describe what each page can do,
//! adapters in [`pages`] implement them against a
//! [`flightline_core::Session`], and the integration tests under
//! `tests/` orchestrate the adapters into end-to-end scenarios.
//!
//! # Example
//!
//! ```ignore
//! use flightline_core::Config;
//! use flightline_pages::contracts::AvailableFlights;
//! use flightline_pages::pages::AvailableFlightsPage;
//! use flightline_pages::scenario::{login_as, with_session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let prices = with_session(&config, |session| async move {
//!         login_as(session.as_ref(), &config).await?;
//!         // ... drive the booking flow ...
//!         let flights = AvailableFlightsPage::new(session.as_ref());
//!         flights.departing_flight_prices().await
//!     })
//!     .await?;
//!     println!("departing prices: {prices:?}");
//!     Ok(())
//! }
//! ```

pub mod contracts;
pub mod pages;
pub mod scenario;

pub use contracts::{Filter, FooterLink, FooterSection};
pub use pages::Itinerary;
