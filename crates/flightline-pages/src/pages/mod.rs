// Page adapters for the ContosoAir application
//
// Each adapter holds an exclusive, non-owning reference to a Session plus
// its own locator constants, and is stateless beyond that. Adapters never
// construct or quit sessions; that is the scenario layer's job (see
// `crate::scenario::with_session`). Locators are the contract with the
// application's markup and must be updated whenever it changes.

pub mod available_flights;
pub mod booked_flights;
pub mod booking;
pub mod deals;
pub mod filters;
pub mod footer;
pub mod home;
pub mod login;
pub mod view_dates;

pub use available_flights::AvailableFlightsPage;
pub use booked_flights::BookedFlightsPage;
pub use booking::{BookingFormPage, Itinerary};
pub use deals::FlightDealsPage;
pub use filters::BookingFiltersPage;
pub use footer::FooterPage;
pub use home::ContosoHomePage;
pub use login::ContosoLoginPage;
pub use view_dates::ViewDatesPage;
