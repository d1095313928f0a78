// Booking-form scenarios

mod common;

use flightline_core::fake::{ClickEffect, FakeSession};
use flightline_pages::contracts::BookingPage;
use flightline_pages::pages::{BookingFormPage, Itinerary, booking};

struct BookingFixture {
    session: FakeSession,
    from: flightline_core::fake::ElementHandle,
    to: flightline_core::fake::ElementHandle,
    passengers: flightline_core::fake::ElementHandle,
    departure_day: flightline_core::fake::ElementHandle,
    return_day: flightline_core::fake::ElementHandle,
    find_flights: flightline_core::fake::ElementHandle,
}

/// Scripts the booking form the way the app renders it: airport dropdowns,
/// two date pickers whose day cells appear when the picker opens, and the
/// passenger count dropdown.
fn install_booking_form(itinerary: &Itinerary) -> BookingFixture {
    let session = FakeSession::new();
    session.install(booking::BOOK_LINK);

    let airports = ["Seisia ABM", "Egg Harbor City ACY", "Kabri Dar ABK"];
    let from = session.install(booking::FROM).options(&airports);
    let to = session.install(booking::TO).options(&airports);
    let passengers = session
        .install(booking::PASSENGERS)
        .options(&["1", "2", "3", "4", "5"]);

    let departure_cell = booking::day_cell(itinerary.departure_day);
    let return_cell = booking::day_cell(itinerary.return_day);
    session
        .install(booking::DEPARTURE_PICKER)
        .on_click(ClickEffect::Reveal(departure_cell.clone()));
    session
        .install(booking::RETURN_PICKER)
        .on_click(ClickEffect::Reveal(return_cell.clone()));
    let departure_day = session.install(departure_cell).awaiting_reveal();
    let return_day = session.install(return_cell).awaiting_reveal();

    let find_flights = session.install(booking::FIND_FLIGHTS);

    BookingFixture {
        session,
        from,
        to,
        passengers,
        departure_day,
        return_day,
        find_flights,
    }
}

#[tokio::test]
async fn booking_form_is_filled_from_the_itinerary() {
    common::init_logging();
    let itinerary = Itinerary::new("Seisia ABM", "Egg Harbor City ACY", 20, 25, 2).unwrap();
    let fixture = install_booking_form(&itinerary);

    let page = BookingFormPage::with_wait(&fixture.session, common::fast());
    page.open().await.unwrap();
    page.select_flight_details(&itinerary).await.unwrap();
    page.find_flights().await.unwrap();

    assert_eq!(fixture.from.selected_option().as_deref(), Some("Seisia ABM"));
    assert_eq!(
        fixture.to.selected_option().as_deref(),
        Some("Egg Harbor City ACY")
    );
    assert_eq!(fixture.passengers.selected_option().as_deref(), Some("2"));
    // Each day cell only exists once its picker was opened, so a click
    // proves the open-then-pick ordering.
    assert_eq!(fixture.departure_day.clicks(), 1);
    assert_eq!(fixture.return_day.clicks(), 1);
    assert_eq!(fixture.find_flights.clicks(), 1);
}

#[tokio::test]
async fn trip_type_toggles_swap_return_date_visibility() {
    common::init_logging();
    let session = FakeSession::new();
    session.install(booking::RETURN_PICKER);
    session
        .install(booking::ONE_WAY)
        .on_click(ClickEffect::Hide(booking::RETURN_PICKER));
    session
        .install(booking::MULTI_CITY)
        .on_click(ClickEffect::Show(booking::RETURN_PICKER));

    let page = BookingFormPage::with_wait(&session, common::fast());
    assert!(page.is_return_date_visible().await.unwrap());

    page.click_one_way().await.unwrap();
    assert!(!page.is_return_date_visible().await.unwrap());

    page.click_multi_city().await.unwrap();
    assert!(page.is_return_date_visible().await.unwrap());
}

#[tokio::test]
#[ignore = "requires a running ContosoAir app and WebDriver endpoint"]
async fn live_booking_form_accepts_an_itinerary() {
    common::init_logging();
    let config = flightline_core::Config::from_env();
    let itinerary = Itinerary::new("Seisia ABM", "Egg Harbor City ACY", 20, 25, 1).unwrap();

    flightline_pages::scenario::with_session(&config, |session| {
        let config = config.clone();
        async move {
            flightline_pages::scenario::login_as(session.as_ref(), &config).await?;
            let page = BookingFormPage::new(session.as_ref());
            page.open().await?;
            page.select_flight_details(&itinerary).await?;
            page.find_flights().await
        }
    })
    .await
    .expect("booking flow against the live app");
}
