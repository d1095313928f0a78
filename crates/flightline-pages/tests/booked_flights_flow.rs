// Booked-flight history scenarios

mod common;

use flightline_core::Error;
use flightline_core::fake::FakeSession;
use flightline_pages::contracts::BookedFlights;
use flightline_pages::pages::{BookedFlightsPage, booked_flights};

fn install_history(session: &FakeSession, flights: &[&str]) {
    session.install(booked_flights::MY_FLIGHTS_LINK);
    session.install(booked_flights::SHOP_ANOTHER);
    session.install(booked_flights::GET_ANOTHER);
    for (index, flight) in flights.iter().enumerate() {
        session
            .install(booked_flights::FLIGHT_LISTINGS.clone())
            .text(flight);
        session.install(booked_flights::listing(index));
    }
}

#[tokio::test]
async fn booked_flights_are_listed_in_order() {
    common::init_logging();
    let session = FakeSession::new();
    install_history(
        &session,
        &["SEA -> HNL Sep 23 seat 12A", "HNL -> SEA Sep 30 seat 14C"],
    );

    let page = BookedFlightsPage::with_wait(&session, common::fast());
    page.open_my_flights().await.unwrap();
    let flights = page.booked_flights().await.unwrap();
    assert_eq!(
        flights,
        vec![
            "SEA -> HNL Sep 23 seat 12A".to_string(),
            "HNL -> SEA Sep 30 seat 14C".to_string(),
        ]
    );
}

#[tokio::test]
async fn out_of_range_flight_index_fails_fast() {
    common::init_logging();
    let session = FakeSession::new();
    install_history(&session, &["SEA -> HNL Sep 23 seat 12A"]);

    let page = BookedFlightsPage::with_wait(&session, common::fast());
    let err = page.view_flight_details(5).await.unwrap_err();
    match err {
        Error::InvalidArgument(message) => assert!(message.contains("out of range")),
        other => panic!("expected InvalidArgument, got {other:?}"),
    }
}

#[tokio::test]
async fn shop_and_get_another_flight_click_their_links() {
    common::init_logging();
    let session = FakeSession::new();
    let shop = session.install(booked_flights::SHOP_ANOTHER);
    let get = session.install(booked_flights::GET_ANOTHER);

    let page = BookedFlightsPage::with_wait(&session, common::fast());
    page.shop_for_another_flight().await.unwrap();
    page.get_another_flight().await.unwrap();
    assert_eq!(shop.clicks(), 1);
    assert_eq!(get.clicks(), 1);
}

#[tokio::test]
#[ignore = "requires a running ContosoAir app and WebDriver endpoint"]
async fn live_booked_flight_history_is_reachable() {
    common::init_logging();
    let config = flightline_core::Config::from_env();

    flightline_pages::scenario::with_session(&config, |session| {
        let config = config.clone();
        async move {
            flightline_pages::scenario::login_as(session.as_ref(), &config).await?;
            let page = BookedFlightsPage::new(session.as_ref());
            page.open_my_flights().await?;
            let flights = page.booked_flights().await?;
            assert!(!flights.is_empty(), "test account should have booked flights");
            Ok(())
        }
    })
    .await
    .expect("booked-flights flow against the live app");
}
