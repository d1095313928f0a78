// Integration tests for the element-action helpers
//
// Run against the in-memory fake session, so the full wait/act path is
// exercised without a browser.

use std::time::Duration;

use flightline_core::actions;
use flightline_core::error::Error;
use flightline_core::fake::{ClickEffect, FakeSession};
use flightline_core::locator::Locator;
use flightline_core::session::Session;
use flightline_core::wait::WaitSpec;

const USERNAME: Locator = Locator::id("username");
const SUBMIT: Locator = Locator::css(".btn");
const PRICES: Locator = Locator::xpath("//div[starts-with(normalize-space(.), '$')]");
const FROM: Locator = Locator::id("fromCode");

fn fast() -> WaitSpec {
    WaitSpec::new(Duration::from_secs(2), Duration::from_millis(10))
}

#[tokio::test]
async fn click_waits_for_the_element_to_appear() {
    let session = FakeSession::new();
    let button = session.install(SUBMIT).present_after(2);

    actions::click_when_ready(&session, &SUBMIT, fast())
        .await
        .expect("click should succeed once the element appears");
    assert_eq!(button.clicks(), 1);
}

#[tokio::test]
async fn click_waits_for_visibility() {
    let session = FakeSession::new();
    let button = session.install(SUBMIT).visible_after(3);

    actions::click_when_ready(&session, &SUBMIT, fast())
        .await
        .expect("click should succeed once the element is displayed");
    assert_eq!(button.clicks(), 1);
}

#[tokio::test]
async fn click_times_out_with_locator_context() {
    let session = FakeSession::new();
    session.install(SUBMIT).disabled();

    let err = actions::click_when_ready(&session, &SUBMIT, WaitSpec::once())
        .await
        .unwrap_err();
    match err {
        Error::Timeout {
            condition, locator, ..
        } => {
            assert_eq!(condition, "clickable");
            assert!(locator.contains(".btn"));
        }
        other => panic!("expected Timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn type_clears_before_typing() {
    let session = FakeSession::new();
    let field = session.install(USERNAME).value("stale-previous-input");

    actions::type_when_ready(&session, &USERNAME, "testuser", fast())
        .await
        .unwrap();

    // Clear-before-type invariant: the field holds exactly the new text,
    // never a concatenation with prior content.
    assert_eq!(field.input_value(), "testuser");
    assert_eq!(field.clear_count(), 1);
    assert_eq!(field.keys_sent(), vec!["testuser".to_string()]);
}

#[tokio::test]
async fn read_text_returns_visible_text() {
    let session = FakeSession::new();
    session.install(USERNAME).text("Hi testuser");

    let text = actions::read_text_when_ready(&session, &USERNAME, fast())
        .await
        .unwrap();
    assert_eq!(text, "Hi testuser");
}

#[tokio::test]
async fn read_texts_collects_visible_matches_in_order() {
    let session = FakeSession::new();
    session.install(PRICES.clone()).text("$614");
    session.install(PRICES.clone()).text("$120");
    session.install(PRICES.clone()).text("$433").hidden();

    let texts = actions::read_texts(&session, &PRICES, fast()).await.unwrap();
    assert_eq!(texts, vec!["$614".to_string(), "$120".to_string()]);
}

#[tokio::test]
async fn read_texts_waits_for_the_first_match() {
    let session = FakeSession::new();
    session.install(PRICES.clone()).text("$614").present_after(2);

    let texts = actions::read_texts(&session, &PRICES, fast()).await.unwrap();
    assert_eq!(texts, vec!["$614".to_string()]);
}

#[tokio::test]
async fn select_by_visible_text_picks_the_option() {
    let session = FakeSession::new();
    let dropdown = session
        .install(FROM)
        .options(&["Seisia ABM", "Egg Harbor City ACY"]);

    actions::select_by_visible_text(&session, &FROM, "Seisia ABM", fast())
        .await
        .unwrap();
    assert_eq!(dropdown.selected_option().as_deref(), Some("Seisia ABM"));
}

#[tokio::test]
async fn select_with_unknown_option_times_out() {
    let session = FakeSession::new();
    session.install(FROM).options(&["Seisia ABM"]);

    let err = actions::select_by_visible_text(&session, &FROM, "Atlantis XXX", WaitSpec::once())
        .await
        .unwrap_err();
    // Helpers add no retry of their own: the select happens after the
    // wait, so the missing option surfaces directly.
    assert!(matches!(err, Error::ElementNotFound(_)));
}

#[tokio::test]
async fn selected_state_is_read_through_presence_not_visibility() {
    let session = FakeSession::new();
    // Checkbox styled away behind its label, still selectable state.
    session
        .install(SUBMIT)
        .hidden()
        .selected();

    let selected = actions::is_selected_when_present(&session, &SUBMIT, fast())
        .await
        .unwrap();
    assert!(selected);
}

#[tokio::test]
async fn helpers_propagate_dead_session_errors() {
    let session = FakeSession::new();
    session.install(SUBMIT).on_click(ClickEffect::Toggle);
    session.quit().await.unwrap();

    let err = actions::click_when_ready(&session, &SUBMIT, fast())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::SessionClosed(_)));
}
