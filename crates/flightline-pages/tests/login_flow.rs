// Login scenarios
//
// Fake-session variants run everywhere; the live variant needs a running
// ContosoAir app plus a WebDriver endpoint and is ignored by default.

mod common;

use flightline_core::fake::FakeSession;
use flightline_core::{Error, expect};
use flightline_pages::contracts::LoginPage;
use flightline_pages::pages::login;
use flightline_pages::pages::{ContosoLoginPage, login::GREETING};
use flightline_pages::scenario::{login_as, with_session};

#[tokio::test]
async fn valid_login_reaches_the_post_login_marker() {
    common::init_logging();
    let config = common::test_config();
    let session = FakeSession::new();
    let fixture = common::install_login(&session, &config.username);

    let page = ContosoLoginPage::with_wait(&session, common::fast());
    page.open(&config.app_url).await.unwrap();
    page.login(&config.username, &config.password).await.unwrap();

    // The post-login greeting marker becomes visible without a timeout.
    expect(&session, &GREETING)
        .to_be_visible()
        .await
        .expect("greeting appears after login");

    assert_eq!(session.navigations(), vec![config.app_url.clone()]);
    assert_eq!(fixture.username.input_value(), config.username);
    assert_eq!(fixture.password.input_value(), config.password);
    assert_eq!(fixture.submit.clicks(), 1);

    let greeting = page.logged_in_user().await.unwrap();
    assert_eq!(greeting, format!("Hi {}", config.username));
}

#[tokio::test]
async fn empty_credentials_fail_fast_without_touching_the_page() {
    common::init_logging();
    let session = FakeSession::new();
    let fixture = common::install_login(&session, "testuser");

    let page = ContosoLoginPage::with_wait(&session, common::fast());
    let err = page.login("", "password123").await.unwrap_err();

    assert!(matches!(err, Error::InvalidArgument(_)));
    assert_eq!(fixture.login_link.clicks(), 0);
    assert_eq!(fixture.submit.clicks(), 0);
}

#[tokio::test]
async fn submitting_without_credentials_reads_the_alert() {
    common::init_logging();
    let session = FakeSession::new();
    common::install_login(&session, "testuser");
    session
        .install(login::ALERT)
        .text("We could not find this username and password combination");

    let page = ContosoLoginPage::with_wait(&session, common::fast());
    let message = page.login_without_credentials().await.unwrap();
    assert!(message.contains("could not find"));
}

#[tokio::test]
async fn logout_clicks_the_navbar_link() {
    common::init_logging();
    let session = FakeSession::new();
    common::install_login(&session, "testuser");
    let logout = session.install(login::LOGOUT_LINK);

    let page = ContosoLoginPage::with_wait(&session, common::fast());
    page.logout().await.unwrap();
    assert_eq!(logout.clicks(), 1);
}

#[tokio::test]
#[ignore = "requires a running ContosoAir app and WebDriver endpoint"]
async fn live_login_flow_succeeds_for_the_test_account() {
    common::init_logging();
    let config = flightline_core::Config::from_env();

    with_session(&config, |session| {
        let config = config.clone();
        async move { login_as(session.as_ref(), &config).await }
    })
    .await
    .expect("login flow against the live app");
}
