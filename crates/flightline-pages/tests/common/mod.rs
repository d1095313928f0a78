// Shared scenario-test support: logging, config, and a scripted fake
// ContosoAir login page.
//
// Each test binary compiles its own copy and uses a subset.
#![allow(dead_code)]

use std::time::Duration;

use flightline_core::Config;
use flightline_core::WaitSpec;
use flightline_core::fake::{ClickEffect, ElementHandle, FakeSession};
use flightline_pages::pages::login;

/// Currency-amount shape the price carousel renders (e.g. "$614").
pub const CURRENCY_SHAPE: &str = r"^\$\d+$";

pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn test_config() -> Config {
    Config::default()
}

/// Short waits keep failing-path tests fast.
pub fn fast() -> WaitSpec {
    WaitSpec::new(Duration::from_secs(2), Duration::from_millis(10))
}

/// Handles to the scripted login-page elements.
pub struct LoginFixture {
    pub login_link: ElementHandle,
    pub username: ElementHandle,
    pub password: ElementHandle,
    pub submit: ElementHandle,
    pub greeting: ElementHandle,
}

/// Installs a working ContosoAir login flow on `session`: the form is
/// reachable from the "Login" link and submitting reveals the navbar
/// greeting.
pub fn install_login(session: &FakeSession, username_shown: &str) -> LoginFixture {
    let login_link = session.install(login::LOGIN_LINK);
    let username = session.install(login::USERNAME);
    let password = session.install(login::PASSWORD);
    let submit = session
        .install(login::SUBMIT)
        .on_click(ClickEffect::Reveal(login::GREETING));
    let greeting = session
        .install(login::GREETING)
        .awaiting_reveal()
        .text(&format!("Hi {username_shown}"));

    LoginFixture {
        login_link,
        username,
        password,
        submit,
        greeting,
    }
}
