// Scenario-layer plumbing
//
// Scoped session acquisition and the canonical login preamble. Sessions
// are quit on every exit path, so a failing scenario never leaks a
// browser process.

use std::future::Future;
use std::sync::Arc;

use flightline_core::{Config, DriverSession, Result, Session, driver, expect};

use crate::contracts::LoginPage;
use crate::pages::ContosoLoginPage;
use crate::pages::login::GREETING;

/// Launches the configured browser, runs `scenario`, and quits the
/// session regardless of the outcome.
///
/// The scenario error wins when both the scenario and the quit fail; the
/// quit failure is then only logged.
pub async fn with_session<F, Fut, T>(config: &Config, scenario: F) -> Result<T>
where
    F: FnOnce(Arc<DriverSession>) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let session = Arc::new(driver::launch_named(&config.browser, config).await?);
    session.maximize_window().await?;

    let outcome = scenario(Arc::clone(&session)).await;
    let quit = session.quit().await;

    match (outcome, quit) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(quit_err)) => Err(quit_err),
        (Err(scenario_err), quit) => {
            if let Err(quit_err) = quit {
                tracing::warn!(error = %quit_err, "session quit failed after scenario error");
            }
            Err(scenario_err)
        }
    }
}

/// The canonical login preamble: navigate to the app, sign in with the
/// configured test account, and wait for the post-login greeting marker.
pub async fn login_as(session: &dyn Session, config: &Config) -> Result<()> {
    let login = ContosoLoginPage::new(session);
    login.open(&config.app_url).await?;
    login.login(&config.username, &config.password).await?;
    expect(session, &GREETING).to_be_visible().await
}
