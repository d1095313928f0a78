// Login page adapter

use async_trait::async_trait;
use flightline_core::{Error, Locator, Result, Session, WaitSpec, actions};

use crate::contracts::LoginPage;

pub const LOGIN_LINK: Locator = Locator::link_text("Login");
pub const USERNAME: Locator = Locator::id("username");
pub const PASSWORD: Locator = Locator::id("password");
pub const SUBMIT: Locator = Locator::css("form fieldset .btn");
pub const ALERT: Locator = Locator::css(".alert > span");
/// Greeting shown in the navbar once signed in ("Hi {name}"); doubles as
/// the post-login marker the scenario layer waits on.
pub const GREETING: Locator = Locator::css("navbar span a");
pub const LOGOUT_LINK: Locator = Locator::link_text("Logout");

/// Adapter for the login form and the signed-in navbar state.
pub struct ContosoLoginPage<'a> {
    session: &'a dyn Session,
    wait: WaitSpec,
}

impl<'a> ContosoLoginPage<'a> {
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
impl LoginPage for ContosoLoginPage<'_> {
    async fn open(&self, base_url: &str) -> Result<()> {
        self.session.navigate(base_url).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<()> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "username and password must not be empty".into(),
            ));
        }

        tracing::info!(username, "logging in");
        actions::click_when_ready(self.session, &LOGIN_LINK, self.wait).await?;
        actions::type_when_ready(self.session, &USERNAME, username, self.wait).await?;
        actions::type_when_ready(self.session, &PASSWORD, password, self.wait).await?;
        actions::click_when_ready(self.session, &SUBMIT, self.wait).await
    }

    async fn login_without_credentials(&self) -> Result<String> {
        actions::click_when_ready(self.session, &LOGIN_LINK, self.wait).await?;
        actions::click_when_ready(self.session, &SUBMIT, self.wait).await?;

        let message = actions::read_text_when_ready(self.session, &ALERT, self.wait).await?;
        tracing::debug!(message, "login alert displayed");
        Ok(message)
    }

    async fn logged_in_user(&self) -> Result<String> {
        actions::read_text_when_ready(self.session, &GREETING, self.wait).await
    }

    async fn logout(&self) -> Result<()> {
        actions::click_when_ready(self.session, &LOGOUT_LINK, self.wait).await
    }
}
