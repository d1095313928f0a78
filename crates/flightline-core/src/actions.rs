// Element-action helpers
//
// Each helper composes the wait engine with exactly one user-facing
// action. Helpers add no retry of their own and surface `Timeout`
// unmodified; retries beyond the wait budget are a scenario-layer policy.

use crate::error::Result;
use crate::locator::Locator;
use crate::session::Session;
use crate::wait::{self, Poll, ReadyWhen, WaitSpec};

/// Waits for the element to be clickable, then clicks it once.
pub async fn click_when_ready(
    session: &dyn Session,
    locator: &Locator,
    spec: WaitSpec,
) -> Result<()> {
    let element = wait::wait_for_element(session, locator, ReadyWhen::Clickable, spec).await?;
    tracing::debug!(%locator, "click");
    element.click().await
}

/// Waits for the element to be visible, clears it, then types `text`.
///
/// The field ends up containing exactly `text`, never a concatenation
/// with prior content.
pub async fn type_when_ready(
    session: &dyn Session,
    locator: &Locator,
    text: &str,
    spec: WaitSpec,
) -> Result<()> {
    let element = wait::wait_for_element(session, locator, ReadyWhen::Visible, spec).await?;
    tracing::debug!(%locator, "type");
    element.clear().await?;
    element.send_keys(text).await
}

/// Waits for the element to be visible and returns its text.
pub async fn read_text_when_ready(
    session: &dyn Session,
    locator: &Locator,
    spec: WaitSpec,
) -> Result<String> {
    let element = wait::wait_for_element(session, locator, ReadyWhen::Visible, spec).await?;
    element.text().await
}

/// Waits until at least one visible element matches, then returns the
/// text of every visible match in document order.
pub async fn read_texts(
    session: &dyn Session,
    locator: &Locator,
    spec: WaitSpec,
) -> Result<Vec<String>> {
    wait::wait_until("visible", &locator.to_string(), spec, || async {
        let mut texts = Vec::new();
        for element in session.find(locator).await? {
            if element.is_displayed().await? {
                texts.push(element.text().await?);
            }
        }
        if texts.is_empty() {
            Ok(Poll::NotReady)
        } else {
            Ok(Poll::Ready(texts))
        }
    })
    .await
}

/// Waits for a `<select>` element to be visible, then selects the option
/// with the given visible text.
pub async fn select_by_visible_text(
    session: &dyn Session,
    locator: &Locator,
    text: &str,
    spec: WaitSpec,
) -> Result<()> {
    let element = wait::wait_for_element(session, locator, ReadyWhen::Visible, spec).await?;
    tracing::debug!(%locator, option = text, "select");
    element.select_by_visible_text(text).await
}

/// Waits for the element to be present, then reports its selected state.
///
/// Presence (not visibility) is the bar here: checkbox inputs are often
/// styled away behind their labels.
pub async fn is_selected_when_present(
    session: &dyn Session,
    locator: &Locator,
    spec: WaitSpec,
) -> Result<bool> {
    let element = wait::wait_for_element(session, locator, ReadyWhen::Present, spec).await?;
    element.is_selected().await
}
