// In-memory Session implementation for driver-free tests
//
// Scriptable stand-in for a live browser: tests install elements keyed by
// locator, attach click effects, and inspect what the suite did to them.
// Used by this crate's own tests and by the page-adapter scenario tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::locator::Locator;
use crate::session::{Element, Session};

/// What clicking a scripted element does to the page.
#[derive(Debug, Clone)]
pub enum ClickEffect {
    /// Flip the element's selected state.
    Toggle,
    /// Set the element's selected state (a radio-style control).
    Select,
    /// Make every element installed under `Locator` findable.
    Reveal(Locator),
    /// Stop displaying every element installed under `Locator`.
    Hide(Locator),
    /// Display every element installed under `Locator` again.
    Show(Locator),
    /// Change the document title (a navigation stand-in).
    SetTitle(String),
}

#[derive(Default)]
struct ElementState {
    /// Number of find() calls before the element shows up in results.
    present_after: u32,
    /// Hidden from find() until a `Reveal` effect targets its locator.
    awaiting_reveal: bool,
    /// Number of is_displayed() calls that report false before true.
    displayed_after: u32,
    hidden: bool,
    disabled: bool,
    selected: bool,
    text: String,
    value: String,
    options: Vec<String>,
    selected_option: Option<String>,
    effects: Vec<ClickEffect>,
    clicks: u32,
    clears: u32,
    keys: Vec<String>,
}

struct Entry {
    locator: Locator,
    state: Arc<Mutex<ElementState>>,
}

struct Inner {
    title: Mutex<String>,
    url: Mutex<String>,
    navigations: Mutex<Vec<String>>,
    maximized: Mutex<bool>,
    quit: Mutex<bool>,
    elements: Mutex<Vec<Entry>>,
}

/// Scriptable in-memory [`Session`].
#[derive(Clone)]
pub struct FakeSession {
    inner: Arc<Inner>,
}

impl FakeSession {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                title: Mutex::new(String::new()),
                url: Mutex::new(String::new()),
                navigations: Mutex::new(Vec::new()),
                maximized: Mutex::new(false),
                quit: Mutex::new(false),
                elements: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Installs an element findable by `locator` and returns a handle for
    /// scripting and inspection.
    pub fn install(&self, locator: Locator) -> ElementHandle {
        let state = Arc::new(Mutex::new(ElementState::default()));
        self.inner.elements.lock().push(Entry {
            locator,
            state: Arc::clone(&state),
        });
        ElementHandle { state }
    }

    pub fn set_title(&self, title: &str) {
        *self.inner.title.lock() = title.to_string();
    }

    /// URLs navigated to, in order.
    pub fn navigations(&self) -> Vec<String> {
        self.inner.navigations.lock().clone()
    }

    pub fn quit_called(&self) -> bool {
        *self.inner.quit.lock()
    }

    pub fn maximized(&self) -> bool {
        *self.inner.maximized.lock()
    }

    fn closed_guard(&self) -> Result<()> {
        if *self.inner.quit.lock() {
            Err(Error::SessionClosed("fake session was quit".into()))
        } else {
            Ok(())
        }
    }
}

impl Default for FakeSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Session for FakeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.closed_guard()?;
        self.inner.navigations.lock().push(url.to_string());
        *self.inner.url.lock() = url.to_string();
        Ok(())
    }

    async fn find(&self, locator: &Locator) -> Result<Vec<Box<dyn Element>>> {
        self.closed_guard()?;
        let mut found: Vec<Box<dyn Element>> = Vec::new();
        for entry in self.inner.elements.lock().iter() {
            if entry.locator != *locator {
                continue;
            }
            let mut state = entry.state.lock();
            if state.awaiting_reveal {
                continue;
            }
            if state.present_after > 0 {
                state.present_after -= 1;
                continue;
            }
            found.push(Box::new(FakeElement {
                session: Arc::clone(&self.inner),
                state: Arc::clone(&entry.state),
            }));
        }
        Ok(found)
    }

    async fn page_title(&self) -> Result<String> {
        self.closed_guard()?;
        Ok(self.inner.title.lock().clone())
    }

    async fn current_url(&self) -> Result<String> {
        self.closed_guard()?;
        Ok(self.inner.url.lock().clone())
    }

    async fn maximize_window(&self) -> Result<()> {
        self.closed_guard()?;
        *self.inner.maximized.lock() = true;
        Ok(())
    }

    async fn quit(&self) -> Result<()> {
        *self.inner.quit.lock() = true;
        Ok(())
    }
}

/// Scripting and inspection handle for one installed element.
#[derive(Clone)]
pub struct ElementHandle {
    state: Arc<Mutex<ElementState>>,
}

impl ElementHandle {
    // -- scripting ---------------------------------------------------------

    pub fn text(self, text: &str) -> Self {
        self.state.lock().text = text.to_string();
        self
    }

    pub fn value(self, value: &str) -> Self {
        self.state.lock().value = value.to_string();
        self
    }

    pub fn hidden(self) -> Self {
        self.state.lock().hidden = true;
        self
    }

    pub fn disabled(self) -> Self {
        self.state.lock().disabled = true;
        self
    }

    pub fn selected(self) -> Self {
        self.state.lock().selected = true;
        self
    }

    /// Element joins find() results only after `polls` find calls.
    pub fn present_after(self, polls: u32) -> Self {
        self.state.lock().present_after = polls;
        self
    }

    /// is_displayed() reports false for the first `polls` checks.
    pub fn visible_after(self, polls: u32) -> Self {
        self.state.lock().displayed_after = polls;
        self
    }

    /// Hidden from find() until a [`ClickEffect::Reveal`] targets it.
    pub fn awaiting_reveal(self) -> Self {
        self.state.lock().awaiting_reveal = true;
        self
    }

    pub fn options(self, options: &[&str]) -> Self {
        self.state.lock().options = options.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn on_click(self, effect: ClickEffect) -> Self {
        self.state.lock().effects.push(effect);
        self
    }

    // -- inspection --------------------------------------------------------

    pub fn clicks(&self) -> u32 {
        self.state.lock().clicks
    }

    pub fn clear_count(&self) -> u32 {
        self.state.lock().clears
    }

    pub fn keys_sent(&self) -> Vec<String> {
        self.state.lock().keys.clone()
    }

    pub fn input_value(&self) -> String {
        self.state.lock().value.clone()
    }

    pub fn is_selected_now(&self) -> bool {
        self.state.lock().selected
    }

    pub fn selected_option(&self) -> Option<String> {
        self.state.lock().selected_option.clone()
    }
}

struct FakeElement {
    session: Arc<Inner>,
    state: Arc<Mutex<ElementState>>,
}

impl FakeElement {
    fn apply_effects(&self, effects: Vec<ClickEffect>) {
        for effect in effects {
            match effect {
                ClickEffect::Toggle => {
                    let mut state = self.state.lock();
                    state.selected = !state.selected;
                }
                ClickEffect::Select => self.state.lock().selected = true,
                ClickEffect::Reveal(locator) => {
                    for entry in self.session.elements.lock().iter() {
                        if entry.locator == locator {
                            entry.state.lock().awaiting_reveal = false;
                        }
                    }
                }
                ClickEffect::Hide(locator) => {
                    for entry in self.session.elements.lock().iter() {
                        if entry.locator == locator {
                            entry.state.lock().hidden = true;
                        }
                    }
                }
                ClickEffect::Show(locator) => {
                    for entry in self.session.elements.lock().iter() {
                        if entry.locator == locator {
                            entry.state.lock().hidden = false;
                        }
                    }
                }
                ClickEffect::SetTitle(title) => *self.session.title.lock() = title,
            }
        }
    }
}

#[async_trait]
impl Element for FakeElement {
    async fn click(&self) -> Result<()> {
        let effects = {
            let mut state = self.state.lock();
            if state.disabled {
                return Err(Error::NotInteractable("element is disabled".into()));
            }
            state.clicks += 1;
            state.effects.clone()
        };
        self.apply_effects(effects);
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock();
        state.clears += 1;
        state.value.clear();
        Ok(())
    }

    async fn send_keys(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        state.keys.push(text.to_string());
        state.value.push_str(text);
        Ok(())
    }

    async fn text(&self) -> Result<String> {
        Ok(self.state.lock().text.clone())
    }

    async fn value(&self) -> Result<Option<String>> {
        Ok(Some(self.state.lock().value.clone()))
    }

    async fn is_displayed(&self) -> Result<bool> {
        let mut state = self.state.lock();
        if state.displayed_after > 0 {
            state.displayed_after -= 1;
            return Ok(false);
        }
        Ok(!state.hidden)
    }

    async fn is_enabled(&self) -> Result<bool> {
        Ok(!self.state.lock().disabled)
    }

    async fn is_selected(&self) -> Result<bool> {
        Ok(self.state.lock().selected)
    }

    async fn select_by_visible_text(&self, text: &str) -> Result<()> {
        let mut state = self.state.lock();
        if state.options.iter().any(|o| o == text) {
            state.selected_option = Some(text.to_string());
            Ok(())
        } else {
            Err(Error::ElementNotFound(format!("option '{text}'")))
        }
    }
}
