//! DOM capabilities the landing page needs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The presenter only reads cookies and location, and writes classes, text,
//! input values and form actions. `LandingDom` captures exactly that set so
//! the page logic runs unchanged against the browser (`BrowserDom`, behind
//! `hydrate`) and against the in-memory `FakeDom` in tests.
//!
//! ERROR HANDLING
//! ==============
//! Elements are a precondition of the page markup. A missing or mistyped
//! element is reported, never repaired.

#[cfg(feature = "hydrate")]
mod browser;
#[cfg(test)]
pub(crate) mod fake;

#[cfg(feature = "hydrate")]
pub use browser::BrowserDom;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element with the given ID exists in the document.
    #[error("missing element #{id}")]
    MissingElement { id: String },

    /// The element exists but is not the kind the operation requires.
    #[error("element #{id} is not an {expected}")]
    UnexpectedElement { id: String, expected: &'static str },

    /// No global `window`/`document` (not running in a browser page).
    #[error("no browser window available")]
    NoWindow,

    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Js(String),
}

pub trait LandingDom {
    /// Raw `document.cookie` string.
    fn cookie_header(&self) -> String;

    /// Current `location.search`, including the leading `?` when non-empty.
    fn location_search(&self) -> String;

    /// Current `location.hash`, including the leading `#` when non-empty.
    fn location_hash(&self) -> String;

    /// Add `class` to the element when `force` is true, remove it otherwise.
    fn toggle_class(&mut self, id: &str, class: &str, force: bool) -> Result<(), DomError>;

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError>;

    /// Set the value of an `<input>` element.
    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError>;

    /// Set the `action` of a `<form>` element.
    fn set_action(&mut self, id: &str, action: &str) -> Result<(), DomError>;
}
