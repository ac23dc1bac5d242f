//! `web-sys` implementation of [`LandingDom`].

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlDocument, HtmlFormElement, HtmlInputElement, Location};

use super::{DomError, LandingDom};

/// The live document and location of the current window.
pub struct BrowserDom {
    document: HtmlDocument,
    location: Location,
}

impl BrowserDom {
    /// Bind to the global `window`.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::NoWindow`] outside a browser page, or
    /// [`DomError::Js`] if the document is not an HTML document.
    pub fn from_window() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window
            .document()
            .ok_or(DomError::NoWindow)?
            .dyn_into::<HtmlDocument>()
            .map_err(|_| DomError::Js("document is not an HTML document".to_owned()))?;
        Ok(Self { document, location: window.location() })
    }

    fn element(&self, id: &str) -> Result<Element, DomError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| DomError::MissingElement { id: id.to_owned() })
    }
}

fn js_error(err: JsValue) -> DomError {
    DomError::Js(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl LandingDom for BrowserDom {
    fn cookie_header(&self) -> String {
        // Only fails for sandboxed documents, which never carry a session.
        self.document.cookie().unwrap_or_default()
    }

    fn location_search(&self) -> String {
        self.location.search().unwrap_or_default()
    }

    fn location_hash(&self) -> String {
        self.location.hash().unwrap_or_default()
    }

    fn toggle_class(&mut self, id: &str, class: &str, force: bool) -> Result<(), DomError> {
        self.element(id)?
            .class_list()
            .toggle_with_force(class, force)
            .map(|_| ())
            .map_err(js_error)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError> {
        let input = self
            .element(id)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::UnexpectedElement { id: id.to_owned(), expected: "input" })?;
        input.set_value(value);
        Ok(())
    }

    fn set_action(&mut self, id: &str, action: &str) -> Result<(), DomError> {
        let form = self
            .element(id)?
            .dyn_into::<HtmlFormElement>()
            .map_err(|_| DomError::UnexpectedElement { id: id.to_owned(), expected: "form" })?;
        form.set_action(action);
        Ok(())
    }
}
