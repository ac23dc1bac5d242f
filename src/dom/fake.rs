//! In-memory [`LandingDom`] for tests.

use std::collections::{BTreeSet, HashMap};

use super::{DomError, LandingDom};
use crate::config::LandingConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    Div,
    Button,
    Input,
    Form,
}

#[derive(Clone, Debug)]
pub(crate) struct FakeElement {
    pub kind: Kind,
    pub classes: BTreeSet<String>,
    pub text: String,
    pub value: String,
    pub action: String,
}

impl FakeElement {
    fn new(kind: Kind) -> Self {
        Self { kind, classes: BTreeSet::new(), text: String::new(), value: String::new(), action: String::new() }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct FakeDom {
    pub cookie: String,
    pub search: String,
    pub hash: String,
    pub elements: HashMap<String, FakeElement>,
}

impl FakeDom {
    /// Landing markup as served: every element present, nothing hidden.
    pub fn landing(config: &LandingConfig) -> Self {
        let ids = &config.elements;
        let mut dom = Self::default();
        dom.insert(&ids.login_form_container, Kind::Div);
        dom.insert(&ids.logout_form_container, Kind::Div);
        dom.insert(&ids.logout_button, Kind::Button);
        dom.insert(&ids.login_failure_message, Kind::Div);
        dom.insert(&ids.username_input, Kind::Input);
        dom.insert(&ids.login_form, Kind::Form);
        dom
    }

    pub fn with_cookie(mut self, cookie: &str) -> Self {
        cookie.clone_into(&mut self.cookie);
        self
    }

    pub fn with_location(mut self, search: &str, hash: &str) -> Self {
        search.clone_into(&mut self.search);
        hash.clone_into(&mut self.hash);
        self
    }

    pub fn insert(&mut self, id: &str, kind: Kind) {
        self.elements.insert(id.to_owned(), FakeElement::new(kind));
    }

    pub fn get(&self, id: &str) -> &FakeElement {
        &self.elements[id]
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.get(id).classes.contains(class)
    }

    fn element_mut(&mut self, id: &str) -> Result<&mut FakeElement, DomError> {
        self.elements.get_mut(id).ok_or_else(|| DomError::MissingElement { id: id.to_owned() })
    }
}

impl LandingDom for FakeDom {
    fn cookie_header(&self) -> String {
        self.cookie.clone()
    }

    fn location_search(&self) -> String {
        self.search.clone()
    }

    fn location_hash(&self) -> String {
        self.hash.clone()
    }

    fn toggle_class(&mut self, id: &str, class: &str, force: bool) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if force {
            el.classes.insert(class.to_owned());
        } else {
            el.classes.remove(class);
        }
        Ok(())
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), DomError> {
        text.clone_into(&mut self.element_mut(id)?.text);
        Ok(())
    }

    fn set_value(&mut self, id: &str, value: &str) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if el.kind != Kind::Input {
            return Err(DomError::UnexpectedElement { id: id.to_owned(), expected: "input" });
        }
        value.clone_into(&mut el.value);
        Ok(())
    }

    fn set_action(&mut self, id: &str, action: &str) -> Result<(), DomError> {
        let el = self.element_mut(id)?;
        if el.kind != Kind::Form {
            return Err(DomError::UnexpectedElement { id: id.to_owned(), expected: "form" });
        }
        action.clone_into(&mut el.action);
        Ok(())
    }
}
