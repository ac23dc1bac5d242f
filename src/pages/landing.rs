//! Landing-page authentication presenter.
//!
//! Shows the login form when there is no session cookie and the logout form
//! when there is one. Runs once at page load; later cookie changes arrive
//! with the redirect that follows `/login` or `/logout`.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::config::LandingConfig;
use crate::dom::{DomError, LandingDom};
use crate::state::auth::CookieAuth;
use crate::util::cookies::parse_cookies;

/// Login form action: the login path plus the page's query and fragment, so
/// the server can redirect back to the same place (`?ref=...`).
pub fn login_action(config: &LandingConfig, search: &str, hash: &str) -> String {
    format!("{}{search}{hash}", config.login_path)
}

/// Apply the cookie session state to the landing page.
///
/// Returns `true` when an authorization token cookie is present.
///
/// # Errors
///
/// Returns a [`DomError`] if the page is missing one of the configured
/// elements or an element has the wrong kind.
pub fn authenticate<D: LandingDom + ?Sized>(dom: &mut D, config: &LandingConfig) -> Result<bool, DomError> {
    let auth = CookieAuth::from_cookies(&parse_cookies(&dom.cookie_header()), config);
    let ids = &config.elements;
    let have_token = auth.is_authenticated();

    if let Some(username) = &auth.username {
        dom.set_value(&ids.username_input, username)?;
    }

    dom.toggle_class(&ids.login_form_container, &config.hidden_class, have_token)?;
    dom.toggle_class(&ids.logout_form_container, &config.hidden_class, !have_token)?;

    if let Some(label) = auth.logout_label() {
        dom.set_text(&ids.logout_button, &label)?;
    } else {
        let action = login_action(config, &dom.location_search(), &dom.location_hash());
        dom.set_action(&ids.login_form, &action)?;
    }

    dom.toggle_class(&ids.login_failure_message, &config.hidden_class, !auth.login_failed)?;

    log::debug!(
        "landing auth applied: session={have_token} user={:?} login_failed={}",
        auth.username,
        auth.login_failed
    );
    Ok(have_token)
}
