//! Landing-page shape: cookie names, element IDs and the login endpoint.
//!
//! The browser has no environment to read from, so `Default` is the
//! production configuration. Tests build alternate shapes directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const USERNAME_COOKIE: &str = "fontra-username";
pub const TOKEN_COOKIE: &str = "fontra-authorization-token";
pub const LOGIN_FAILED_COOKIE: &str = "fontra-authorization-failed";

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HIDDEN_CLASS: &str = "hidden";

/// Cookie keys the presenter reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieNames {
    pub username: String,
    pub token: String,
    pub login_failed: String,
}

impl Default for CookieNames {
    fn default() -> Self {
        Self {
            username: USERNAME_COOKIE.to_owned(),
            token: TOKEN_COOKIE.to_owned(),
            login_failed: LOGIN_FAILED_COOKIE.to_owned(),
        }
    }
}

/// IDs of the elements the landing page markup must provide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub login_form_container: String,
    pub logout_form_container: String,
    pub logout_button: String,
    pub login_failure_message: String,
    pub username_input: String,
    pub login_form: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            login_form_container: "login-form-container".to_owned(),
            logout_form_container: "logout-form-container".to_owned(),
            logout_button: "logout-button".to_owned(),
            login_failure_message: "login-failure-message".to_owned(),
            username_input: "login-username".to_owned(),
            login_form: "login-form".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingConfig {
    pub cookies: CookieNames,
    pub elements: ElementIds,
    /// CSS class toggled to hide an element.
    pub hidden_class: String,
    /// Form action prefix; the page's query string and fragment are appended.
    pub login_path: String,
    /// Exact value of the failure cookie that reveals the failure message.
    pub login_failed_flag: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            cookies: CookieNames::default(),
            elements: ElementIds::default(),
            hidden_class: DEFAULT_HIDDEN_CLASS.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            login_failed_flag: "true".to_owned(),
        }
    }
}
