//! Session state as seen through the landing-page cookies.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server's `/login` handler sets the username cookie on every attempt,
//! the token cookie on success and a short-lived failure cookie otherwise.
//! Nothing here validates the token; its presence is the whole signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::collections::HashMap;

use crate::config::LandingConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookieAuth {
    pub username: Option<String>,
    pub token: Option<String>,
    pub login_failed: bool,
}

impl CookieAuth {
    /// Read the session cookies. Empty values count as absent, which is how
    /// a deleted cookie still reads before the browser drops it.
    pub fn from_cookies(cookies: &HashMap<String, String>, config: &LandingConfig) -> Self {
        let non_empty = |name: &str| cookies.get(name).filter(|v| !v.is_empty()).cloned();
        Self {
            username: non_empty(config.cookies.username.as_str()),
            token: non_empty(config.cookies.token.as_str()),
            login_failed: cookies
                .get(&config.cookies.login_failed)
                .is_some_and(|v| *v == config.login_failed_flag),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Logout button label, only when both a session and a username exist.
    pub fn logout_label(&self) -> Option<String> {
        match (&self.token, &self.username) {
            (Some(_), Some(username)) => Some(format!("Log out {username}")),
            _ => None,
        }
    }
}
