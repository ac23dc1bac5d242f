//! Client-side state derived from the browser.

pub mod auth;
