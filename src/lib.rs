//! # fontra-landing
//!
//! WASM view adapter for the project-manager landing page. Reads the session
//! cookies set by the server's `/login` handler and shows either the login
//! form or the logout form accordingly.
//!
//! Browser bindings live behind the `hydrate` feature. Without it the crate
//! builds natively so the presenter can be driven through an in-memory DOM.

pub mod config;
pub mod dom;
pub mod pages;
pub mod state;
pub mod util;

pub use config::LandingConfig;
pub use dom::{DomError, LandingDom};
pub use pages::landing::authenticate;
pub use pages::startup::start_landing_page;
