//! Landing-page bootstrap and WASM entry point.
//!
//! `start_landing_page` runs the authentication callback once and reports
//! the outcome. In the browser, `start` wires it to the live document.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use crate::dom::DomError;

/// Run `authenticate` once and log whether a session cookie was found.
///
/// # Errors
///
/// Propagates the callback's error after logging it.
pub fn start_landing_page<F>(authenticate: F) -> Result<bool, DomError>
where
    F: FnOnce() -> Result<bool, DomError>,
{
    match authenticate() {
        Ok(true) => {
            log::info!("landing page: session cookie present");
            Ok(true)
        }
        Ok(false) => {
            log::info!("landing page: no session, showing login form");
            Ok(false)
        }
        Err(e) => {
            log::error!("landing page setup failed: {e}");
            Err(e)
        }
    }
}

/// WASM entry point.
///
/// # Errors
///
/// A setup error is thrown to the page as a JS exception.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    use crate::config::LandingConfig;
    use crate::dom::BrowserDom;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = LandingConfig::default();
    start_landing_page(|| {
        let mut dom = BrowserDom::from_window()?;
        super::landing::authenticate(&mut dom, &config)
    })
    .map(|_| ())
    .map_err(|e| wasm_bindgen::JsValue::from_str(&e.to_string()))
}
