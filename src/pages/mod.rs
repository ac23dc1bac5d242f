//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! `landing` owns the cookie-to-DOM presentation; `startup` owns page-load
//! orchestration and the WASM entry point.

pub mod landing;
pub mod startup;
