//! Utility helpers shared across page modules.

pub mod cookies;
