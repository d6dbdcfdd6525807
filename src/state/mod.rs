//! State management module for Cosmic Folio
//!
//! - `app_state`: root application state (route, locales, locale menu, status)

mod app_state;

pub use app_state::*;
