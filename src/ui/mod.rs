//! UI module for Cosmic Folio
//!
//! - `page`: page body with navigation links
//! - `locale_selector`: the language switcher in the header bar

pub mod locale_selector;
mod page;

use crate::message::Message;
use crate::state::AppState;
use cosmic::Element;

pub use locale_selector::SelectorProps;

/// Build the main application view
pub fn view(state: &AppState) -> Element<'_, Message> {
    page::view(state)
}
