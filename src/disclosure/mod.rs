//! Accessible disclosure menu
//!
//! A headless controller for a trigger button plus an options list:
//! - `state`: open/closed view-state
//! - `options`: selectable entries and the active one
//! - `navigation`: roving focus with wrap-around
//! - `focus`: focus containment while open
//! - `watcher`: dismissal on presses outside the widget
//! - `keys`: key mapping from window events
//! - `aria`: accessibility contract of a render
//!
//! The controller owns interaction state only. Rendering lives in
//! `crate::ui::locale_selector`.

pub mod aria;
mod controller;
mod focus;
mod keys;
pub mod navigation;
mod options;
mod state;
mod watcher;

pub use controller::{DisclosureMenu, Effect, MenuEvent};
pub use focus::FocusTarget;
pub use keys::MenuKey;
pub use options::{MenuOption, OptionList};
