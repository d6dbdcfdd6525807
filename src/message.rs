//! Application message types
//!
//! Defines all messages that can be sent to the application's update function.
//! Messages are organized by category for clear handling and routing.

use crate::disclosure::MenuEvent;

/// Main application message enum
#[derive(Debug, Clone)]
pub enum Message {
    /// Locale menu interaction (widget or window events)
    LocaleMenu(MenuEvent),

    /// Page navigation
    Navigation(NavigationMessage),
}

/// Navigation messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationMessage {
    /// Show another page, keeping the locale
    Open(String),

    /// Show the current page in another locale
    SwitchLocale(String),
}
