//! Root application state container
//!
//! Contains the central state for the entire application: the route being
//! shown, the site's locales and the locale menu.

use crate::config::LOCALE_MENU_ID;
use crate::disclosure::{DisclosureMenu, MenuOption, OptionList};
use crate::error::{AppResult, LocaleError};
use crate::i18n::LocaleTag;
use crate::routing::Route;

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Page currently shown
    pub route: Route,

    /// Site locales in menu order
    locales: Vec<LocaleTag>,

    /// Locale served without a path prefix
    default_locale: LocaleTag,

    /// Language switcher
    pub locale_menu: DisclosureMenu,

    /// Status line message
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Create the state and mount the locale menu for `route`
    pub fn new(locales: Vec<LocaleTag>, default_locale: LocaleTag, route: Route) -> Self {
        let mut state = Self {
            route,
            locales,
            default_locale,
            locale_menu: DisclosureMenu::new(LOCALE_MENU_ID),
            status_message: None,
        };
        state.sync_locale_menu();
        state
    }

    /// Locale the current page is shown in
    pub fn locale(&self) -> &LocaleTag {
        self.route.locale()
    }

    /// Entries for the locale menu, the current locale marked active
    pub fn locale_options(&self) -> OptionList {
        let entries = self
            .locales
            .iter()
            .map(|tag| MenuOption::new(tag.as_str(), tag.display_name()))
            .collect();
        OptionList::new(entries, self.locale().as_str())
    }

    /// Show the current page in `tag`, keeping path and query
    pub fn switch_locale(&mut self, tag: &str) -> AppResult<()> {
        let tag = LocaleTag::parse(tag)?;
        if !self.locales.contains(&tag) {
            return Err(LocaleError::NotAvailable {
                tag: tag.to_string(),
            }
            .into());
        }
        self.route = self.route.with_locale(tag);
        self.sync_locale_menu();
        Ok(())
    }

    /// Show another page in the current locale
    pub fn open_path(&mut self, as_path: &str) -> AppResult<()> {
        self.route = self.route.with_path(as_path)?;
        Ok(())
    }

    /// Link target of the current page
    pub fn href(&self) -> String {
        self.route.href(&self.default_locale)
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            level,
        });
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    fn sync_locale_menu(&mut self) {
        let options = self.locale_options();
        self.locale_menu.sync(options);
    }
}

/// Status message for the status line
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message text
    pub text: String,

    /// Message level (warning, error)
    pub level: StatusLevel,
}

/// Status message level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Warning,
    Error,
}
