//! Main application module implementing the Cosmic Application trait
//!
//! This is the central hub of the application, implementing libCosmic's
//! Application trait for window management and message routing.

use crate::config::{Config, ThemePreference, APP_ID};
use crate::disclosure::{DisclosureMenu, Effect, MenuEvent};
use crate::error::{AppResult, ConfigResult};
use crate::events::locale_menu_subscription;
use crate::message::{Message, NavigationMessage};
use crate::routing::Route;
use crate::state::{AppState, StatusLevel};
use crate::ui::{self, locale_selector, SelectorProps};

use cosmic::app::{Core, Task};
use cosmic::iced::Subscription;
use cosmic::widget::{button, Id};
use cosmic::{Application, ApplicationExt, Element};

/// Cosmic Folio Application
pub struct CosmicFolio {
    /// libCosmic core reference
    core: Core,

    /// Application state
    pub state: AppState,

    /// Effective configuration (stored values plus command line overrides)
    pub config: Config,
}

/// Application flags passed during initialization
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale to start in
    pub locale: Option<String>,

    /// Replacement list of site locales
    pub locales: Option<Vec<String>>,

    /// Page to start on
    pub path: Option<String>,

    /// Theme override
    pub theme: Option<ThemePreference>,
}

impl Flags {
    /// Apply command line overrides on top of the stored configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(locales) = &self.locales {
            config.site.locales = locales.clone();
            if !locales.contains(&config.site.default_locale) {
                if let Some(first) = locales.first() {
                    config.site.default_locale = first.clone();
                }
            }
        }
        if let Some(locale) = &self.locale {
            config.site.preferred_locale = Some(locale.clone());
        }
        if let Some(path) = &self.path {
            config.site.start_path = path.clone();
        }
        if let Some(theme) = self.theme {
            config.ui.theme = theme;
        }
    }
}

/// Build the initial state from a configuration
fn build_state(config: &Config) -> AppResult<AppState> {
    let locales = config.site.locale_tags()?;
    let default_locale = config.site.default_locale_tag()?;
    let start_locale = config.site.start_locale()?;
    let route = Route::parse(&config.site.start_path, start_locale)?;

    Ok(AppState::new(locales, default_locale, route))
}

/// Work the application does for the menu's effects, in effect order
#[derive(Debug, Clone, PartialEq, Eq)]
enum MenuFollowup {
    SwitchLocale(String),
    /// Move real keyboard focus to the widget with this id
    FocusWidget(String),
}

fn menu_followups(menu: &DisclosureMenu, effects: Vec<Effect>) -> Vec<MenuFollowup> {
    effects
        .into_iter()
        .filter_map(|effect| match effect {
            Effect::Select(id) => Some(MenuFollowup::SwitchLocale(id)),
            Effect::Focus(Some(target)) => Some(MenuFollowup::FocusWidget(menu.widget_id(&target))),
            // Focus left the widget by Tab or a press elsewhere; the toolkit already moved it
            Effect::Focus(None) => None,
            Effect::Opened | Effect::Closed => None,
        })
        .collect()
}

/// Stored configuration with the picked locale recorded, or `None` when
/// the stored file could not be read and must not be overwritten
fn with_preferred_locale(stored: ConfigResult<Config>, id: String) -> Option<Config> {
    match stored {
        Ok(mut config) => {
            config.site.preferred_locale = Some(id);
            Some(config)
        }
        Err(e) => {
            log::warn!("Not saving locale preference, stored configuration is unreadable: {}", e);
            None
        }
    }
}

impl Application for CosmicFolio {
    /// Executor for async tasks
    type Executor = cosmic::executor::Default;

    /// Application flags
    type Flags = Flags;

    /// Application message type
    type Message = Message;

    /// Application ID following reverse-DNS convention
    const APP_ID: &'static str = APP_ID;

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    /// Initialize the application
    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Self::Message>) {
        let mut startup_issue = None;

        let mut config = match Config::load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load configuration: {}", e);
                startup_issue = Some(e.user_message());
                Config::default()
            }
        };
        flags.apply(&mut config);

        let state = match build_state(&config) {
            Ok(state) => state,
            Err(e) => {
                log::error!("Invalid startup options: {}", e);
                startup_issue = Some(e.user_message());
                config = Config::default();
                build_state(&config).expect("default configuration is valid")
            }
        };

        let mut app = Self {
            core,
            state,
            config,
        };

        if let Some(issue) = startup_issue {
            app.state.set_status(issue, StatusLevel::Warning);
        }

        app.update_header_title();

        (app, Task::none())
    }

    /// Handle incoming messages
    fn update(&mut self, message: Self::Message) -> Task<Self::Message> {
        match message {
            Message::LocaleMenu(event) => self.handle_menu_event(event),
            Message::Navigation(msg) => self.handle_navigation_message(msg),
        }
    }

    /// Render the application view
    fn view(&self) -> Element<'_, Self::Message> {
        ui::view(&self.state)
    }

    /// Window events reach the locale menu only while it is mounted
    fn subscription(&self) -> Subscription<Self::Message> {
        if self.state.locale_menu.is_mounted() {
            locale_menu_subscription()
        } else {
            Subscription::none()
        }
    }

    /// Elements to show at the end of the header bar (language switcher)
    fn header_end(&self) -> Vec<Element<'_, Self::Message>> {
        locale_selector::view(&self.state.locale_menu, self.selector_props())
            .into_iter()
            .collect()
    }
}

impl CosmicFolio {
    /// Presentation inputs for the locale selector
    fn selector_props(&self) -> SelectorProps {
        let locale = self.state.locale();
        SelectorProps {
            active_label: locale.short_label(),
            trigger_title: crate::fl!(locale, "header.language"),
            expanded_hint: crate::fl!(locale, "header.languageExpanded"),
            collapsed_hint: crate::fl!(locale, "header.languageCollapsed"),
            dark_mode: self.config.ui.theme.is_dark(cosmic::theme::is_dark()),
        }
    }

    /// Update header title based on current page
    fn update_header_title(&mut self) {
        let locale = self.state.locale();
        let page = if self.state.route.is_blog() {
            crate::fl!(locale, "nav.blog")
        } else {
            crate::fl!(locale, "nav.home")
        };
        self.set_header_title(format!("{} - Cosmic Folio", page));
    }

    /// Feed an event to the locale menu and apply its effects in order
    fn handle_menu_event(&mut self, event: MenuEvent) -> Task<Message> {
        let effects = self.state.locale_menu.update(event);
        let followups = menu_followups(&self.state.locale_menu, effects);

        // Tab and Shift+Tab belong to the menu while it is open
        self.core.set_keyboard_nav(!self.state.locale_menu.is_open());

        let mut tasks = Vec::new();
        for followup in followups {
            match followup {
                MenuFollowup::SwitchLocale(id) => {
                    tasks.push(self.handle_navigation_message(NavigationMessage::SwitchLocale(id)));
                }
                MenuFollowup::FocusWidget(id) => {
                    log::trace!("locale menu focus: {}", id);
                    tasks.push(button::focus(Id::new(id)));
                }
            }
        }

        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Handle navigation messages
    fn handle_navigation_message(&mut self, msg: NavigationMessage) -> Task<Message> {
        match msg {
            NavigationMessage::Open(path) => {
                if let Err(e) = self.state.open_path(&path) {
                    log::error!("Failed to open {}: {}", path, e);
                    self.state.set_status(e.user_message(), StatusLevel::Error);
                } else {
                    self.state.clear_status();
                    self.update_header_title();
                }
                Task::none()
            }

            NavigationMessage::SwitchLocale(id) => {
                match self.state.switch_locale(&id) {
                    Ok(()) => {
                        log::info!("Switched locale to {} ({})", id, self.state.href());
                        self.state.clear_status();
                        self.config.site.preferred_locale = Some(id.clone());
                        self.remember_locale(id);
                        self.update_header_title();
                    }
                    Err(e) => {
                        log::error!("Failed to switch locale to {}: {}", id, e);
                        self.state.set_status(e.user_message(), StatusLevel::Error);
                    }
                }
                Task::none()
            }
        }
    }

    /// Persist the chosen locale without persisting command line overrides
    fn remember_locale(&mut self, id: String) {
        let Some(stored) = with_preferred_locale(Config::load(), id) else {
            return;
        };
        if let Err(e) = stored.save() {
            log::warn!("Failed to save locale preference: {}", e);
            self.state.set_status(e.user_message(), StatusLevel::Warning);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disclosure::{FocusTarget, MenuKey};
    use crate::error::ConfigError;

    #[test]
    fn test_flags_override_locales_and_default() {
        let mut config = Config::default();
        let flags = Flags {
            locales: Some(vec!["lt".to_string(), "en-US".to_string()]),
            locale: Some("lt".to_string()),
            path: Some("/blog".to_string()),
            theme: Some(ThemePreference::Dark),
        };
        flags.apply(&mut config);

        assert_eq!(config.site.default_locale, "en-US");
        assert_eq!(config.site.preferred_locale.as_deref(), Some("lt"));
        assert_eq!(config.ui.theme, ThemePreference::Dark);

        let state = build_state(&config).unwrap();
        assert_eq!(state.href(), "/lt/blog");
    }

    #[test]
    fn test_flags_replace_default_missing_from_locales() {
        let mut config = Config::default();
        let flags = Flags {
            locales: Some(vec!["de".to_string(), "fr".to_string()]),
            ..Default::default()
        };
        flags.apply(&mut config);
        assert_eq!(config.site.default_locale, "de");
        assert!(build_state(&config).is_ok());
    }

    #[test]
    fn test_build_state_rejects_relative_start_path() {
        let mut config = Config::default();
        config.site.start_path = "blog".to_string();
        assert!(build_state(&config).is_err());
    }

    #[test]
    fn test_unreadable_config_is_not_overwritten() {
        let broken = serde_json::from_str::<Config>("{ not json").map_err(ConfigError::from);
        assert!(with_preferred_locale(broken, "fr".to_string()).is_none());
    }

    #[test]
    fn test_preference_keeps_stored_settings() {
        let mut stored = Config::default();
        stored.site.locales = vec!["lt".to_string(), "en-US".to_string()];
        stored.ui.theme = ThemePreference::Dark;

        let updated = with_preferred_locale(Ok(stored), "lt".to_string()).unwrap();
        assert_eq!(updated.site.preferred_locale.as_deref(), Some("lt"));
        assert_eq!(updated.site.locales, vec!["lt", "en-US"]);
        assert_eq!(updated.ui.theme, ThemePreference::Dark);
    }

    #[test]
    fn test_effects_become_focus_requests_in_order() {
        let mut state = build_state(&Config::default()).unwrap();
        let menu = &mut state.locale_menu;
        let trigger = menu.widget_id(&FocusTarget::Trigger);

        let effects = menu.update(MenuEvent::TriggerActivated);
        assert_eq!(
            menu_followups(menu, effects),
            vec![MenuFollowup::FocusWidget(trigger.clone())]
        );

        let effects = menu.update(MenuEvent::Key(MenuKey::ArrowDown));
        let fr = menu.widget_id(&FocusTarget::Item("fr".to_string()));
        assert_eq!(menu_followups(menu, effects), vec![MenuFollowup::FocusWidget(fr)]);

        let effects = menu.update(MenuEvent::OptionActivated("fr".to_string()));
        assert_eq!(
            menu_followups(menu, effects),
            vec![
                MenuFollowup::SwitchLocale("fr".to_string()),
                MenuFollowup::FocusWidget(trigger),
            ]
        );
    }

    #[test]
    fn test_focus_leaving_widget_requests_nothing() {
        let mut state = build_state(&Config::default()).unwrap();
        let menu = &mut state.locale_menu;
        menu.update(MenuEvent::TriggerActivated);
        menu.update(MenuEvent::TriggerActivated);

        let effects = menu.update(MenuEvent::Key(MenuKey::Tab));
        assert_eq!(effects, vec![Effect::Focus(None)]);
        assert!(menu_followups(menu, effects).is_empty());
    }

    #[test]
    fn test_default_config_builds_state() {
        let state = build_state(&Config::default()).unwrap();
        assert_eq!(state.href(), "/");
        assert!(state.locale_menu.is_mounted());
    }
}
