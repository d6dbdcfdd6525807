//! Window-level input for the locale menu
//!
//! The outside watcher needs every pointer press in the window, and the
//! keyboard handler needs the key presses no widget handled. Both come from
//! a raw event listener that the application only subscribes to while the
//! menu is mounted.

use cosmic::iced::event::Status;
use cosmic::iced::keyboard::{Key, Modifiers};
use cosmic::iced::{keyboard, mouse, Event, Subscription};
use cosmic::iced_futures::event::listen_raw;

use crate::disclosure::{MenuEvent, MenuKey};
use crate::message::Message;

/// Translate a raw window event into a menu event
///
/// Pointer presses count whether or not a widget captured them: a press
/// on another button is still a press outside the menu. Key presses a
/// focused button already turned into a press message are dropped.
fn menu_event(event: &Event, status: Status) -> Option<MenuEvent> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(MenuEvent::PointerDown),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            key_event(key, *modifiers, status)
        }
        _ => None,
    }
}

fn key_event(key: &Key, modifiers: Modifiers, status: Status) -> Option<MenuEvent> {
    if status != Status::Ignored {
        return None;
    }
    MenuKey::from_key(key, modifiers).map(MenuEvent::Key)
}

/// Pointer and keyboard subscription feeding the locale menu
pub fn locale_menu_subscription() -> Subscription<Message> {
    listen_raw(|event, status, _window| menu_event(&event, status).map(Message::LocaleMenu))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmic::iced::keyboard::key::Named;

    #[test]
    fn test_pointer_press_maps_to_pointer_down() {
        let event = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));
        assert_eq!(menu_event(&event, Status::Ignored), Some(MenuEvent::PointerDown));
        assert_eq!(
            menu_event(&event, Status::Captured),
            Some(MenuEvent::PointerDown)
        );
    }

    #[test]
    fn test_cursor_motion_is_ignored() {
        let event = Event::Mouse(mouse::Event::CursorLeft);
        assert_eq!(menu_event(&event, Status::Ignored), None);
    }

    #[test]
    fn test_uncaptured_key_reaches_menu() {
        assert_eq!(
            key_event(&Key::Named(Named::ArrowDown), Modifiers::empty(), Status::Ignored),
            Some(MenuEvent::Key(MenuKey::ArrowDown))
        );
    }

    #[test]
    fn test_captured_key_is_not_handled_twice() {
        // A focused button turns Enter into its own press message
        let enter = Key::Named(Named::Enter);
        assert_eq!(key_event(&enter, Modifiers::empty(), Status::Captured), None);
    }
}
