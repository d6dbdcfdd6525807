//! Keys the disclosure menu reacts to

use cosmic::iced::keyboard::key::Named;
use cosmic::iced::keyboard::{Key, Modifiers};

/// A key press relevant to the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Space,
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    /// Tab without Shift
    Tab,
    /// Shift+Tab
    BackTab,
}

impl MenuKey {
    /// Map a window key press, ignoring everything the menu does not handle
    ///
    /// Presses with Ctrl, Alt or Logo held belong to application shortcuts.
    pub fn from_key(key: &Key, modifiers: Modifiers) -> Option<Self> {
        if modifiers.control() || modifiers.alt() || modifiers.logo() {
            return None;
        }

        match key {
            Key::Named(Named::Space) => Some(MenuKey::Space),
            Key::Named(Named::Enter) => Some(MenuKey::Enter),
            Key::Named(Named::Escape) => Some(MenuKey::Escape),
            Key::Named(Named::ArrowUp) => Some(MenuKey::ArrowUp),
            Key::Named(Named::ArrowDown) => Some(MenuKey::ArrowDown),
            Key::Named(Named::Tab) if modifiers.shift() => Some(MenuKey::BackTab),
            Key::Named(Named::Tab) => Some(MenuKey::Tab),
            Key::Character(c) if c.as_str() == " " => Some(MenuKey::Space),
            _ => None,
        }
    }

    /// Space and Enter both activate the focused element
    pub fn is_activation(self) -> bool {
        matches!(self, MenuKey::Space | MenuKey::Enter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys_map() {
        let none = Modifiers::empty();
        let cases = [
            (Key::Named(Named::Enter), MenuKey::Enter),
            (Key::Named(Named::Escape), MenuKey::Escape),
            (Key::Named(Named::ArrowDown), MenuKey::ArrowDown),
            (Key::Character(" ".into()), MenuKey::Space),
        ];
        for (key, expected) in cases {
            assert_eq!(MenuKey::from_key(&key, none), Some(expected));
        }
    }

    #[test]
    fn test_shift_tab_is_back_tab() {
        assert_eq!(
            MenuKey::from_key(&Key::Named(Named::Tab), Modifiers::SHIFT),
            Some(MenuKey::BackTab)
        );
        assert_eq!(
            MenuKey::from_key(&Key::Named(Named::Tab), Modifiers::empty()),
            Some(MenuKey::Tab)
        );
    }

    #[test]
    fn test_shortcuts_and_other_keys_ignored() {
        assert_eq!(
            MenuKey::from_key(&Key::Named(Named::Enter), Modifiers::CTRL),
            None
        );
        assert_eq!(
            MenuKey::from_key(&Key::Character("a".into()), Modifiers::empty()),
            None
        );
    }

    #[test]
    fn test_activation_keys() {
        assert!(MenuKey::Space.is_activation());
        assert!(MenuKey::Enter.is_activation());
        assert!(!MenuKey::Escape.is_activation());
    }
}
