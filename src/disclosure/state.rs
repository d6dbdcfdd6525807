//! Open/closed view-state of a disclosure menu

/// Whether the options list is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    /// List hidden (initial and terminal state)
    #[default]
    Closed,
    /// List shown, focus contained
    Open,
}

impl MenuState {
    /// Check if the menu is open
    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}
