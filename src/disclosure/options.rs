//! Selectable entries of a disclosure menu
//!
//! The list is read-only input to the controller. Entry order is both the
//! display order and the keyboard navigation order.

/// A single selectable entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Identifier passed to the selection handler
    pub id: String,
    /// Text shown for the entry
    pub label: String,
}

impl MenuOption {
    /// Create a new option
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// All entries plus the currently active one
///
/// The active entry is never rendered: there is no point switching to
/// what is already selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionList {
    entries: Vec<MenuOption>,
    active: Option<String>,
}

impl OptionList {
    /// Create an option list with the given active entry id
    pub fn new(entries: Vec<MenuOption>, active: impl Into<String>) -> Self {
        Self {
            entries,
            active: Some(active.into()),
        }
    }

    /// Entries that get rendered, in display order
    pub fn visible(&self) -> impl Iterator<Item = &MenuOption> {
        let active = self.active.as_deref();
        self.entries
            .iter()
            .filter(move |entry| Some(entry.id.as_str()) != active)
    }

    /// Ids of the rendered entries, in display order
    pub fn visible_ids(&self) -> Vec<&str> {
        self.visible().map(|entry| entry.id.as_str()).collect()
    }

    /// Look up a rendered entry by id
    pub fn find_visible(&self, id: &str) -> Option<&MenuOption> {
        self.visible().find(|entry| entry.id == id)
    }

    /// Whether the widget has anything to offer at all
    pub fn is_renderable(&self) -> bool {
        self.entries.len() >= 2
    }
}
