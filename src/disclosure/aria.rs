//! Accessibility contract of the rendered menu
//!
//! What the view hands to the accessibility tree for one render: widget
//! ids (also the targets of focus requests), accessible names and the
//! expanded state. The options are only listed while the menu is open.

/// Trigger semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerAria {
    /// Widget id of the trigger button
    pub widget_id: String,
    /// Accessible name, also shown as tooltip
    pub name: String,
    pub expanded: bool,
}

/// Semantics of one rendered option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAria {
    /// Option id passed back on activation
    pub id: String,
    /// Widget id of the option button
    pub widget_id: String,
    /// Accessible name and visible text
    pub label: String,
}

/// Full contract for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuAria {
    pub trigger: TriggerAria,
    /// Rendered options, empty while closed
    pub items: Vec<ItemAria>,
}
