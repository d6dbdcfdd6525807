//! Focus containment for an open menu
//!
//! While active, Tab and Shift+Tab cycle through the trigger followed by
//! the rendered options, wrapping at both ends. When the scope is
//! released focus goes back to the element it was entered from, which
//! for a disclosure menu is always the trigger.

/// An element of the widget that can hold keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusTarget {
    /// The button that opens and closes the menu
    Trigger,
    /// A rendered option, by id
    Item(String),
}

impl FocusTarget {
    /// Id of the focused option, if an option is focused
    pub fn item_id(&self) -> Option<&str> {
        match self {
            FocusTarget::Item(id) => Some(id),
            FocusTarget::Trigger => None,
        }
    }
}

/// Toggle-able focus boundary around trigger and options
#[derive(Debug, Clone, Default)]
pub struct FocusScope {
    active: bool,
}

impl FocusScope {
    /// Start containing focus
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stop containing focus and return the restore target
    pub fn release(&mut self) -> Option<FocusTarget> {
        if std::mem::take(&mut self.active) {
            Some(FocusTarget::Trigger)
        } else {
            None
        }
    }

    /// Tab order inside the boundary
    pub fn members(rendered: &[&str]) -> Vec<FocusTarget> {
        std::iter::once(FocusTarget::Trigger)
            .chain(rendered.iter().map(|id| FocusTarget::Item((*id).to_string())))
            .collect()
    }

    /// Where Tab (or Shift+Tab when `backwards`) moves focus
    ///
    /// Inactive scopes do not contain anything and return `None`, meaning
    /// focus follows the normal window order. A focused element that is no
    /// longer rendered re-enters the cycle at the trigger.
    pub fn step(
        &self,
        current: Option<&FocusTarget>,
        rendered: &[&str],
        backwards: bool,
    ) -> Option<FocusTarget> {
        if !self.active {
            return None;
        }
        let members = Self::members(rendered);
        let index = current.and_then(|target| members.iter().position(|m| m == target));
        let len = members.len();
        let next = match (index, backwards) {
            (Some(i), false) => (i + 1) % len,
            (Some(i), true) => (i + len - 1) % len,
            (None, _) => 0,
        };
        members.get(next).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> FocusTarget {
        FocusTarget::Item(id.to_string())
    }

    #[test]
    fn test_inactive_scope_does_not_contain() {
        let scope = FocusScope::default();
        assert_eq!(scope.step(Some(&FocusTarget::Trigger), &["fr", "de"], false), None);
    }

    #[test]
    fn test_tab_cycles_within_scope() {
        let mut scope = FocusScope::default();
        scope.activate();
        let rendered = ["fr", "de"];

        let mut focus = FocusTarget::Trigger;
        let mut visited = Vec::new();
        for _ in 0..6 {
            focus = scope.step(Some(&focus), &rendered, false).unwrap();
            visited.push(focus.clone());
        }
        assert_eq!(
            visited,
            vec![
                item("fr"),
                item("de"),
                FocusTarget::Trigger,
                item("fr"),
                item("de"),
                FocusTarget::Trigger,
            ]
        );
    }

    #[test]
    fn test_shift_tab_wraps_backwards() {
        let mut scope = FocusScope::default();
        scope.activate();
        let rendered = ["fr", "de"];
        assert_eq!(
            scope.step(Some(&FocusTarget::Trigger), &rendered, true),
            Some(item("de"))
        );
        assert_eq!(
            scope.step(Some(&item("fr")), &rendered, true),
            Some(FocusTarget::Trigger)
        );
    }

    #[test]
    fn test_stale_focus_reenters_at_trigger() {
        let mut scope = FocusScope::default();
        scope.activate();
        assert_eq!(
            scope.step(Some(&item("it")), &["fr"], false),
            Some(FocusTarget::Trigger)
        );
        assert_eq!(scope.step(None, &["fr"], false), Some(FocusTarget::Trigger));
    }

    #[test]
    fn test_release_restores_trigger_once() {
        let mut scope = FocusScope::default();
        assert_eq!(scope.release(), None);
        scope.activate();
        assert_eq!(scope.release(), Some(FocusTarget::Trigger));
        assert_eq!(scope.release(), None);
        assert_eq!(scope.step(Some(&FocusTarget::Trigger), &["fr"], false), None);
    }
}
