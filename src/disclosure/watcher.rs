//! Outside-interaction watcher
//!
//! Pointer presses are observed for the whole window while the widget is
//! mounted, whether the menu is open or not. Containment is tracked from
//! the pointer entering and leaving the widget's root region, so it is
//! already settled by the time a press arrives and the trigger's own
//! click can never be mistaken for an outside one.

/// Where a pointer press landed relative to the widget root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Inside,
    Outside,
}

/// Mount-scoped pointer watcher
#[derive(Debug, Default)]
pub struct OutsideWatcher {
    attached: bool,
    pointer_inside: bool,
}

impl OutsideWatcher {
    /// Start observing presses (on mount)
    pub fn attach(&mut self) {
        if !self.attached {
            log::trace!("outside watcher attached");
        }
        self.attached = true;
    }

    /// Stop observing presses (on unmount)
    ///
    /// Containment is forgotten as well: the root region no longer exists.
    pub fn detach(&mut self) {
        if self.attached {
            log::trace!("outside watcher detached");
        }
        self.attached = false;
        self.pointer_inside = false;
    }

    /// Whether presses are being observed
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Pointer moved into the root region
    pub fn pointer_entered(&mut self) {
        if self.attached {
            self.pointer_inside = true;
        }
    }

    /// Pointer moved out of the root region
    pub fn pointer_left(&mut self) {
        self.pointer_inside = false;
    }

    /// Classify a press, or `None` while detached
    pub fn pointer_down(&self) -> Option<Hit> {
        if !self.attached {
            return None;
        }
        Some(if self.pointer_inside {
            Hit::Inside
        } else {
            Hit::Outside
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_watcher_ignores_presses() {
        let mut watcher = OutsideWatcher::default();
        watcher.pointer_entered();
        assert_eq!(watcher.pointer_down(), None);
    }

    #[test]
    fn test_press_classification_follows_containment() {
        let mut watcher = OutsideWatcher::default();
        watcher.attach();
        assert_eq!(watcher.pointer_down(), Some(Hit::Outside));

        watcher.pointer_entered();
        assert_eq!(watcher.pointer_down(), Some(Hit::Inside));

        watcher.pointer_left();
        assert_eq!(watcher.pointer_down(), Some(Hit::Outside));
    }

    #[test]
    fn test_detach_forgets_containment() {
        let mut watcher = OutsideWatcher::default();
        watcher.attach();
        watcher.pointer_entered();
        watcher.detach();
        watcher.attach();
        assert_eq!(watcher.pointer_down(), Some(Hit::Outside));
    }
}
