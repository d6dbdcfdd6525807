//! Disclosure menu controller
//!
//! Owns the open/closed state, the focus position inside the widget, the
//! focus boundary and the outside watcher. Callers feed it [`MenuEvent`]s
//! and act on the returned [`Effect`]s, in order.

use super::aria::{ItemAria, MenuAria, TriggerAria};
use super::focus::{FocusScope, FocusTarget};
use super::keys::MenuKey;
use super::navigation::{self, Direction};
use super::options::OptionList;
use super::state::MenuState;
use super::watcher::{Hit, OutsideWatcher};
use uuid::Uuid;

/// Input to the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// The trigger button was activated
    ///
    /// Buttons publish their press for a pointer click and for Space or
    /// Enter while they hold keyboard focus, so this covers both.
    TriggerActivated,
    /// A rendered option button was activated, by click or key
    OptionActivated(String),
    /// Key press no widget captured
    Key(MenuKey),
    /// Pointer entered the widget root
    PointerEntered,
    /// Pointer left the widget root
    PointerLeft,
    /// Pointer button pressed anywhere in the window
    PointerDown,
}

/// Output of the controller, to be applied in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// An option was activated; fired before the menu closes
    Select(String),
    Opened,
    Closed,
    /// Keyboard focus moved; `None` means it left the widget
    Focus(Option<FocusTarget>),
}

/// Whether a key press continues to the list container handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Propagation {
    Stop,
    Continue,
}

/// Accessible disclosure menu
#[derive(Debug)]
pub struct DisclosureMenu {
    list_id: String,
    options: OptionList,
    state: MenuState,
    focus: Option<FocusTarget>,
    scope: FocusScope,
    watcher: OutsideWatcher,
}

impl DisclosureMenu {
    /// Create an unmounted menu; `id_prefix` names its options list
    pub fn new(id_prefix: &str) -> Self {
        Self {
            list_id: format!("{}-{}", id_prefix, Uuid::new_v4().simple()),
            options: OptionList::default(),
            state: MenuState::Closed,
            focus: None,
            scope: FocusScope::default(),
            watcher: OutsideWatcher::default(),
        }
    }

    /// Replace the option list, mounting or unmounting the widget
    ///
    /// The widget is mounted while the list has at least two entries.
    /// Unmounting closes the menu and releases the outside watcher.
    pub fn sync(&mut self, options: OptionList) {
        self.options = options;

        if self.options.is_renderable() {
            self.watcher.attach();
        } else {
            if self.state.is_open() {
                log::debug!("menu {} unmounted while open", self.list_id);
            }
            self.state = MenuState::Closed;
            self.focus = None;
            self.scope.release();
            self.watcher.detach();
        }
    }

    /// Whether the widget renders anything
    ///
    /// The window-level listener is only needed while this holds.
    pub fn is_mounted(&self) -> bool {
        self.watcher.is_attached()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Element currently holding keyboard focus inside the widget
    pub fn focus(&self) -> Option<&FocusTarget> {
        self.focus.as_ref()
    }

    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Id of the options list, unique per instance
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Widget id of a focusable element, used for rendering and focus requests
    pub fn widget_id(&self, target: &FocusTarget) -> String {
        match target {
            FocusTarget::Trigger => format!("{}-trigger", self.list_id),
            FocusTarget::Item(id) => format!("{}-item-{}", self.list_id, id),
        }
    }

    /// Handle one event
    pub fn update(&mut self, event: MenuEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        if !self.is_mounted() {
            return effects;
        }

        match event {
            MenuEvent::TriggerActivated => {
                self.move_focus(Some(FocusTarget::Trigger), &mut effects);
                self.toggle(&mut effects);
            }
            MenuEvent::OptionActivated(id) => self.activate(&id, &mut effects),
            MenuEvent::Key(key) => self.handle_key(key, &mut effects),
            MenuEvent::PointerEntered => self.watcher.pointer_entered(),
            MenuEvent::PointerLeft => self.watcher.pointer_left(),
            MenuEvent::PointerDown => {
                if self.watcher.pointer_down() == Some(Hit::Outside) {
                    if self.state.is_open() {
                        log::debug!("menu {} dismissed by outside press", self.list_id);
                        self.close(&mut effects);
                    } else {
                        self.move_focus(None, &mut effects);
                    }
                }
            }
        }

        effects
    }

    /// Accessibility contract for the current render, `None` when unmounted
    pub fn aria(&self, trigger_name: &str) -> Option<MenuAria> {
        if !self.is_mounted() {
            return None;
        }

        let items = if self.state.is_open() {
            self.options
                .visible()
                .map(|option| ItemAria {
                    id: option.id.clone(),
                    widget_id: self.widget_id(&FocusTarget::Item(option.id.clone())),
                    label: option.label.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(MenuAria {
            trigger: TriggerAria {
                widget_id: self.widget_id(&FocusTarget::Trigger),
                name: trigger_name.to_string(),
                expanded: self.state.is_open(),
            },
            items,
        })
    }

    fn handle_key(&mut self, key: MenuKey, effects: &mut Vec<Effect>) {
        let Some(focus) = self.focus.clone() else {
            return;
        };

        match key {
            MenuKey::Tab | MenuKey::BackTab => {
                let rendered = self.rendered_ids();
                let backwards = key == MenuKey::BackTab;
                let target = self.scope.step(Some(&focus), &rendered, backwards);
                // An inactive scope lets Tab carry focus out of the widget
                self.move_focus(target, effects);
            }
            _ => match focus {
                FocusTarget::Trigger => self.handle_trigger_key(key, effects),
                FocusTarget::Item(id) => {
                    if self.handle_item_key(&id, key, effects) == Propagation::Continue {
                        self.handle_list_key(key, effects);
                    }
                }
            },
        }
    }

    fn handle_trigger_key(&mut self, key: MenuKey, effects: &mut Vec<Effect>) {
        match key {
            _ if key.is_activation() => self.toggle(effects),
            MenuKey::Escape => {
                if self.state.is_open() {
                    self.close(effects);
                }
            }
            MenuKey::ArrowDown | MenuKey::ArrowUp if self.state.is_open() => {
                let rendered = self.rendered_ids();
                let target = if key == MenuKey::ArrowDown {
                    rendered.first()
                } else {
                    rendered.last()
                };
                if let Some(id) = target.map(|id| id.to_string()) {
                    self.move_focus(Some(FocusTarget::Item(id)), effects);
                }
            }
            _ => {}
        }
    }

    fn handle_item_key(
        &mut self,
        id: &str,
        key: MenuKey,
        effects: &mut Vec<Effect>,
    ) -> Propagation {
        match key {
            _ if key.is_activation() => {
                self.activate(id, effects);
                Propagation::Stop
            }
            MenuKey::ArrowUp | MenuKey::ArrowDown => {
                let direction = if key == MenuKey::ArrowUp {
                    Direction::Up
                } else {
                    Direction::Down
                };
                let target = {
                    let rendered = self.rendered_ids();
                    navigation::step(&rendered, id, direction).map(str::to_string)
                };
                match target {
                    Some(target) => self.move_focus(Some(FocusTarget::Item(target)), effects),
                    None => log::trace!("menu {}: {} is no longer rendered", self.list_id, id),
                }
                Propagation::Stop
            }
            _ => Propagation::Continue,
        }
    }

    fn handle_list_key(&mut self, key: MenuKey, effects: &mut Vec<Effect>) {
        match key {
            _ if key.is_activation() => self.toggle(effects),
            MenuKey::Escape => {
                if self.state.is_open() {
                    self.close(effects);
                }
            }
            _ => {}
        }
    }

    fn activate(&mut self, id: &str, effects: &mut Vec<Effect>) {
        if !self.state.is_open() || self.options.find_visible(id).is_none() {
            return;
        }
        log::debug!("menu {}: selected {}", self.list_id, id);
        effects.push(Effect::Select(id.to_string()));
        self.close(effects);
    }

    fn toggle(&mut self, effects: &mut Vec<Effect>) {
        if self.state.is_open() {
            self.close(effects);
        } else {
            self.open(effects);
        }
    }

    fn open(&mut self, effects: &mut Vec<Effect>) {
        self.state = MenuState::Open;
        self.scope.activate();
        log::debug!("menu {} opened", self.list_id);
        effects.push(Effect::Opened);
    }

    fn close(&mut self, effects: &mut Vec<Effect>) {
        self.state = MenuState::Closed;
        log::debug!("menu {} closed", self.list_id);
        effects.push(Effect::Closed);
        if let Some(restore) = self.scope.release() {
            self.move_focus(Some(restore), effects);
        }
    }

    fn move_focus(&mut self, target: Option<FocusTarget>, effects: &mut Vec<Effect>) {
        if self.focus != target {
            self.focus = target.clone();
            effects.push(Effect::Focus(target));
        }
    }

    fn rendered_ids(&self) -> Vec<&str> {
        if self.state.is_open() {
            self.options.visible_ids()
        } else {
            Vec::new()
        }
    }
}
