//! Locale selector widget
//!
//! Renders a [`DisclosureMenu`] as a trigger button showing the active
//! language and, while open, the list of other languages below it. The
//! list is left out of the tree entirely while closed so its buttons
//! cannot be reached.

use cosmic::iced::widget::mouse_area;
use cosmic::iced::{Alignment, Color, Length};
use cosmic::widget::{button, container, text, tooltip, Column, Id, Row};
use cosmic::Element;

use crate::disclosure::{DisclosureMenu, FocusTarget, MenuEvent};
use crate::message::Message;

/// Width of the options list in pixels
const LIST_WIDTH: f32 = 160.0;

/// Caller-provided presentation inputs
#[derive(Debug, Clone)]
pub struct SelectorProps {
    /// Label on the trigger, derived from the active locale
    pub active_label: String,
    /// Tooltip and accessible name of the trigger
    pub trigger_title: String,
    /// Accessible description of the trigger while open
    pub expanded_hint: String,
    /// Accessible description of the trigger while closed
    pub collapsed_hint: String,
    /// Whether the desktop uses a dark theme
    pub dark_mode: bool,
}

impl SelectorProps {
    /// Accessible description announcing whether the list is shown
    pub fn state_hint(&self, expanded: bool) -> &str {
        if expanded {
            &self.expanded_hint
        } else {
            &self.collapsed_hint
        }
    }
}

/// Tint of the open/closed indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconTint {
    White,
    Secondary,
}

impl IconTint {
    pub fn for_theme(dark_mode: bool) -> Self {
        if dark_mode {
            IconTint::White
        } else {
            IconTint::Secondary
        }
    }

    pub fn color(self) -> Color {
        match self {
            IconTint::White => Color::WHITE,
            IconTint::Secondary => Color::from_rgb(0.42, 0.45, 0.50),
        }
    }
}

/// Indicator glyph pointing the way the list will move
pub fn chevron(open: bool) -> &'static str {
    if open {
        "▴"
    } else {
        "▾"
    }
}

/// Build the selector, or nothing when there is nothing to switch to
pub fn view<'a>(menu: &'a DisclosureMenu, props: SelectorProps) -> Option<Element<'a, Message>> {
    let aria = menu.aria(&props.trigger_title)?;
    let focus = menu.focus();
    let expanded = aria.trigger.expanded;

    let indicator = text(chevron(expanded))
        .size(14)
        .class(cosmic::theme::Text::Color(
            IconTint::for_theme(props.dark_mode).color(),
        ));

    let trigger_content = Row::new()
        .push(text(props.active_label.clone()).size(14))
        .push(indicator)
        .spacing(4)
        .align_y(Alignment::Center);

    let trigger = button::custom(trigger_content)
        .id(Id::new(aria.trigger.widget_id))
        .name(aria.trigger.name.clone())
        .description(props.state_hint(expanded).to_string())
        .class(if focus == Some(&FocusTarget::Trigger) {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Standard
        })
        .on_press(Message::LocaleMenu(MenuEvent::TriggerActivated))
        .padding([4, 8]);

    let mut root = Column::new()
        .push(tooltip(
            trigger,
            text(aria.trigger.name),
            tooltip::Position::Bottom,
        ))
        .spacing(4);

    if expanded {
        let mut list = Column::new().spacing(2).width(Length::Fixed(LIST_WIDTH));

        for item in aria.items {
            let is_focused = focus.and_then(FocusTarget::item_id) == Some(item.id.as_str());

            let option = button::custom(text(item.label.clone()).size(14))
                .id(Id::new(item.widget_id))
                .name(item.label)
                .class(if is_focused {
                    cosmic::theme::Button::Suggested
                } else {
                    cosmic::theme::Button::Text
                })
                .on_press(Message::LocaleMenu(MenuEvent::OptionActivated(item.id)))
                .width(Length::Fill)
                .padding([6, 8]);

            list = list.push(container(option).width(Length::Fill));
        }

        root = root.push(
            container(list)
                .padding(4)
                .class(cosmic::theme::Container::Card),
        );
    }

    let region = mouse_area(root)
        .on_enter(Message::LocaleMenu(MenuEvent::PointerEntered))
        .on_exit(Message::LocaleMenu(MenuEvent::PointerLeft));

    Some(region.into())
}
