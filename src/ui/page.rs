//! Page body
//!
//! Shows a translated heading for the current page, where the page lives
//! and links to the other pages. Site content is not rendered.

use cosmic::iced::Length;
use cosmic::widget::{button, container, horizontal_space, text, Column, Row};
use cosmic::Element;

use crate::message::{Message, NavigationMessage};
use crate::routing::{BLOG_PATH, HOME_PATH};
use crate::state::{AppState, StatusLevel};

/// Build the page view
pub fn view(state: &AppState) -> Element<'_, Message> {
    let locale = state.locale();

    let heading = if state.route.is_blog() {
        crate::fl!(locale, "landingPage.latestArticles")
    } else {
        crate::fl!(locale, "landingPage.welcome")
    };

    let nav = Row::new()
        .push(nav_link(crate::fl!(locale, "nav.home"), HOME_PATH, !state.route.is_blog()))
        .push(nav_link(crate::fl!(locale, "nav.blog"), BLOG_PATH, state.route.is_blog()))
        .push(horizontal_space())
        .spacing(8);

    let location = format!("{}: {}", crate::fl!(locale, "page.location"), state.href());

    let mut content = Column::new()
        .push(nav)
        .push(text(heading).size(24))
        .push(text(location).size(12))
        .spacing(12);

    if let Some(status) = &state.status_message {
        let prefix = match status.level {
            StatusLevel::Warning => "⚠ ",
            StatusLevel::Error => "✖ ",
        };
        content = content.push(text(format!("{}{}", prefix, status.text)).size(12));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
        .into()
}

fn nav_link<'a>(label: String, path: &'static str, is_current: bool) -> Element<'a, Message> {
    button::text(label)
        .class(if is_current {
            cosmic::theme::Button::Suggested
        } else {
            cosmic::theme::Button::Text
        })
        .on_press(Message::Navigation(NavigationMessage::Open(path.to_string())))
        .padding([4, 8])
        .into()
}
