use iced::{widget::Space, Alignment, Length};

use crate::{
    color,
    component::{button, text},
    theme,
    widget::*,
};

/// Banner for an error the user should read, with an optional dismiss action.
pub fn error<'a, T: 'a + Clone>(title: &'static str, message: &'a str, on_dismiss: Option<T>) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(
                Column::new()
                    .push(text::p1_bold(title).color(color::LIGHT_BLACK))
                    .push(text::p2_regular(message).color(color::LIGHT_BLACK))
                    .spacing(5)
                    .width(Length::Fill),
            )
            .push_maybe(on_dismiss.map(|msg| {
                button::transparent("Dismiss")
                    .on_press(msg)
                    .style(theme::button::secondary)
            }))
            .align_y(Alignment::Center)
            .spacing(10),
    )
    .padding(15)
    .style(theme::notification::error)
    .width(Length::Fill)
}

pub fn success<'a, T: 'a>(message: &'a str) -> Container<'a, T> {
    Container::new(
        Row::new()
            .push(text::p1_bold(message).color(color::LIGHT_BLACK))
            .push(Space::with_width(Length::Fill))
            .align_y(Alignment::Center),
    )
    .padding(15)
    .style(theme::notification::success)
    .width(Length::Fill)
}
