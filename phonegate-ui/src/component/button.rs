use super::text::text;
use crate::font::MEDIUM;
use crate::{theme, widget::*};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::container;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(
            text(t)
                .font(MEDIUM)
                .align_y(iced::Alignment::Center)
                .align_x(iced::Alignment::Center),
        )
        .align_y(Vertical::Center)
        .align_x(Horizontal::Center)
        .width(iced::Length::Fill)
        .padding(5),
    )
    .style(theme::button::primary)
}

pub fn transparent<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(text(t).align_y(iced::Alignment::Center))
            .align_y(Vertical::Center)
            .padding(5),
    )
    .style(theme::button::transparent)
}
