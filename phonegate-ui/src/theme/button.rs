use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

const RADIUS: f32 = 8.0;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn secondary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.secondary, status)
}

pub fn transparent(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.transparent, status)
}

pub fn list_item(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.list_item, status)
}

/// List entry of the value currently selected.
pub fn list_item_selected(theme: &Theme, _status: Status) -> Style {
    button(&theme.colors.buttons.list_item, Status::Pressed)
}

fn style(p: &ButtonPalette) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: if let Some(color) = p.border {
            Border {
                radius: RADIUS.into(),
                width: 1.0,
                color,
            }
        } else {
            Border {
                radius: RADIUS.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active),
        Status::Hovered => style(&p.hovered),
        Status::Pressed => p.pressed.as_ref().map_or_else(|| style(&p.active), style),
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                style(&disabled)
            } else {
                let active: Style = style(&p.active);

                Style {
                    text_color: Color {
                        a: 0.2,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}
