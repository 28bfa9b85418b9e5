use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub notifications: Notifications,
    pub text_inputs: TextInputs,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub scrollable: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub secondary: Button,
    pub transparent: Button,
    pub list_item: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub simple: ContainerPalette,
    pub dropdown: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Notifications {
    pub success: ContainerPalette,
    pub error: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        Self {
            general: General {
                background: color::LIGHT_BLACK,
                scrollable: color::GREY_4,
            },
            text: Text {
                primary: color::WHITE,
                secondary: color::GREY_2,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    }),
                    disabled: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::GREY_3,
                        border: color::GREY_5.into(),
                    }),
                },
                secondary: Button {
                    active: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::GREY_4.into(),
                    },
                    hovered: ButtonPalette {
                        background: color::GREY_6,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    },
                    pressed: Some(ButtonPalette {
                        background: color::GREY_5,
                        text: color::WHITE,
                        border: color::BLUE.into(),
                    }),
                    disabled: None,
                },
                transparent: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_2,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: None,
                    disabled: None,
                },
                list_item: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT_BLUE,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::BLUE,
                        text: color::WHITE,
                        border: None,
                    }),
                    disabled: None,
                },
            },
            cards: Cards {
                simple: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: Some(color::TRANSPARENT),
                },
                dropdown: ContainerPalette {
                    background: color::GREY_6,
                    text: None,
                    border: color::GREY_4.into(),
                },
            },
            notifications: Notifications {
                success: ContainerPalette {
                    background: color::GREEN,
                    text: color::LIGHT_BLACK.into(),
                    border: Some(color::GREEN),
                },
                error: ContainerPalette {
                    background: color::RED,
                    text: color::LIGHT_BLACK.into(),
                    border: Some(color::RED),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: Some(color::GREY_4),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_BLUE,
                        border: Some(color::GREY_5),
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        background: color::GREY_6,
                        icon: color::GREY_3,
                        placeholder: color::GREY_3,
                        value: color::WHITE,
                        selection: color::TRANSPARENT_BLUE,
                        border: Some(color::RED),
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_5,
                        icon: color::GREY_3,
                        placeholder: color::GREY_4,
                        value: color::GREY_3,
                        selection: color::TRANSPARENT_BLUE,
                        border: Some(color::RED),
                    },
                },
            },
        }
    }
}
