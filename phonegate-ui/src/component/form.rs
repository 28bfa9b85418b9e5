use iced::Length;

use crate::{component::text, font, theme, widget::*};

pub struct Form<'a, Message> {
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
    valid: bool,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`] for a masked phone number, in a monospace font so
    /// the value lines up with its placeholder mask.
    ///
    /// Without `on_change` the input is disabled.
    pub fn new_phone<F>(mask: &str, value: &str, on_change: Option<F>) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        let input = TextInput::new(mask, value).font(font::MONOSPACE);
        Self {
            input: match on_change {
                Some(on_change) => input.on_input(on_change),
                None => input,
            },
            warning: None,
            valid: true,
        }
    }

    /// Sets whether the value of the [`Form`] is valid.
    pub fn valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }

    /// Sets the [`Form`] with a warning message, displayed while the value is invalid.
    pub fn maybe_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    /// Sets the padding of the [`Form`].
    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .push(if !form.valid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(if !form.valid {
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error))
                } else {
                    None
                })
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
