use iced::{widget::Space, Alignment, Length};

use phonegate::{
    country::CountryDirectory,
    form::{PhoneForm, SubmissionStatus},
    selector::CountrySelector,
};
use phonegate_ui::{
    component::{button, country_picker::CountryPicker, form, notification, text},
    image::FlagImages,
    theme,
    widget::*,
};

use super::{message::Message, Notice, PICKER_ID};

const MAX_WIDTH: f32 = 480.0;

pub struct PhoneView<'a> {
    pub form: &'a PhoneForm,
    pub selector: &'a CountrySelector,
    pub directory: &'a CountryDirectory,
    pub loading: bool,
    pub flags: &'a FlagImages,
    pub notice: Option<&'a Notice>,
}

pub fn phone_view(v: PhoneView<'_>) -> Element<'_, Message> {
    let mut picker = CountryPicker::new(
        iced::widget::container::Id::new(PICKER_ID),
        v.form.selection(),
        v.flags,
        Message::ToggleCountryPicker,
        Message::SelectCountry,
    )
    .loading(v.loading);
    if v.selector.is_open() {
        picker = picker.open(
            v.selector.search_term(),
            v.selector.filtered(v.directory),
            Message::SearchCountry,
        );
    }

    let placeholder = v.form.placeholder();
    let phone = form::Form::new_phone(
        &placeholder,
        v.form.display_text(),
        v.form.selection().map(|_| Message::PhoneEdited),
    )
    .maybe_warning(v.form.validation_error())
    .valid(v.form.validation_error().is_none())
    .on_submit(Message::Submit)
    .padding(10);

    let can_submit = v.form.is_submit_eligible() && !v.form.is_submitting();

    Container::new(
        Column::new()
            .push(text::h3("Two-factor authentication"))
            .push(
                text::p2_regular("Enter the phone number that will receive your verification code.")
                    .style(theme::text::secondary),
            )
            .push_maybe(v.notice.map(|notice| {
                notification::error(notice.title, &notice.message, Some(Message::DismissError))
            }))
            .push(Space::with_height(Length::Fixed(10.0)))
            .push(
                Container::new(
                    Column::new()
                        .push(text::p1_bold("Country"))
                        .push(picker)
                        .push(text::p1_bold("Phone number"))
                        .push(phone)
                        .spacing(10),
                )
                .padding(20)
                .style(theme::card::simple),
            )
            .push_maybe(submission_status(v.form.submission()))
            .push(
                Row::new()
                    .push(Space::with_width(Length::Fill))
                    .push(
                        button::primary(if v.form.is_submitting() {
                            "Sending..."
                        } else {
                            "Send code"
                        })
                        .on_press_maybe(can_submit.then_some(Message::Submit))
                        .width(Length::Fixed(150.0)),
                    )
                    .align_y(Alignment::Center),
            )
            .spacing(15)
            .max_width(MAX_WIDTH),
    )
    .padding(30)
    .center_x(Length::Fill)
    .height(Length::Fill)
    .style(theme::container::background)
    .into()
}

fn submission_status(status: &SubmissionStatus) -> Option<Container<'_, Message>> {
    match status {
        SubmissionStatus::Succeeded => Some(notification::success(
            "A verification code was sent to this number",
        )),
        SubmissionStatus::Failed(message) => Some(notification::error(
            "Unable to send the verification code",
            message,
            None,
        )),
        SubmissionStatus::Idle | SubmissionStatus::Pending => None,
    }
}
