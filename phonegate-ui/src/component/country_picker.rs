//! Searchable single-select list of countries.
//!
//! The picker only renders what it is given: whether it is open, the search
//! term and the entries to list are owned by the caller.

use iced::{
    widget::{container, image, scrollable},
    Alignment, Length,
};

use phonegate::country::{CountryRecord, CountrySelection};

use crate::{
    component::text,
    image::FlagImages,
    theme,
    widget::*,
};

const FLAG_WIDTH: f32 = 24.0;
const LIST_HEIGHT: f32 = 240.0;

pub struct CountryPicker<'a, Message> {
    id: container::Id,
    selected: Option<&'a CountrySelection>,
    flags: &'a FlagImages,
    loading: bool,
    on_toggle: Message,
    on_select: Box<dyn Fn(String) -> Message + 'a>,
    dropdown: Option<Dropdown<'a, Message>>,
}

struct Dropdown<'a, Message> {
    search: &'a str,
    entries: Vec<(&'a str, &'a CountryRecord)>,
    on_search: Box<dyn Fn(String) -> Message + 'a>,
}

impl<'a, Message: Clone + 'a> CountryPicker<'a, Message> {
    /// Creates a closed [`CountryPicker`].
    ///
    /// `id` identifies the region of the picker, dropdown included, so the
    /// caller can resolve its bounds.
    pub fn new<F>(
        id: container::Id,
        selected: Option<&'a CountrySelection>,
        flags: &'a FlagImages,
        on_toggle: Message,
        on_select: F,
    ) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            id,
            selected,
            flags,
            loading: false,
            on_toggle,
            on_select: Box::new(on_select),
            dropdown: None,
        }
    }

    /// The directory is not there yet, the picker cannot be opened.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Opens the dropdown with a search input and the listed entries.
    pub fn open<F>(
        mut self,
        search: &'a str,
        entries: Vec<(&'a str, &'a CountryRecord)>,
        on_search: F,
    ) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        self.dropdown = Some(Dropdown {
            search,
            entries,
            on_search: Box::new(on_search),
        });
        self
    }
}

pub fn flag<'a, T: 'a>(region_code: &str, flags: &FlagImages) -> Element<'a, T> {
    match flags.get(region_code) {
        Some(handle) => image(handle.clone()).width(Length::Fixed(FLAG_WIDTH)).into(),
        None => Container::new(text::caption(region_code.to_uppercase()).style(theme::text::secondary))
            .width(Length::Fixed(FLAG_WIDTH))
            .into(),
    }
}

fn current<'a, T: 'a>(
    selected: Option<&'a CountrySelection>,
    flags: &FlagImages,
    loading: bool,
) -> Row<'a, T> {
    let row = match selected {
        Some(selection) => Row::new()
            .push(flag(&selection.region_code, flags))
            .push(text::p1_regular(&selection.record.name).width(Length::Fill))
            .push(text::p1_regular(&selection.record.calling_code).style(theme::text::secondary)),
        None => Row::new().push(
            text::p1_regular(if loading {
                "Loading countries..."
            } else {
                "Select a country"
            })
            .style(theme::text::secondary)
            .width(Length::Fill),
        ),
    };
    row.spacing(10).align_y(Alignment::Center)
}

impl<'a, Message: 'a + Clone> From<CountryPicker<'a, Message>> for Element<'a, Message> {
    fn from(picker: CountryPicker<'a, Message>) -> Element<'a, Message> {
        let selected_code = picker.selected.map(|s| s.region_code.as_str());
        let toggle = Button::new(current(picker.selected, picker.flags, picker.loading).padding(5))
            .on_press_maybe((!picker.loading).then_some(picker.on_toggle))
            .style(theme::button::secondary)
            .width(Length::Fill);

        let dropdown = picker.dropdown.map(|dropdown| {
            let list: Column<'a, Message> = if dropdown.entries.is_empty() {
                Column::new().push(
                    text::p2_regular("No country matches your search")
                        .style(theme::text::secondary),
                )
            } else {
                dropdown
                    .entries
                    .into_iter()
                    .fold(Column::new(), |col, (code, record)| {
                        col.push(
                            Button::new(
                                Row::new()
                                    .push(flag(code, picker.flags))
                                    .push(text::p1_regular(&record.name).width(Length::Fill))
                                    .push(
                                        text::p2_regular(&record.calling_code)
                                            .style(theme::text::secondary),
                                    )
                                    .spacing(10)
                                    .align_y(Alignment::Center),
                            )
                            .on_press((picker.on_select)(code.to_string()))
                            .style(if Some(code) == selected_code {
                                theme::button::list_item_selected
                            } else {
                                theme::button::list_item
                            })
                            .padding(8)
                            .width(Length::Fill),
                        )
                    })
            };

            Container::new(
                Column::new()
                    .push(
                        TextInput::new("Search country", dropdown.search)
                            .on_input(dropdown.on_search)
                            .padding(10),
                    )
                    .push(
                        scrollable(list.spacing(2).padding(iced::Padding {
                            top: 0.0,
                            right: 10.0,
                            bottom: 0.0,
                            left: 0.0,
                        }))
                            .height(Length::Fixed(LIST_HEIGHT)),
                    )
                    .spacing(10),
            )
            .padding(10)
            .style(theme::card::dropdown)
        });

        Container::new(
            Column::new()
                .push(toggle)
                .push_maybe(dropdown)
                .spacing(5)
                .width(Length::Fill),
        )
        .id(picker.id)
        .width(Length::Fill)
        .into()
    }
}
