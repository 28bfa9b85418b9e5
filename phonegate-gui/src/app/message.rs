use iced::{Point, Rectangle};

use phonegate::{
    country::{CountryDirectory, Flag},
    submission::{SubmissionError, SubmissionOutcome, SubmissionRequest},
};

use crate::services::auth::AccessToken;

#[derive(Debug, Clone)]
pub enum Message {
    AccessToken(Result<AccessToken, String>),
    Directory(Result<CountryDirectory, String>),
    FlagLoaded(Flag, Result<Vec<u8>, String>),
    ToggleCountryPicker,
    SearchCountry(String),
    SelectCountry(String),
    Pointer(PointerEvent),
    /// A press at `position`, once the picker region is known.
    PointerDown {
        position: Point,
        bounds: Option<Rectangle>,
    },
    PhoneEdited(String),
    Submit,
    Submitted(SubmissionRequest, Result<SubmissionOutcome, SubmissionError>),
    DismissError,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Moved(Point),
    Pressed,
    Touched(Point),
}
