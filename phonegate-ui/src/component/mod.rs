pub mod button;
pub mod country_picker;
pub mod form;
pub mod notification;
pub mod text;
