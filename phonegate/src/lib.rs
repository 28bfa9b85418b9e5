pub mod country;
pub mod form;
pub mod phone;
pub mod selector;
pub mod submission;
