pub mod form;
pub mod reminder;
