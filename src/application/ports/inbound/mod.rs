//! Inbound ports - Interfaces that the application exposes to the outside world

mod sheet_action;

pub use sheet_action::SheetAction;
