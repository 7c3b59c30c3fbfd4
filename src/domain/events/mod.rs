//! Domain events - Notifications of significant state changes

mod sheet_events;

pub use sheet_events::{SheetChange, SheetEvent};
