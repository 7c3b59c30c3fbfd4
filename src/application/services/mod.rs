//! Application services - Use case implementations

mod sheet_session;

pub use sheet_session::SheetSession;
