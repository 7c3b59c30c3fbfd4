//! Outbound ports - Interfaces that the application requires from external systems

mod sheet_observer_port;
mod sheet_store_port;

pub use sheet_observer_port::SheetObserver;
pub use sheet_store_port::{LoadError, SaveError, SheetStorePort};
