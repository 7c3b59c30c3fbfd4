//! Data Transfer Objects - For API boundaries
//!
//! DTOs live in the application layer so infrastructure (HTTP, catalog files)
//! can serialize/deserialize without the domain knowing the wire format.

pub mod catalog;
pub mod sheet_snapshot;

pub use catalog::*;
pub use sheet_snapshot::*;
