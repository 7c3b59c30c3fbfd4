//! Application layer - Use cases, ports and DTOs
//!
//! This layer contains:
//! - DTOs: wire format of the sheet store and the catalog file
//! - Ports: the store and observer interfaces, and the actions a UI can send
//! - Services: the sheet session that ties them together

pub mod dto;
pub mod ports;
pub mod services;
