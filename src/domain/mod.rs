//! Domain layer - Core sheet rules with no I/O
//!
//! This layer contains:
//! - Value Objects: Attribute, attribute-keyed records, class and skill catalogs
//! - Entities: the character sheet and its attribute and skill-point records
//! - Domain Events: sheet change notifications

pub mod entities;
pub mod events;
pub mod value_objects;
