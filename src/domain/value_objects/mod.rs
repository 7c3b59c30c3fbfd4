//! Value objects - Immutable objects defined by their attributes

mod attribute;
mod catalog;

pub use attribute::{modifier_for, Attribute, AttributeMap};
pub use catalog::{Catalog, CatalogError, ClassDefinition, SkillDefinition};
