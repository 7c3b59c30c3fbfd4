//! Actions a rendering layer sends back into the sheet session

use crate::domain::value_objects::Attribute;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetAction {
    Increment(Attribute),
    Decrement(Attribute),
    AddSkill(String),
    RemoveSkill(String),
    ToggleClass(String),
    Save,
    /// Reload the sheet from the store, discarding local changes
    Load,
}
