//! Domain entities - Core business objects owned by a session

mod attribute_set;
mod character_sheet;
mod skill_points;

pub use attribute_set::ATTRIBUTE_POOL_CAP;
pub use character_sheet::CharacterSheet;
