//! Catalog file format
//!
//! ```json
//! {
//!   "classes": [{"name": "Barbarian", "requirements": {"Strength": 14, ...}}],
//!   "skills": [{"name": "Athletics", "attribute": "Strength"}]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Attribute, AttributeMap, Catalog, CatalogError, ClassDefinition, SkillDefinition,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassDefinitionDto {
    pub name: String,
    pub requirements: AttributeMap<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillDefinitionDto {
    pub name: String,
    pub attribute: Attribute,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDto {
    pub classes: Vec<ClassDefinitionDto>,
    pub skills: Vec<SkillDefinitionDto>,
}

impl From<&Catalog> for CatalogDto {
    fn from(value: &Catalog) -> Self {
        Self {
            classes: value
                .classes()
                .iter()
                .map(|c| ClassDefinitionDto {
                    name: c.name.clone(),
                    requirements: c.requirements,
                })
                .collect(),
            skills: value
                .skills()
                .iter()
                .map(|s| SkillDefinitionDto {
                    name: s.name.clone(),
                    attribute: s.attribute,
                })
                .collect(),
        }
    }
}

impl TryFrom<CatalogDto> for Catalog {
    type Error = CatalogError;

    fn try_from(value: CatalogDto) -> Result<Self, Self::Error> {
        Catalog::new(
            value
                .classes
                .into_iter()
                .map(|c| ClassDefinition::new(c.name, c.requirements))
                .collect(),
            value
                .skills
                .into_iter()
                .map(|s| SkillDefinition::new(s.name, s.attribute))
                .collect(),
        )
    }
}
