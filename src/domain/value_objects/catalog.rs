//! Static class and skill catalogs
//!
//! Catalogs are configuration: built once at startup (defaults or a catalog
//! file) and shared read-only by every sheet.

use super::attribute::{Attribute, AttributeMap};

/// A character class and the minimum attribute values it requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
    pub requirements: AttributeMap<u32>,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, requirements: AttributeMap<u32>) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }

    /// Class that needs 9 in every attribute except its primary one
    fn with_primary(name: &str, primary: Attribute, primary_value: u32) -> Self {
        let requirements =
            AttributeMap::from_fn(|attribute| if attribute == primary { primary_value } else { 9 });
        Self::new(name, requirements)
    }
}

/// A skill and the attribute whose modifier feeds its total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: String,
    pub attribute: Attribute,
}

impl SkillDefinition {
    pub fn new(name: impl Into<String>, attribute: Attribute) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

/// Class and skill tables, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    classes: Vec<ClassDefinition>,
    skills: Vec<SkillDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate class name: {0}")]
    DuplicateClass(String),
    #[error("Duplicate skill name: {0}")]
    DuplicateSkill(String),
    #[error("Catalog name cannot be empty")]
    EmptyName,
}

impl Catalog {
    pub fn new(
        classes: Vec<ClassDefinition>,
        skills: Vec<SkillDefinition>,
    ) -> Result<Self, CatalogError> {
        for (i, class) in classes.iter().enumerate() {
            if class.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if classes[..i].iter().any(|c| c.name == class.name) {
                return Err(CatalogError::DuplicateClass(class.name.clone()));
            }
        }
        for (i, skill) in skills.iter().enumerate() {
            if skill.name.trim().is_empty() {
                return Err(CatalogError::EmptyName);
            }
            if skills[..i].iter().any(|s| s.name == skill.name) {
                return Err(CatalogError::DuplicateSkill(skill.name.clone()));
            }
        }
        Ok(Self { classes, skills })
    }

    pub fn classes(&self) -> &[ClassDefinition] {
        &self.classes
    }

    pub fn skills(&self) -> &[SkillDefinition] {
        &self.skills
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn skill(&self, name: &str) -> Option<&SkillDefinition> {
        self.skills.iter().find(|s| s.name == name)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use Attribute::*;

        Self {
            classes: vec![
                ClassDefinition::with_primary("Barbarian", Strength, 14),
                ClassDefinition::with_primary("Wizard", Intelligence, 14),
                ClassDefinition::with_primary("Bard", Charisma, 14),
            ],
            skills: vec![
                SkillDefinition::new("Acrobatics", Dexterity),
                SkillDefinition::new("Animal Handling", Wisdom),
                SkillDefinition::new("Arcana", Intelligence),
                SkillDefinition::new("Athletics", Strength),
                SkillDefinition::new("Deception", Charisma),
                SkillDefinition::new("History", Intelligence),
                SkillDefinition::new("Insight", Wisdom),
                SkillDefinition::new("Intimidation", Charisma),
                SkillDefinition::new("Investigation", Intelligence),
                SkillDefinition::new("Medicine", Wisdom),
                SkillDefinition::new("Nature", Intelligence),
                SkillDefinition::new("Perception", Wisdom),
                SkillDefinition::new("Performance", Charisma),
                SkillDefinition::new("Persuasion", Charisma),
                SkillDefinition::new("Religion", Intelligence),
                SkillDefinition::new("Sleight of Hand", Dexterity),
                SkillDefinition::new("Stealth", Dexterity),
                SkillDefinition::new("Survival", Wisdom),
            ],
        }
    }
}
