//! Character sheet entity - attributes, modifiers, skill points and class view
//!
//! All mutations are synchronous and leave the sheet consistent before they
//! return: an attribute value and its modifier always change together. Each
//! mutation reports the change it made, or `None` when the action was rejected
//! by a cap, a budget or a floor. Rejections are silent in the
//! interaction model and are not errors.

use std::collections::HashMap;
use std::sync::Arc;

use super::attribute_set::AttributeSet;
use super::skill_points::{SkillPoints, BASE_SKILL_POINTS, SKILL_POINTS_PER_INT_MODIFIER};
use crate::domain::events::SheetChange;
use crate::domain::value_objects::{modifier_for, Attribute, AttributeMap, Catalog};

/// One row of the skill table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillRow {
    pub name: String,
    pub attribute: Attribute,
    pub allocation: u32,
    pub modifier: i32,
    pub total: i32,
}

/// A character sheet owned by a single session
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    catalog: Arc<Catalog>,
    attributes: AttributeSet,
    modifiers: AttributeMap<i32>,
    skill_points: SkillPoints,
    expanded_class: Option<String>,
}

impl CharacterSheet {
    /// Fresh sheet: every attribute at its default, no skill points spent
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let attributes = AttributeSet::default();
        let modifiers = AttributeMap::from_fn(|a| modifier_for(attributes.get(a)));
        let skill_points = SkillPoints::zeroed(catalog.skills().iter().map(|s| s.name.as_str()));
        Self {
            catalog,
            attributes,
            modifiers,
            skill_points,
            expanded_class: None,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn attributes(&self) -> &AttributeSet {
        &self.attributes
    }

    pub fn attribute(&self, attribute: Attribute) -> u32 {
        self.attributes.get(attribute)
    }

    pub fn modifiers(&self) -> &AttributeMap<i32> {
        &self.modifiers
    }

    pub fn modifier(&self, attribute: Attribute) -> i32 {
        self.modifiers.get(attribute)
    }

    pub fn skill_points(&self) -> &SkillPoints {
        &self.skill_points
    }

    pub fn expanded_class(&self) -> Option<&str> {
        self.expanded_class.as_deref()
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// Raise an attribute by one, unless the pool cap would be exceeded
    pub fn increment(&mut self, attribute: Attribute) -> Option<SheetChange> {
        let value = self.attributes.increment(attribute)?;
        Some(self.refresh_modifier(attribute, value))
    }

    /// Lower an attribute by one, floored at zero
    pub fn decrement(&mut self, attribute: Attribute) -> Option<SheetChange> {
        let value = self.attributes.decrement(attribute)?;
        Some(self.refresh_modifier(attribute, value))
    }

    fn refresh_modifier(&mut self, attribute: Attribute, value: u32) -> SheetChange {
        let modifier = modifier_for(value);
        self.modifiers.set(attribute, modifier);
        SheetChange::AttributeChanged {
            attribute,
            value,
            modifier,
        }
    }

    // ------------------------------------------------------------------
    // Classes
    // ------------------------------------------------------------------

    /// Whether every attribute meets the class's requirement.
    /// Unknown classes are never met.
    pub fn meets_requirements(&self, class_name: &str) -> bool {
        self.catalog.class(class_name).is_some_and(|class| {
            Attribute::ALL
                .iter()
                .all(|a| self.attributes.get(*a) >= class.requirements.get(*a))
        })
    }

    /// Eligibility of every catalog class, in catalog order
    pub fn class_eligibility(&self) -> Vec<(&str, bool)> {
        self.catalog
            .classes()
            .iter()
            .map(|class| (class.name.as_str(), self.meets_requirements(&class.name)))
            .collect()
    }

    /// Expand a class's detail, or collapse it if it is already expanded
    pub fn toggle_class_visibility(&mut self, class_name: &str) -> Option<SheetChange> {
        self.catalog.class(class_name)?;
        if self.expanded_class.as_deref() == Some(class_name) {
            self.expanded_class = None;
        } else {
            self.expanded_class = Some(class_name.to_string());
        }
        Some(SheetChange::ClassVisibilityChanged {
            expanded: self.expanded_class.clone(),
        })
    }

    // ------------------------------------------------------------------
    // Skills
    // ------------------------------------------------------------------

    /// Skill points the character may spend: 10 + 4 x Intelligence modifier
    pub fn total_available_points(&self) -> i64 {
        let modifier = i64::from(self.modifier(Attribute::Intelligence));
        BASE_SKILL_POINTS + SKILL_POINTS_PER_INT_MODIFIER * modifier
    }

    /// Spend a point on a skill if the budget allows it
    pub fn add_skill(&mut self, skill: &str) -> Option<SheetChange> {
        self.catalog.skill(skill)?;
        let budget = self.total_available_points();
        let allocation = self.skill_points.add(skill, budget)?;
        Some(SheetChange::SkillPointsChanged {
            skill: skill.to_string(),
            allocation,
            total_spent: self.skill_points.total(),
        })
    }

    /// Take a point back from a skill, floored at zero
    pub fn remove_skill(&mut self, skill: &str) -> Option<SheetChange> {
        self.catalog.skill(skill)?;
        let allocation = self.skill_points.remove(skill)?;
        Some(SheetChange::SkillPointsChanged {
            skill: skill.to_string(),
            allocation,
            total_spent: self.skill_points.total(),
        })
    }

    /// Displayed skill total: allocation plus the linked modifier, or 0 when
    /// nothing is allocated
    pub fn skill_total(&self, skill: &str) -> i32 {
        let Some(definition) = self.catalog.skill(skill) else {
            return 0;
        };
        let allocation = self.skill_points.get(skill);
        if allocation == 0 {
            return 0;
        }
        i32::try_from(allocation)
            .unwrap_or(i32::MAX)
            .saturating_add(self.modifier(definition.attribute))
    }

    /// The skill table in catalog order
    pub fn skill_rows(&self) -> Vec<SkillRow> {
        self.catalog
            .skills()
            .iter()
            .map(|skill| SkillRow {
                name: skill.name.clone(),
                attribute: skill.attribute,
                allocation: self.skill_points.get(&skill.name),
                modifier: self.modifier(skill.attribute),
                total: self.skill_total(&skill.name),
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Replace attributes, modifiers and skill points wholesale.
    ///
    /// Modifiers are taken as given. Totals are recomputed from the values.
    /// Skills outside the catalog are dropped and catalog skills missing from
    /// `skill_points` start at zero. No cap or budget check is made.
    pub fn restore(
        &mut self,
        attributes: AttributeMap<u32>,
        modifiers: AttributeMap<i32>,
        skill_points: HashMap<String, u32>,
    ) -> SheetChange {
        let allocations = self
            .catalog
            .skills()
            .iter()
            .map(|s| (s.name.clone(), skill_points.get(&s.name).copied().unwrap_or(0)))
            .collect();

        self.attributes = AttributeSet::from_values(attributes);
        self.modifiers = modifiers;
        self.skill_points = SkillPoints::from_allocations(allocations);
        SheetChange::Loaded
    }

    /// Attributes whose stored modifier disagrees with the modifier formula
    pub fn modifier_drift(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|a| self.modifier(*a) != modifier_for(self.attribute(*a)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ATTRIBUTE_POOL_CAP;

    fn create_test_sheet() -> CharacterSheet {
        CharacterSheet::new(Arc::new(Catalog::default()))
    }

    fn set_attribute(sheet: &mut CharacterSheet, attribute: Attribute, value: u32) {
        while sheet.attribute(attribute) > value {
            sheet.decrement(attribute);
        }
        while sheet.attribute(attribute) < value {
            assert!(sheet.increment(attribute).is_some(), "pool cap reached");
        }
    }

    #[test]
    fn test_new_sheet_defaults() {
        let sheet = create_test_sheet();
        assert_eq!(sheet.attributes().total(), 60);
        assert!(Attribute::ALL.iter().all(|a| sheet.modifier(*a) == 0));
        assert_eq!(sheet.skill_points().total(), 0);
        assert_eq!(sheet.skill_points().allocations().len(), 18);
        assert_eq!(sheet.expanded_class(), None);
        assert_eq!(sheet.total_available_points(), 10);
    }

    #[test]
    fn test_increment_then_decrement_restores_value_and_modifier() {
        for attribute in Attribute::ALL {
            let mut sheet = create_test_sheet();
            let before = (sheet.attribute(attribute), sheet.modifier(attribute));
            assert!(sheet.increment(attribute).is_some());
            assert!(sheet.decrement(attribute).is_some());
            assert_eq!((sheet.attribute(attribute), sheet.modifier(attribute)), before);
        }
    }

    #[test]
    fn test_eleventh_increment_is_rejected() {
        let mut sheet = create_test_sheet();
        for i in 0..10 {
            let attribute = Attribute::ALL[i % Attribute::COUNT];
            assert!(sheet.increment(attribute).is_some());
        }
        assert_eq!(sheet.attributes().total(), ATTRIBUTE_POOL_CAP);

        let before = sheet.attributes().clone();
        for attribute in Attribute::ALL {
            assert_eq!(sheet.increment(attribute), None);
        }
        assert_eq!(sheet.attributes(), &before);
    }

    #[test]
    fn test_running_total_tracks_sum() {
        let mut sheet = create_test_sheet();
        let script = [
            (Attribute::Strength, true),
            (Attribute::Strength, true),
            (Attribute::Wisdom, false),
            (Attribute::Charisma, false),
            (Attribute::Dexterity, true),
        ];
        for (attribute, up) in script.iter().cycle().take(40) {
            if *up {
                sheet.increment(*attribute);
            } else {
                sheet.decrement(*attribute);
            }
            let sum: u64 = sheet.attributes().values().iter().map(|(_, v)| u64::from(v)).sum();
            assert_eq!(sheet.attributes().total(), sum);
            assert!(sheet.attributes().total() <= ATTRIBUTE_POOL_CAP);
        }
    }

    #[test]
    fn test_decrement_never_goes_negative() {
        let mut sheet = create_test_sheet();
        for _ in 0..15 {
            sheet.decrement(Attribute::Constitution);
        }
        assert_eq!(sheet.attribute(Attribute::Constitution), 0);
        assert_eq!(sheet.modifier(Attribute::Constitution), -5);
        assert_eq!(sheet.decrement(Attribute::Constitution), None);
    }

    #[test]
    fn test_modifier_follows_value() {
        let mut sheet = create_test_sheet();
        let cases = [(10, 0), (11, 0), (8, -1), (9, -1), (17, 3)];
        for (value, expected) in cases {
            set_attribute(&mut sheet, Attribute::Dexterity, value);
            assert_eq!(sheet.modifier(Attribute::Dexterity), expected, "value {value}");
        }
    }

    #[test]
    fn test_mutation_reports_consistent_change() {
        let mut sheet = create_test_sheet();
        let change = sheet.increment(Attribute::Wisdom);
        assert_eq!(
            change,
            Some(SheetChange::AttributeChanged {
                attribute: Attribute::Wisdom,
                value: 11,
                modifier: 0,
            })
        );
        let change = sheet.increment(Attribute::Wisdom);
        assert_eq!(
            change,
            Some(SheetChange::AttributeChanged {
                attribute: Attribute::Wisdom,
                value: 12,
                modifier: 1,
            })
        );
        assert_eq!(sheet.modifier(Attribute::Strength), 0);
    }

    #[test]
    fn test_class_requirements() {
        let mut sheet = create_test_sheet();
        assert!(!sheet.meets_requirements("Barbarian"));
        assert!(!sheet.meets_requirements("Wizard"));
        assert!(!sheet.meets_requirements("Bard"));

        set_attribute(&mut sheet, Attribute::Strength, 14);
        assert!(sheet.meets_requirements("Barbarian"));
        assert!(!sheet.meets_requirements("Wizard"));

        set_attribute(&mut sheet, Attribute::Strength, 10);
        set_attribute(&mut sheet, Attribute::Intelligence, 14);
        assert!(sheet.meets_requirements("Wizard"));

        set_attribute(&mut sheet, Attribute::Intelligence, 10);
        set_attribute(&mut sheet, Attribute::Charisma, 14);
        assert!(sheet.meets_requirements("Bard"));

        // Any attribute under 9 breaks every default class
        set_attribute(&mut sheet, Attribute::Wisdom, 8);
        assert!(!sheet.meets_requirements("Bard"));

        assert!(!sheet.meets_requirements("Paladin"));
    }

    #[test]
    fn test_class_eligibility_in_catalog_order() {
        let mut sheet = create_test_sheet();
        set_attribute(&mut sheet, Attribute::Charisma, 14);
        assert_eq!(
            sheet.class_eligibility(),
            vec![("Barbarian", false), ("Wizard", false), ("Bard", true)]
        );
    }

    #[test]
    fn test_toggle_class_visibility() {
        let mut sheet = create_test_sheet();
        sheet.toggle_class_visibility("Wizard");
        assert_eq!(sheet.expanded_class(), Some("Wizard"));
        sheet.toggle_class_visibility("Wizard");
        assert_eq!(sheet.expanded_class(), None);

        sheet.toggle_class_visibility("Wizard");
        sheet.toggle_class_visibility("Bard");
        assert_eq!(sheet.expanded_class(), Some("Bard"));

        assert_eq!(sheet.toggle_class_visibility("Paladin"), None);
        assert_eq!(sheet.expanded_class(), Some("Bard"));
    }

    #[test]
    fn test_eleventh_skill_point_is_rejected() {
        let mut sheet = create_test_sheet();
        let skills = ["Arcana", "Stealth", "Athletics"];
        for i in 0..10 {
            assert!(sheet.add_skill(skills[i % skills.len()]).is_some());
        }
        assert_eq!(sheet.skill_points().total(), 10);
        for skill in skills {
            assert_eq!(sheet.add_skill(skill), None);
        }
        assert_eq!(sheet.skill_points().total(), 10);
    }

    #[test]
    fn test_intelligence_raises_budget_without_clawback() {
        let mut sheet = create_test_sheet();
        set_attribute(&mut sheet, Attribute::Intelligence, 12);
        assert_eq!(sheet.total_available_points(), 14);
        for _ in 0..14 {
            assert!(sheet.add_skill("Arcana").is_some());
        }
        assert_eq!(sheet.add_skill("Arcana"), None);

        set_attribute(&mut sheet, Attribute::Intelligence, 8);
        assert_eq!(sheet.total_available_points(), 6);
        assert_eq!(sheet.skill_points().get("Arcana"), 14);
        assert_eq!(sheet.add_skill("Nature"), None);
        assert!(sheet.remove_skill("Arcana").is_some());
        assert_eq!(sheet.skill_points().total(), 13);
    }

    #[test]
    fn test_remove_skill_floors_at_zero() {
        let mut sheet = create_test_sheet();
        assert_eq!(sheet.remove_skill("Medicine"), None);
        sheet.add_skill("Medicine");
        assert!(sheet.remove_skill("Medicine").is_some());
        assert_eq!(sheet.skill_points().get("Medicine"), 0);
        assert_eq!(sheet.skill_points().total(), 0);
    }

    #[test]
    fn test_unknown_skill_is_ignored() {
        let mut sheet = create_test_sheet();
        assert_eq!(sheet.add_skill("Basket Weaving"), None);
        assert_eq!(sheet.skill_points().total(), 0);
        assert_eq!(sheet.skill_total("Basket Weaving"), 0);
    }

    #[test]
    fn test_skill_total_is_zero_until_allocated() {
        let mut sheet = create_test_sheet();
        set_attribute(&mut sheet, Attribute::Dexterity, 14);
        assert_eq!(sheet.modifier(Attribute::Dexterity), 2);
        assert_eq!(sheet.skill_total("Stealth"), 0);

        sheet.add_skill("Stealth");
        assert_eq!(sheet.skill_total("Stealth"), 3);

        set_attribute(&mut sheet, Attribute::Wisdom, 6);
        sheet.add_skill("Survival");
        assert_eq!(sheet.skill_total("Survival"), 1 - 2);
    }

    #[test]
    fn test_skill_rows_follow_catalog() {
        let mut sheet = create_test_sheet();
        sheet.add_skill("Arcana");
        let rows = sheet.skill_rows();
        assert_eq!(rows.len(), 18);
        assert_eq!(rows[0].name, "Acrobatics");
        let arcana = rows.iter().find(|r| r.name == "Arcana").unwrap();
        assert_eq!(arcana.attribute, Attribute::Intelligence);
        assert_eq!(arcana.allocation, 1);
        assert_eq!(arcana.total, 1);
    }

    #[test]
    fn test_restore_replaces_state_and_recomputes_totals() {
        let mut sheet = create_test_sheet();
        sheet.toggle_class_visibility("Bard");
        sheet.add_skill("Arcana");

        let attributes = AttributeMap::from_fn(|a| if a == Attribute::Strength { 16 } else { 11 });
        let modifiers = AttributeMap::from_fn(|a| if a == Attribute::Strength { 3 } else { 0 });
        let skill_points = HashMap::from([
            ("Athletics".to_string(), 2),
            ("Underwater Basket Weaving".to_string(), 7),
        ]);

        assert_eq!(sheet.restore(attributes, modifiers, skill_points), SheetChange::Loaded);
        assert_eq!(sheet.attribute(Attribute::Strength), 16);
        assert_eq!(sheet.attributes().total(), 16 + 5 * 11);
        assert_eq!(sheet.modifier(Attribute::Strength), 3);
        assert_eq!(sheet.skill_points().get("Athletics"), 2);
        assert_eq!(sheet.skill_points().get("Arcana"), 0);
        assert_eq!(sheet.skill_points().total(), 2);
        assert!(!sheet.skill_points().allocations().contains_key("Underwater Basket Weaving"));
        assert_eq!(sheet.expanded_class(), Some("Bard"));
        assert!(sheet.modifier_drift().is_empty());
    }

    #[test]
    fn test_restore_trusts_stored_modifiers() {
        let mut sheet = create_test_sheet();
        let attributes = AttributeMap::uniform(14);
        let modifiers = AttributeMap::uniform(0);
        sheet.restore(attributes, modifiers, HashMap::new());
        assert_eq!(sheet.modifier(Attribute::Wisdom), 0);
        assert_eq!(sheet.modifier_drift(), Attribute::ALL.to_vec());
    }

    #[test]
    fn test_extreme_stored_modifiers_give_exact_budget() {
        let mut sheet = create_test_sheet();
        sheet.restore(
            AttributeMap::uniform(10),
            AttributeMap::uniform(1_000_000_000),
            HashMap::new(),
        );
        assert_eq!(sheet.total_available_points(), 4_000_000_010);
        assert!(sheet.add_skill("Arcana").is_some());

        sheet.restore(
            AttributeMap::uniform(10),
            AttributeMap::uniform(i32::MIN),
            HashMap::new(),
        );
        assert_eq!(sheet.total_available_points(), 10 + 4 * i64::from(i32::MIN));
        assert_eq!(sheet.add_skill("Arcana"), None);
    }

    #[test]
    fn test_extreme_stored_values_keep_sheet_usable() {
        let mut sheet = create_test_sheet();
        let attributes = AttributeMap::from_fn(|a| match a {
            Attribute::Strength => u32::MAX,
            Attribute::Intelligence => u32::MAX - 1,
            _ => 1,
        });
        let modifiers = AttributeMap::from_fn(|a| modifier_for(attributes.get(a)));
        let skill_points = HashMap::from([
            ("Arcana".to_string(), u32::MAX),
            ("Stealth".to_string(), 1),
        ]);
        sheet.restore(attributes, modifiers, skill_points);

        assert_eq!(
            sheet.attributes().total(),
            u64::from(u32::MAX) + u64::from(u32::MAX - 1) + 4
        );
        assert_eq!(sheet.skill_points().total(), u64::from(u32::MAX) + 1);
        assert_eq!(sheet.increment(Attribute::Dexterity), None);
        assert!(sheet.decrement(Attribute::Intelligence).is_some());
        assert_eq!(sheet.modifier(Attribute::Intelligence), modifier_for(u32::MAX - 2));
        assert!(sheet.add_skill("Stealth").is_some());
        assert_eq!(sheet.skill_points().total(), u64::from(u32::MAX) + 2);
        assert_eq!(sheet.skill_total("Arcana"), i32::MAX);
        assert_eq!(sheet.skill_total("Stealth"), 2 - 5);
    }
}
