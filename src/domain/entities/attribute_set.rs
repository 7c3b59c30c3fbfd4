//! Attribute values with a running pool total

use crate::domain::value_objects::{Attribute, AttributeMap};

/// Maximum sum of all attribute values
pub const ATTRIBUTE_POOL_CAP: u64 = 70;

/// Starting value for every attribute
pub const DEFAULT_ATTRIBUTE_VALUE: u32 = 10;

/// Attribute values plus their running total
///
/// The total is kept equal to the sum of the values by every mutation and is
/// recomputed, never trusted, when the set is rebuilt from stored values. It is
/// wider than a single value so any stored set of values sums exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSet {
    values: AttributeMap<u32>,
    total: u64,
}

impl AttributeSet {
    pub fn from_values(values: AttributeMap<u32>) -> Self {
        let total = values.iter().map(|(_, v)| u64::from(v)).sum();
        Self { values, total }
    }

    pub fn get(&self, attribute: Attribute) -> u32 {
        self.values.get(attribute)
    }

    pub fn values(&self) -> &AttributeMap<u32> {
        &self.values
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Raise an attribute by one unless that would push the total over the cap.
    /// Returns the new value when the set changed.
    pub fn increment(&mut self, attribute: Attribute) -> Option<u32> {
        if self.total + 1 > ATTRIBUTE_POOL_CAP {
            return None;
        }
        let value = self.values.get(attribute).checked_add(1)?;
        self.values.set(attribute, value);
        self.total += 1;
        Some(value)
    }

    /// Lower an attribute by one, floored at zero.
    /// Returns the new value when the set changed.
    pub fn decrement(&mut self, attribute: Attribute) -> Option<u32> {
        let current = self.values.get(attribute);
        if current == 0 {
            return None;
        }
        self.values.set(attribute, current - 1);
        self.total -= 1;
        Some(current - 1)
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::from_values(AttributeMap::uniform(DEFAULT_ATTRIBUTE_VALUE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set() {
        let set = AttributeSet::default();
        assert_eq!(set.total(), 60);
        assert!(Attribute::ALL.iter().all(|a| set.get(*a) == 10));
    }

    #[test]
    fn test_increment_stops_at_cap() {
        let mut set = AttributeSet::default();
        for _ in 0..10 {
            assert!(set.increment(Attribute::Wisdom).is_some());
        }
        assert_eq!(set.total(), ATTRIBUTE_POOL_CAP);
        assert_eq!(set.increment(Attribute::Strength), None);
        assert_eq!(set.get(Attribute::Strength), 10);
        assert_eq!(set.get(Attribute::Wisdom), 20);
    }

    #[test]
    fn test_decrement_floors_at_zero() {
        let mut set = AttributeSet::from_values(AttributeMap::from_fn(|a| {
            if a == Attribute::Charisma { 1 } else { 10 }
        }));
        assert_eq!(set.decrement(Attribute::Charisma), Some(0));
        assert_eq!(set.decrement(Attribute::Charisma), None);
        assert_eq!(set.get(Attribute::Charisma), 0);
        assert_eq!(set.total(), 50);
    }

    #[test]
    fn test_total_recomputed_from_values() {
        let set = AttributeSet::from_values(AttributeMap::from_fn(|a| a as u32 * 3));
        assert_eq!(set.total(), 3 * (1 + 2 + 3 + 4 + 5));
    }

    #[test]
    fn test_total_of_extreme_values_is_exact() {
        let set = AttributeSet::from_values(AttributeMap::uniform(u32::MAX));
        assert_eq!(set.total(), 6 * u64::from(u32::MAX));
    }

    #[test]
    fn test_increment_over_cap_after_extreme_load() {
        let mut set = AttributeSet::from_values(AttributeMap::from_fn(|a| {
            if a == Attribute::Strength { u32::MAX } else { 0 }
        }));
        assert_eq!(set.increment(Attribute::Dexterity), None);
        assert_eq!(set.increment(Attribute::Strength), None);
        assert_eq!(set.decrement(Attribute::Strength), Some(u32::MAX - 1));
        assert_eq!(set.total(), u64::from(u32::MAX - 1));
    }
}
