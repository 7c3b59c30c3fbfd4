//! Skill point allocations

use std::collections::HashMap;

/// Base skill points before the Intelligence bonus
pub const BASE_SKILL_POINTS: i64 = 10;

/// Extra skill points granted per point of Intelligence modifier
pub const SKILL_POINTS_PER_INT_MODIFIER: i64 = 4;

/// Per-skill allocations plus the running total spent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillPoints {
    allocations: HashMap<String, u32>,
    total: u64,
}

impl SkillPoints {
    /// Zero allocation for every named skill
    pub fn zeroed<'a>(skills: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            allocations: skills.into_iter().map(|s| (s.to_string(), 0)).collect(),
            total: 0,
        }
    }

    /// Rebuild from stored allocations; the total is recomputed
    pub fn from_allocations(allocations: HashMap<String, u32>) -> Self {
        let total = allocations.values().map(|v| u64::from(*v)).sum();
        Self { allocations, total }
    }

    pub fn get(&self, skill: &str) -> u32 {
        self.allocations.get(skill).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn allocations(&self) -> &HashMap<String, u32> {
        &self.allocations
    }

    /// Spend one point on a skill if the new total stays within `budget`.
    /// Returns the new allocation when a point was spent.
    pub fn add(&mut self, skill: &str, budget: i64) -> Option<u32> {
        let budget = u64::try_from(budget).ok()?;
        if self.total + 1 > budget {
            return None;
        }
        let allocation = self.allocations.entry(skill.to_string()).or_insert(0);
        *allocation = allocation.checked_add(1)?;
        self.total += 1;
        Some(*allocation)
    }

    /// Take one point back from a skill, floored at zero.
    /// Returns the new allocation when a point was removed.
    pub fn remove(&mut self, skill: &str) -> Option<u32> {
        let allocation = self.allocations.get_mut(skill)?;
        if *allocation == 0 {
            return None;
        }
        *allocation -= 1;
        self.total = self.total.saturating_sub(1);
        Some(*allocation)
    }
}
