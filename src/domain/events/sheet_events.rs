//! Sheet events - Notifications that the character sheet changed
//!
//! Every successful state change produces exactly one event. Rejected actions
//! (pool cap, skill budget, floors) produce none.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::Attribute;

/// Base data for all events
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

/// What changed on the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetChange {
    /// An attribute value and its modifier moved together
    AttributeChanged {
        attribute: Attribute,
        value: u32,
        modifier: i32,
    },

    /// A skill allocation changed
    SkillPointsChanged {
        skill: String,
        allocation: u32,
        total_spent: u64,
    },

    /// The expanded class detail changed
    ClassVisibilityChanged { expanded: Option<String> },

    /// The whole sheet was replaced from the store
    Loaded,

    /// The store acknowledged a save
    Saved,
}

#[derive(Debug, Clone)]
pub struct SheetEvent {
    pub metadata: EventMetadata,
    pub change: SheetChange,
}

impl SheetEvent {
    pub fn new(change: SheetChange) -> Self {
        Self {
            metadata: EventMetadata::default(),
            change,
        }
    }

    /// Short label for logging
    pub fn event_type(&self) -> &'static str {
        match self.change {
            SheetChange::AttributeChanged { .. } => "AttributeChanged",
            SheetChange::SkillPointsChanged { .. } => "SkillPointsChanged",
            SheetChange::ClassVisibilityChanged { .. } => "ClassVisibilityChanged",
            SheetChange::Loaded => "Loaded",
            SheetChange::Saved => "Saved",
        }
    }
}
