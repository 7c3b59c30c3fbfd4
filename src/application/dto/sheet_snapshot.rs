//! Wire format for saving and loading a character sheet
//!
//! The store exchanges three name-keyed maps: `attributes`,
//! `attributeModifiers` and `skillPoints`. Running totals and the expanded
//! class are never sent; totals are recomputed after a load.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::entities::CharacterSheet;
use crate::domain::value_objects::AttributeMap;

/// Persisted part of a character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSnapshot {
    pub attributes: AttributeMap<u32>,
    pub attribute_modifiers: AttributeMap<i32>,
    #[serde(default)]
    pub skill_points: BTreeMap<String, u32>,
}

impl SheetSnapshot {
    /// Capture the sheet as it is right now
    pub fn from_sheet(sheet: &CharacterSheet) -> Self {
        let skill_points = sheet
            .skill_points()
            .allocations()
            .iter()
            .map(|(name, points)| (name.clone(), *points))
            .collect();

        Self {
            attributes: *sheet.attributes().values(),
            attribute_modifiers: *sheet.modifiers(),
            skill_points,
        }
    }

    pub fn into_parts(self) -> (AttributeMap<u32>, AttributeMap<i32>, HashMap<String, u32>) {
        (
            self.attributes,
            self.attribute_modifiers,
            self.skill_points.into_iter().collect(),
        )
    }
}

/// Envelope returned by the store on `GET`; the sheet is nested under `body`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    pub body: SheetSnapshot,
}

/// Acknowledgement returned by the store on `POST`
#[derive(Debug, Clone, PartialEq)]
pub struct SaveAck {
    pub body: serde_json::Value,
}
