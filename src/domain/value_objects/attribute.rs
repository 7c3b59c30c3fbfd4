//! Character attributes and attribute-keyed records

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The six character attributes, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl Attribute {
    pub const COUNT: usize = 6;

    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Strength => "Strength",
            Attribute::Dexterity => "Dexterity",
            Attribute::Constitution => "Constitution",
            Attribute::Intelligence => "Intelligence",
            Attribute::Wisdom => "Wisdom",
            Attribute::Charisma => "Charisma",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown attribute: {0}")]
pub struct UnknownAttribute(pub String);

impl FromStr for Attribute {
    type Err = UnknownAttribute;

    /// Accepts the full name or the three-letter abbreviation, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Attribute::ALL
            .into_iter()
            .find(|attribute| {
                attribute.name().eq_ignore_ascii_case(trimmed)
                    || attribute.abbreviation().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| UnknownAttribute(trimmed.to_string()))
    }
}

impl Serialize for Attribute {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(D::Error::custom)
    }
}

/// Calculate the modifier for an attribute value: floor((value - 10) / 2)
pub fn modifier_for(value: u32) -> i32 {
    let modifier = (i64::from(value) - 10).div_euclid(2);
    i32::try_from(modifier).unwrap_or(i32::MAX)
}

/// A record holding one value for every attribute
///
/// Serializes as a JSON object keyed by attribute name. Deserializing requires
/// every attribute to be present; keys that are not attribute names are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMap<T: Copy> {
    values: [T; Attribute::COUNT],
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing value for attribute: {0}")]
pub struct MissingAttribute(pub Attribute);

impl<T: Copy> AttributeMap<T> {
    /// Build a record with the same value for every attribute
    pub fn uniform(value: T) -> Self {
        Self {
            values: [value; Attribute::COUNT],
        }
    }

    pub fn from_fn(mut f: impl FnMut(Attribute) -> T) -> Self {
        let mut values = [f(Attribute::ALL[0]); Attribute::COUNT];
        for attribute in Attribute::ALL.into_iter().skip(1) {
            values[attribute.index()] = f(attribute);
        }
        Self { values }
    }

    /// Build a record from name-keyed entries, failing on the first missing attribute
    pub fn from_named(mut named: HashMap<String, T>) -> Result<Self, MissingAttribute> {
        let mut values = Vec::with_capacity(Attribute::COUNT);
        for attribute in Attribute::ALL {
            let value = named
                .remove(attribute.name())
                .ok_or(MissingAttribute(attribute))?;
            values.push(value);
        }
        let first = values[0];
        let mut array = [first; Attribute::COUNT];
        array.copy_from_slice(&values);
        Ok(Self { values: array })
    }

    pub fn get(&self, attribute: Attribute) -> T {
        self.values[attribute.index()]
    }

    pub fn set(&mut self, attribute: Attribute, value: T) {
        self.values[attribute.index()] = value;
    }

    /// Iterate in sheet order
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, T)> + '_ {
        Attribute::ALL
            .into_iter()
            .map(move |attribute| (attribute, self.get(attribute)))
    }
}

impl<T: Copy + Serialize> Serialize for AttributeMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Attribute::COUNT))?;
        for (attribute, value) in self.iter() {
            map.serialize_entry(attribute.name(), &value)?;
        }
        map.end()
    }
}

impl<'de, T: Copy + Deserialize<'de>> Deserialize<'de> for AttributeMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let named = HashMap::<String, T>::deserialize(deserializer)?;
        Self::from_named(named).map_err(D::Error::custom)
    }
}
