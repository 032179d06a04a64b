//! Leader and civilization records as they appear in the JSON datasets.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six category flags shared by leaders and civilizations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Traits {
    #[serde(deserialize_with = "null_as_default")]
    pub cultural: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub diplomatic: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub economic: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub expansionist: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub militaristic: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub scientific: bool,
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leader {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub traits: Traits,
}

/// A civilization that can be picked in one of the three eras.
///
/// Every rule list may be missing or `null` in the source JSON; either way
/// it behaves exactly like an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Civilization {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub traits: Traits,

    /// Leader ids with a historic tie to this civilization
    #[serde(default, deserialize_with = "null_as_default")]
    pub historic: Vec<String>,
    /// Leader ids with a geographic tie to this civilization
    #[serde(default, deserialize_with = "null_as_default")]
    pub geographic: Vec<String>,
    /// Leader ids with a strategic tie to this civilization
    #[serde(default, deserialize_with = "null_as_default")]
    pub strategic: Vec<String>,

    /// Leader ids that unlock this civilization outright
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlocked_by_leader: Vec<String>,
    /// Civilization ids from earlier eras that unlock this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlocked_by_civilizations: Vec<String>,
    /// Free-text conditions shown when nothing else applies
    #[serde(default, deserialize_with = "null_as_default")]
    pub unlocked_by_conditions: Vec<String>,
}

/// The three ordered selection stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Antiquity,
    Exploration,
    Modern,
}

impl Era {
    /// All eras in selection order
    pub const ALL: [Era; 3] = [Era::Antiquity, Era::Exploration, Era::Modern];

    pub fn index(self) -> usize {
        match self {
            Era::Antiquity => 0,
            Era::Exploration => 1,
            Era::Modern => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Era::Antiquity => "Antiquity",
            Era::Exploration => "Exploration",
            Era::Modern => "Modern",
        }
    }

    /// Lowercase key used for dataset folders and CLI arguments.
    pub fn key(self) -> &'static str {
        match self {
            Era::Antiquity => "antiquity",
            Era::Exploration => "exploration",
            Era::Modern => "modern",
        }
    }

    /// Eras strictly before this one, oldest first.
    pub fn earlier(self) -> &'static [Era] {
        &Era::ALL[..self.index()]
    }

    /// Eras strictly after this one.
    pub fn later(self) -> &'static [Era] {
        &Era::ALL[self.index() + 1..]
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Era {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|era| era.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown era '{}' (expected antiquity, exploration or modern)", s))
    }
}
