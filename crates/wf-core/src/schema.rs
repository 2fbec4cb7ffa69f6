use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};

/// Sentinel `target_position` meaning "this item scores nowhere".
pub const NO_TARGET: i64 = -1;

/// Move budget used when a world file does not specify one.
pub const DEFAULT_MAX_MOVES: i64 = 40;

fn default_max_moves() -> i64 {
    DEFAULT_MAX_MOVES
}

/// A world file exactly as it appears on disk.
///
/// Nothing here has been validated yet; see [`crate::World::from_data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldData {
    /// Every location in the movement graph.
    pub locations: Vec<LocationData>,
    /// Every item definition.
    pub items: Vec<ItemData>,
    /// Moves allowed before the game is lost.
    #[serde(default = "default_max_moves")]
    pub max_moves: i64,
    /// Items that must be deposited to win.
    #[serde(default)]
    pub winning_items: Vec<String>,
}

/// One entry of the `locations` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationData {
    /// Location ID.
    pub id: i64,
    /// Text for repeat visits.
    pub brief_description: String,
    /// Text for the first visit.
    pub long_description: String,
    /// Movement keyword to destination ID.
    pub available_commands: BTreeMap<String, i64>,
    /// Names of the items that start here.
    #[serde(default)]
    pub items: Vec<String>,
    /// Whether the location starts locked.
    #[serde(default)]
    pub locked: bool,
}

/// One entry of the `items` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    /// Item name, matched case-insensitively.
    pub name: String,
    /// Examine text.
    #[serde(default)]
    pub description: String,
    /// Starting location ID.
    pub start_position: i64,
    /// Deposit location ID, or [`NO_TARGET`].
    pub target_position: i64,
    /// Points for depositing.
    #[serde(default)]
    pub target_points: i64,
}

impl WorldData {
    /// Decode world data from a JSON string.
    pub fn from_json(json: &str) -> WorldResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON world file.
    pub fn from_path(path: &Path) -> WorldResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}
