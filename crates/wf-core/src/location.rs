use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a location in the movement graph.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LocationId(pub u32);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LocationId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A node in the movement graph.
///
/// Everything except `items`, `visited` and `locked` is fixed once the world
/// has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Text shown on repeat visits.
    pub brief_description: String,
    /// Text shown on the first visit and by `look`.
    pub long_description: String,
    /// Movement keyword to destination.
    pub available_commands: BTreeMap<String, LocationId>,
    /// Names of the items lying here.
    pub items: Vec<String>,
    /// Whether the player has seen the long description.
    pub visited: bool,
    /// Whether entering requires the key puzzle to be solved first.
    pub locked: bool,
}

impl Location {
    /// Create an unlocked, unvisited location with no exits or items.
    pub fn new(
        id: impl Into<LocationId>,
        brief: impl Into<String>,
        long: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            brief_description: brief.into(),
            long_description: long.into(),
            available_commands: BTreeMap::new(),
            items: Vec::new(),
            visited: false,
            locked: false,
        }
    }

    /// Look up where a movement keyword leads.
    pub fn destination(&self, keyword: &str) -> Option<LocationId> {
        self.available_commands.get(keyword).copied()
    }

    /// Iterate over the movement keywords available here.
    pub fn commands(&self) -> impl Iterator<Item = &str> {
        self.available_commands.keys().map(String::as_str)
    }

    /// Check whether an item lies here.
    pub fn has_item(&self, name: &str) -> bool {
        self.items.iter().any(|i| i == name)
    }

    /// Put an item down here. Adding a name twice is a no-op.
    pub fn add_item(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_item(&name) {
            self.items.push(name);
        }
    }

    /// Pick an item up from here. Returns `false` if it was not present.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == name) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}
