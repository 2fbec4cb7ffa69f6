use serde::Serialize;

use crate::location::LocationId;

/// An item that can be carried around and deposited for points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Normalized, unique name.
    pub name: String,
    /// Shown when the item is examined.
    pub description: String,
    /// Where the item starts out.
    pub start_position: LocationId,
    /// Where dropping the item deposits it, if anywhere.
    pub target_position: Option<LocationId>,
    /// Points awarded on deposit.
    pub target_points: u32,
}

impl Item {
    /// Create an item with no scoring target.
    pub fn new(name: &str, start_position: impl Into<LocationId>) -> Self {
        Self {
            name: normalize_name(name),
            description: String::new(),
            start_position: start_position.into(),
            target_position: None,
            target_points: 0,
        }
    }

    /// Give the item a scoring target.
    pub fn with_target(mut self, target: impl Into<LocationId>, points: u32) -> Self {
        self.target_position = Some(target.into());
        self.target_points = points;
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether dropping this item at `location` deposits it.
    pub fn is_target(&self, location: LocationId) -> bool {
        self.target_position == Some(location)
    }
}

/// Normalize a user- or data-supplied item name for lookup.
///
/// Lowercases and collapses runs of whitespace, so `"  USB   Drive "` and
/// `"usb drive"` name the same item.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
