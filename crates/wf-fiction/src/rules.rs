//! Configurable puzzle and victory rules.

use tracing::{debug, warn};
use wf_core::{LocationId, World, WorldError, WorldResult, normalize_name};

/// Bonus awarded for solving the key puzzle when nothing else is configured.
pub const DEFAULT_KEY_BONUS: u32 = 10;

/// The single lock/key puzzle: using the key at one location unlocks another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPuzzle {
    /// Name of the key item.
    pub key_item: String,
    /// Where the key has to be used.
    pub unlock_from: LocationId,
    /// The location that gets unlocked.
    pub target: LocationId,
    /// Points awarded for unlocking.
    pub bonus: u32,
}

impl KeyPuzzle {
    /// Create a puzzle with the default bonus.
    pub fn new(
        key_item: &str,
        unlock_from: impl Into<LocationId>,
        target: impl Into<LocationId>,
    ) -> Self {
        Self {
            key_item: normalize_name(key_item),
            unlock_from: unlock_from.into(),
            target: target.into(),
            bonus: DEFAULT_KEY_BONUS,
        }
    }

    /// Set the unlock bonus.
    pub fn with_bonus(mut self, bonus: u32) -> Self {
        self.bonus = bonus;
        self
    }
}

/// Rules that are not part of the world file.
///
/// The defaults describe the campus world: depositing at the dorm room
/// (location 0) wins, and the key from the coffee shop (location 5) opens
/// the T.A. office (location 8).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    /// Where the player must stand to win.
    pub winning_location: LocationId,
    /// The lock/key puzzle, if the world has one.
    pub key_puzzle: Option<KeyPuzzle>,
}

impl Default for KeyPuzzle {
    /// The campus puzzle: the key used at the coffee shop (5) opens the
    /// T.A. office (8).
    fn default() -> Self {
        Self::new("key", 5, 8)
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            winning_location: LocationId(0),
            key_puzzle: Some(KeyPuzzle::default()),
        }
    }
}

impl GameRules {
    /// Rules with the given winning location and no key puzzle.
    pub fn new(winning_location: impl Into<LocationId>) -> Self {
        Self {
            winning_location: winning_location.into(),
            key_puzzle: None,
        }
    }

    /// Set the winning location.
    pub fn with_winning_location(mut self, location: impl Into<LocationId>) -> Self {
        self.winning_location = location.into();
        self
    }

    /// Set the key puzzle.
    pub fn with_key_puzzle(mut self, puzzle: KeyPuzzle) -> Self {
        self.key_puzzle = Some(puzzle);
        self
    }

    /// Override the key puzzle bonus. Has no effect without a puzzle.
    pub fn with_key_bonus(mut self, bonus: u32) -> Self {
        if let Some(puzzle) = &mut self.key_puzzle {
            puzzle.bonus = bonus;
        }
        self
    }

    /// Adapt the rules to a world they were not written for.
    ///
    /// The key puzzle is dropped when `world` lacks its key item or either of
    /// its locations. A missing winning location falls back to the world's
    /// lowest location ID.
    pub fn fitted_to(mut self, world: &World) -> Self {
        let puzzle_fits = self.key_puzzle.as_ref().is_some_and(|p| {
            world.item(&p.key_item).is_some()
                && world.contains_location(p.unlock_from)
                && world.contains_location(p.target)
        });
        if !puzzle_fits && self.key_puzzle.take().is_some() {
            debug!("key puzzle does not fit this world; dropped");
        }

        let present = world.contains_location(self.winning_location);
        if let (false, Some(first)) = (present, world.locations().next()) {
            warn!(
                missing = %self.winning_location,
                fallback = %first.id,
                "winning location not in world"
            );
            self.winning_location = first.id;
        }
        self
    }

    /// Check that every location the rules mention exists in `world`.
    pub fn validate(&self, world: &World) -> WorldResult<()> {
        let mut referenced = vec![("winning location", self.winning_location)];
        if let Some(puzzle) = &self.key_puzzle {
            referenced.push(("unlock location", puzzle.unlock_from));
            referenced.push(("locked location", puzzle.target));
        }

        for (what, id) in referenced {
            if !world.contains_location(id) {
                return Err(WorldError::DataIntegrity(format!(
                    "{what} {id} does not exist"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = include_str!("../../../worlds/campus.json");

    #[test]
    fn default_rules_match_campus() {
        let rules = GameRules::default();
        assert_eq!(rules.winning_location, LocationId(0));
        let puzzle = rules.key_puzzle.as_ref().unwrap();
        assert_eq!(puzzle.key_item, "key");
        assert_eq!(puzzle.bonus, DEFAULT_KEY_BONUS);

        let world = World::from_json(CAMPUS).unwrap();
        rules.validate(&world).unwrap();
    }

    #[test]
    fn bonus_override() {
        let rules = GameRules::default().with_key_bonus(40);
        assert_eq!(rules.key_puzzle.unwrap().bonus, 40);

        let rules = GameRules::new(3).with_key_bonus(40);
        assert!(rules.key_puzzle.is_none());
    }

    #[test]
    fn validation_rejects_missing_locations() {
        let world = World::from_json(CAMPUS).unwrap();

        let err = GameRules::default()
            .with_winning_location(12)
            .validate(&world)
            .unwrap_err();
        assert!(err.to_string().contains("winning location 12"));

        let err = GameRules::new(0)
            .with_key_puzzle(KeyPuzzle::new("key", 5, 99))
            .validate(&world)
            .unwrap_err();
        assert!(err.is_data_integrity());
    }

    #[test]
    fn fitting_drops_puzzle_without_key() {
        let campus = World::from_json(CAMPUS).unwrap();
        assert!(GameRules::default().fitted_to(&campus).key_puzzle.is_some());

        let keyless = World::from_json(
            r#"{"locations": [{"id": 0, "brief_description": "Den", "long_description": "A den.",
                "available_commands": {}, "items": []}], "items": []}"#,
        )
        .unwrap();
        let rules = GameRules::default().fitted_to(&keyless);
        assert!(rules.key_puzzle.is_none());
        rules.validate(&keyless).unwrap();
    }

    #[test]
    fn fitting_moves_rules_off_missing_locations() {
        let world = World::from_json(
            r#"{"locations": [
                {"id": 1, "brief_description": "Gate", "long_description": "A gate.",
                 "available_commands": {"go in": 2}, "items": ["key"]},
                {"id": 2, "brief_description": "Yard", "long_description": "A yard.",
                 "available_commands": {"go out": 1, "go on": 3}, "items": []},
                {"id": 3, "brief_description": "Keep", "long_description": "A keep.",
                 "available_commands": {"go back": 2}, "items": []}
            ],
            "items": [{"name": "key", "start_position": 1, "target_position": -1}]}"#,
        )
        .unwrap();
        assert!(GameRules::default().validate(&world).is_err());

        let rules = GameRules::default().fitted_to(&world);
        assert_eq!(rules.winning_location, LocationId(1));
        assert!(rules.key_puzzle.is_none());
        rules.validate(&world).unwrap();

        // A puzzle that fits is kept.
        let rules = GameRules::new(3)
            .with_key_puzzle(KeyPuzzle::new("key", 2, 3))
            .fitted_to(&world);
        assert_eq!(rules.winning_location, LocationId(3));
        assert_eq!(rules.key_puzzle.unwrap().target, LocationId(3));
    }
}
