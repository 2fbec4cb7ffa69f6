pub mod check;
pub mod play;
pub mod simulate;

use std::path::Path;

use tracing::debug;
use wf_core::{LocationId, World};
use wf_fiction::{GameRules, KeyPuzzle};

/// Load and validate a world file.
fn load_world(path: &Path) -> Result<World, String> {
    let world = World::load(path).map_err(|e| {
        if e.is_data_integrity() {
            format!("invalid world data in {}: {e}", path.display())
        } else {
            e.to_string()
        }
    })?;
    debug!(path = %path.display(), locations = world.location_count(), "world loaded");
    Ok(world)
}

/// Rule overrides shared by `play` and `simulate`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RuleArgs {
    /// Location where the winning items must be deposited
    #[arg(long)]
    pub win_location: Option<u32>,

    /// Name of the key item
    #[arg(long)]
    pub key_item: Option<String>,

    /// Location where the key has to be used
    #[arg(long)]
    pub unlock_from: Option<u32>,

    /// Location the key unlocks
    #[arg(long)]
    pub locked_location: Option<u32>,

    /// Points for solving the key puzzle
    #[arg(long)]
    pub key_bonus: Option<u32>,
}

impl RuleArgs {
    /// The default rules fitted to `world`, then the explicit overrides.
    ///
    /// Overrides are not fitted, so a location that does not exist is
    /// reported when the game starts.
    fn rules(&self, world: &World) -> GameRules {
        let mut rules = GameRules::default().fitted_to(world);
        if let Some(location) = self.win_location {
            rules = rules.with_winning_location(location);
        }

        let puzzle_overridden = self.key_item.is_some()
            || self.unlock_from.is_some()
            || self.locked_location.is_some();
        if puzzle_overridden {
            let base = rules.key_puzzle.clone().unwrap_or_default();
            let puzzle = KeyPuzzle::new(
                self.key_item.as_deref().unwrap_or(&base.key_item),
                self.unlock_from.map_or(base.unlock_from, LocationId),
                self.locked_location.map_or(base.target, LocationId),
            )
            .with_bonus(base.bonus);
            rules = rules.with_key_puzzle(puzzle);
        }

        if let Some(bonus) = self.key_bonus {
            rules = rules.with_key_bonus(bonus);
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAMPUS: &str = include_str!("../../../../worlds/campus.json");

    #[test]
    fn no_overrides_keep_campus_rules() {
        let world = World::from_json(CAMPUS).unwrap();
        assert_eq!(RuleArgs::default().rules(&world), GameRules::default());
    }

    #[test]
    fn overrides_replace_puzzle_parts() {
        let world = World::from_json(CAMPUS).unwrap();
        let args = RuleArgs {
            win_location: Some(2),
            locked_location: Some(6),
            key_bonus: Some(3),
            ..RuleArgs::default()
        };
        let rules = args.rules(&world);
        assert_eq!(rules.winning_location, LocationId(2));
        let puzzle = rules.key_puzzle.unwrap();
        assert_eq!(puzzle.key_item, "key");
        assert_eq!(puzzle.unlock_from, LocationId(5));
        assert_eq!(puzzle.target, LocationId(6));
        assert_eq!(puzzle.bonus, 3);
    }
}
