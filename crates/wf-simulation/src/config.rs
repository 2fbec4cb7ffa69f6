use wf_core::LocationId;
use wf_fiction::GameRules;

/// Configuration for a simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimConfig {
    /// Where the player starts.
    pub initial_location: LocationId,
    /// Winning location and key puzzle.
    pub rules: GameRules,
}

impl SimConfig {
    /// Set the starting location.
    pub fn with_initial_location(mut self, location: impl Into<LocationId>) -> Self {
        self.initial_location = location.into();
        self
    }

    /// Set the game rules.
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Override the key puzzle bonus.
    pub fn with_key_bonus(mut self, bonus: u32) -> Self {
        self.rules = self.rules.with_key_bonus(bonus);
        self
    }
}
