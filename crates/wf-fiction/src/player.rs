//! Player state management.

/// The player's current state in the session.
///
/// The inventory holds item names; the item definitions themselves stay in
/// the world, so each item exists exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Names of carried items, in pickup order.
    pub inventory: Vec<String>,
    /// Points earned so far. Never decreases.
    pub score: u32,
    /// Moves left before the game is lost.
    pub moves_remaining: u32,
}

impl PlayerState {
    /// Create a player with an empty inventory and a full move budget.
    pub fn new(max_moves: u32) -> Self {
        Self {
            inventory: Vec::new(),
            score: 0,
            moves_remaining: max_moves,
        }
    }

    /// Check if the player has an item.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i == name)
    }

    /// Add an item to inventory.
    pub fn add_item(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.has_item(&name) {
            self.inventory.push(name);
        }
    }

    /// Remove an item from inventory.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == name) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    /// Add points to the score.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Spend one move. The counter stops at zero.
    pub fn spend_move(&mut self) {
        self.moves_remaining = self.moves_remaining.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_state_new() {
        let state = PlayerState::new(40);
        assert!(state.inventory.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.moves_remaining, 40);
    }

    #[test]
    fn inventory_management() {
        let mut state = PlayerState::new(40);

        assert!(!state.has_item("key"));
        state.add_item("key");
        assert!(state.has_item("key"));

        // Adding again should not duplicate
        state.add_item("key");
        assert_eq!(state.inventory.len(), 1);

        assert!(state.remove_item("key"));
        assert!(!state.has_item("key"));
        assert!(!state.remove_item("key"));
    }

    #[test]
    fn moves_floor_at_zero() {
        let mut state = PlayerState::new(1);
        state.spend_move();
        assert_eq!(state.moves_remaining, 0);
        state.spend_move();
        assert_eq!(state.moves_remaining, 0);
    }

    #[test]
    fn score_accumulates() {
        let mut state = PlayerState::new(1);
        state.award(30);
        state.award(0);
        state.award(10);
        assert_eq!(state.score, 40);
    }
}
