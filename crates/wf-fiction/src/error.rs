//! Error types for the fiction engine.

use thiserror::Error;
use wf_core::WorldError;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
#[derive(Debug, Error)]
pub enum FictionError {
    /// Input that is neither a menu command, an item verb, nor an exit here.
    #[error("invalid command: \"{0}\"")]
    InvalidCommand(String),

    /// The item exists but is not lying at the player's location.
    #[error("There is no {0} here.")]
    ItemNotHere(String),

    /// The location lists a name that no item definition matches.
    #[error("Unknown item: {0}")]
    UnknownItem(String),

    /// Item not in inventory.
    #[error("You don't have a {0} in your inventory.")]
    NotInInventory(String),

    /// A command arrived after the game ended.
    #[error("the game is over")]
    GameOver,

    /// World lookup or data integrity failure.
    #[error(transparent)]
    World(#[from] WorldError),
}

impl FictionError {
    /// Whether the error only rejects the current command.
    ///
    /// Recoverable errors are reported to the player and play continues.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidCommand(_)
                | Self::ItemNotHere(_)
                | Self::UnknownItem(_)
                | Self::NotInInventory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_core::LocationId;

    #[test]
    fn player_facing_messages() {
        assert_eq!(
            FictionError::ItemNotHere("key".into()).to_string(),
            "There is no key here."
        );
        assert_eq!(
            FictionError::NotInInventory("lucky mug".into()).to_string(),
            "You don't have a lucky mug in your inventory."
        );
    }

    #[test]
    fn recoverability() {
        assert!(FictionError::InvalidCommand("dance".into()).is_recoverable());
        assert!(FictionError::UnknownItem("lamp".into()).is_recoverable());
        assert!(!FictionError::GameOver.is_recoverable());
        assert!(!FictionError::from(WorldError::LocationNotFound(LocationId(3))).is_recoverable());
    }
}
