//! Interactive fiction engine for Wayfarer.
//!
//! Provides the game-state machine (movement, inventory, deposit scoring, the
//! lock/key puzzle, win/lose evaluation), a replayable event log of visited
//! locations, and a [`GameSession`] that ties both together behind a single
//! command entry point shared by interactive play and scripted replay.

/// The game-state machine.
pub mod engine;
/// Error types for the fiction engine.
pub mod error;
/// Ordered history of visited locations.
pub mod log;
/// Command parsing and suggestions.
pub mod parser;
/// Player state management.
pub mod player;
/// Configurable puzzle and victory rules.
pub mod rules;
/// Interactive fiction session management.
pub mod session;

pub use engine::{DropOutcome, GameEngine, GameStatus, MoveOutcome, UseOutcome};
pub use error::{FictionError, FictionResult};
pub use log::{EventLog, EventRecord};
pub use parser::{Command, MenuCommand, parse_command};
pub use player::PlayerState;
pub use rules::{GameRules, KeyPuzzle};
pub use session::GameSession;
