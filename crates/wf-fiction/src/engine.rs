//! The game-state machine.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info};
use wf_core::{Item, Location, LocationId, World, WorldError, WorldResult, normalize_name};

use crate::error::{FictionError, FictionResult};
use crate::player::PlayerState;
use crate::rules::GameRules;

/// Where a game stands after the last completed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Still playing (or quit before reaching an ending).
    Ongoing,
    /// Every winning item was deposited at the winning location.
    Won,
    /// The move budget ran out.
    Lost,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

/// Result of a movement attempt that named a real exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player is now at the destination.
    Arrived(LocationId),
    /// The destination is locked; the player stayed put.
    Blocked(LocationId),
}

/// Result of dropping a carried item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped at the item's target: points awarded, item out of play.
    Deposited {
        /// Points awarded.
        points: u32,
    },
    /// Dropped somewhere else; it now lies at the current location.
    Dropped,
}

/// Result of using a carried item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// The key opened the locked location.
    Unlocked {
        /// The location that was unlocked.
        target: LocationId,
        /// Points awarded.
        bonus: u32,
    },
    /// The key was used where it belongs, but the door is already open.
    AlreadyUnlocked,
    /// The key was used somewhere it does nothing.
    NothingToUnlock,
    /// The item has no use.
    CannotUse(String),
}

impl fmt::Display for UseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlocked { bonus, .. } => write!(
                f,
                "You unlock the door with the key. The door swings open! +{bonus} points!"
            ),
            Self::AlreadyUnlocked => f.write_str("The door is already unlocked."),
            Self::NothingToUnlock => f.write_str("There's nothing to unlock here."),
            Self::CannotUse(item) => write!(f, "You can't use the {item} here."),
        }
    }
}

/// The game-state machine: world, player, position and outcome.
///
/// Every operation either completes or leaves the state untouched; move
/// costs are charged exactly as documented on each method.
#[derive(Debug, Clone)]
pub struct GameEngine {
    world: World,
    player: PlayerState,
    current: LocationId,
    running: bool,
    status: GameStatus,
    rules: GameRules,
}

impl GameEngine {
    /// Start a game in `world` at `initial`.
    ///
    /// Fails with a data integrity error if `initial`, or any location the
    /// rules refer to, does not exist.
    pub fn new(world: World, initial: LocationId, rules: GameRules) -> WorldResult<Self> {
        if !world.contains_location(initial) {
            return Err(WorldError::DataIntegrity(format!(
                "initial location {initial} does not exist"
            )));
        }
        rules.validate(&world)?;

        let player = PlayerState::new(world.max_moves());
        info!(initial = %initial, max_moves = world.max_moves(), "game started");
        Ok(Self {
            world,
            player,
            current: initial,
            running: true,
            status: GameStatus::Ongoing,
            rules,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The world being played.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// The rules in effect.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// ID of the player's location.
    pub fn current_location_id(&self) -> LocationId {
        self.current
    }

    /// The player's location.
    pub fn current_location(&self) -> &Location {
        &self.world[self.current]
    }

    /// Look up any location.
    pub fn resolve_location(&self, id: LocationId) -> WorldResult<&Location> {
        self.world.location(id)
    }

    /// Find an item definition by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.world.item(name)
    }

    /// Names of the carried items.
    pub fn inventory_names(&self) -> Vec<String> {
        self.player.inventory.clone()
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.player.score
    }

    /// Moves left.
    pub fn moves_remaining(&self) -> u32 {
        self.player.moves_remaining
    }

    /// The move budget the game started with.
    pub fn max_moves(&self) -> u32 {
        self.world.max_moves()
    }

    /// Whether commands are still accepted.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// The outcome so far.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Follow the exit named `keyword`.
    ///
    /// An unknown keyword is rejected for free. A locked destination turns
    /// the player back but still costs a move.
    pub fn attempt_move(&mut self, keyword: &str) -> FictionResult<MoveOutcome> {
        let keyword = normalize_name(keyword);
        let destination = self
            .current_location()
            .destination(&keyword)
            .ok_or_else(|| FictionError::InvalidCommand(keyword.clone()))?;
        let locked = self.world.location(destination)?.locked;

        self.decrement_moves();
        if locked {
            debug!(from = %self.current, to = %destination, "move blocked by lock");
            return Ok(MoveOutcome::Blocked(destination));
        }

        debug!(from = %self.current, to = %destination, keyword = %keyword, "moved");
        self.current = destination;
        Ok(MoveOutcome::Arrived(destination))
    }

    /// Pick up an item lying at the current location.
    pub fn take(&mut self, name: &str) -> FictionResult<()> {
        let name = normalize_name(name);
        if !self.current_location().has_item(&name) {
            return Err(FictionError::ItemNotHere(name));
        }
        if self.world.item(&name).is_none() {
            return Err(FictionError::UnknownItem(name));
        }

        self.world.location_mut(self.current)?.remove_item(&name);
        debug!(item = %name, at = %self.current, "took item");
        self.player.add_item(name);
        self.decrement_moves();
        Ok(())
    }

    /// Drop a carried item, depositing it if this is its target.
    pub fn drop_item(&mut self, name: &str) -> FictionResult<DropOutcome> {
        let name = normalize_name(name);
        if !self.player.has_item(&name) {
            return Err(FictionError::NotInInventory(name));
        }

        let deposit_points = self
            .world
            .item(&name)
            .filter(|item| item.is_target(self.current))
            .map(|item| item.target_points);

        self.player.remove_item(&name);
        let outcome = match deposit_points {
            Some(points) => {
                self.player.award(points);
                info!(item = %name, points, score = self.player.score, "item deposited");
                DropOutcome::Deposited { points }
            }
            None => {
                debug!(item = %name, at = %self.current, "dropped item");
                self.world.location_mut(self.current)?.add_item(name);
                DropOutcome::Dropped
            }
        };
        self.decrement_moves();
        Ok(outcome)
    }

    /// Use a carried item. Only the puzzle key does anything.
    ///
    /// Every use of a carried item costs a move, including the no-op ones.
    pub fn use_item(&mut self, name: &str) -> FictionResult<UseOutcome> {
        let name = normalize_name(name);
        if !self.player.has_item(&name) {
            return Err(FictionError::NotInInventory(name));
        }
        self.decrement_moves();

        let Some(puzzle) = self
            .rules
            .key_puzzle
            .as_ref()
            .filter(|p| p.key_item == name)
        else {
            return Ok(UseOutcome::CannotUse(name));
        };
        if self.current != puzzle.unlock_from {
            return Ok(UseOutcome::NothingToUnlock);
        }
        let (target, bonus) = (puzzle.target, puzzle.bonus);

        let door = self.world.location_mut(target)?;
        if !door.locked {
            return Ok(UseOutcome::AlreadyUnlocked);
        }
        door.locked = false;
        self.player.remove_item(&name);
        self.player.award(bonus);
        info!(location = %target, bonus, "location unlocked");
        Ok(UseOutcome::Unlocked { target, bonus })
    }

    /// Spend one move.
    pub fn decrement_moves(&mut self) {
        self.player.spend_move();
    }

    /// Stop accepting commands without reaching an ending.
    pub fn quit(&mut self) {
        info!("player quit");
        self.running = false;
    }

    // -----------------------------------------------------------------------
    // Endings
    // -----------------------------------------------------------------------

    /// At the winning location with every winning item deposited.
    ///
    /// Winning items the world does not define count as deposited.
    pub fn check_win(&self) -> bool {
        self.current == self.rules.winning_location
            && self
                .world
                .winning_items()
                .iter()
                .all(|name| self.is_deposited(name))
    }

    /// The move budget is spent.
    pub fn check_lose(&self) -> bool {
        self.player.moves_remaining == 0
    }

    /// Run the end-of-command check. Win takes precedence over loss.
    pub fn evaluate(&mut self) -> GameStatus {
        if !self.running {
            return self.status;
        }
        if self.check_win() {
            self.status = GameStatus::Won;
            self.running = false;
            info!(score = self.player.score, "game won");
        } else if self.check_lose() {
            self.status = GameStatus::Lost;
            self.running = false;
            info!(score = self.player.score, "game lost");
        }
        self.status
    }

    fn is_deposited(&self, name: &str) -> bool {
        !self.player.has_item(name) && self.world.item_location(name).is_none()
    }

    // -----------------------------------------------------------------------
    // Display
    // -----------------------------------------------------------------------

    /// The text for arriving here: long on the first visit, brief after.
    pub fn describe_current(&mut self) -> String {
        let location = &self.world[self.current];
        if location.visited {
            return location.brief_description.clone();
        }
        let text = location.long_description.clone();
        if let Ok(location) = self.world.location_mut(self.current) {
            location.visited = true;
        }
        text
    }
}
