//! Interactive fiction session management.

use tracing::{debug, info};
use wf_core::{LocationId, World, normalize_name};

use crate::engine::{DropOutcome, GameEngine, GameStatus, MoveOutcome};
use crate::error::{FictionError, FictionResult};
use crate::log::EventLog;
use crate::parser::{Command, MenuCommand, parse_command, suggest};
use crate::rules::GameRules;

/// An interactive fiction session: one engine and the log of its visits.
///
/// Interactive play and scripted replay both go through [`process`](Self::process).
#[derive(Debug, Clone)]
pub struct GameSession {
    engine: GameEngine,
    log: EventLog,
}

impl GameSession {
    /// Start a session in `world` at `initial`.
    ///
    /// The log starts with the initial location.
    pub fn new(world: World, initial: LocationId, rules: GameRules) -> FictionResult<Self> {
        let engine = GameEngine::new(world, initial, rules)?;
        let mut log = EventLog::new();
        let start = engine.current_location();
        log.append(start.id, start.long_description.clone());
        info!(initial = %initial, "session started");
        Ok(Self { engine, log })
    }

    /// Start a session from a JSON world document.
    pub fn from_json(json: &str, initial: LocationId, rules: GameRules) -> FictionResult<Self> {
        let world = World::from_json(json)?;
        Self::new(world, initial, rules)
    }

    /// Get the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Get the event log.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Whether commands are still accepted.
    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// The outcome so far.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    /// The visited location IDs, in order.
    pub fn trace(&self) -> Vec<LocationId> {
        self.log.trace()
    }

    /// Process a line of player input and return the response.
    ///
    /// The current location's exits are matched first, so an exit keyword
    /// such as `use stairs` or `look` wins over the global commands.
    pub fn process(&mut self, input: &str) -> FictionResult<String> {
        if !self.engine.is_running() {
            return Err(FictionError::GameOver);
        }
        let keyword = normalize_name(input);
        let command = if self.engine.current_location().destination(&keyword).is_some() {
            Command::Move { keyword }
        } else {
            parse_command(input)?
        };
        self.execute(command)
    }

    /// Execute a parsed command.
    ///
    /// Rejected commands leave the session untouched. Any other command is
    /// recorded as the way out of the current location and followed by the
    /// end-of-game check, even when an item operation fails.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        if !self.engine.is_running() {
            return Err(FictionError::GameOver);
        }
        let result = match &command {
            Command::Move { keyword } => return self.do_move(keyword),
            Command::Take { item } => self.do_take(item),
            Command::Drop { item } => self.do_drop(item),
            Command::Use { item } => self.do_use(item),
            Command::Menu(menu) => Ok(self.do_menu(*menu)),
        };
        match result {
            Err(e) if !e.is_recoverable() => Err(e),
            result => {
                self.log.set_outgoing_command(command.to_string());
                self.engine.evaluate();
                result
            }
        }
    }

    fn do_move(&mut self, keyword: &str) -> FictionResult<String> {
        let outcome = self.engine.attempt_move(keyword)?;
        self.log.set_outgoing_command(keyword);
        let response = match outcome {
            MoveOutcome::Arrived(id) => {
                let long = self.engine.resolve_location(id)?.long_description.clone();
                self.log.append(id, long);
                self.describe_current()
            }
            MoveOutcome::Blocked(id) => {
                debug!(location = %id, "door locked");
                "The door is locked. You'll need a key.".to_string()
            }
        };
        self.engine.evaluate();
        Ok(response)
    }

    fn do_take(&mut self, item: &str) -> FictionResult<String> {
        self.engine.take(item)?;
        Ok(format!("You pick up the {item}."))
    }

    fn do_drop(&mut self, item: &str) -> FictionResult<String> {
        match self.engine.drop_item(item)? {
            DropOutcome::Deposited { points } => {
                Ok(format!("You deposit the {item}. +{points} points!"))
            }
            DropOutcome::Dropped => Ok(format!("You drop the {item}.")),
        }
    }

    fn do_use(&mut self, item: &str) -> FictionResult<String> {
        let outcome = self.engine.use_item(item)?;
        Ok(outcome.to_string())
    }

    fn do_menu(&mut self, menu: MenuCommand) -> String {
        match menu {
            MenuCommand::Look => self.do_look(),
            MenuCommand::Inventory => self.do_inventory(),
            MenuCommand::Score => format!(
                "Score: {}  Moves remaining: {}/{}",
                self.engine.score(),
                self.engine.moves_remaining(),
                self.engine.max_moves()
            ),
            MenuCommand::Log => self.log.render_text(),
            MenuCommand::Quit => {
                self.engine.quit();
                "Goodbye!".to_string()
            }
        }
    }

    fn do_look(&self) -> String {
        let location = self.engine.current_location();
        let mut output = location.long_description.clone();
        for item in &location.items {
            output.push_str(&format!("\nYou see a {item} here."));
        }
        output
    }

    fn do_inventory(&self) -> String {
        let items = self.engine.inventory_names();
        if items.is_empty() {
            "You are not carrying anything.".to_string()
        } else {
            format!("You are carrying: {}", items.join(", "))
        }
    }

    /// The text for arriving at the current location, marking it visited.
    pub fn describe_current(&mut self) -> String {
        self.engine.describe_current()
    }

    /// Every command accepted at the current location.
    pub fn available_commands(&self) -> Vec<&str> {
        self.engine
            .current_location()
            .commands()
            .chain(MenuCommand::ALL.iter().map(|m| m.name()))
            .collect()
    }

    /// A close match for rejected input among the commands available here.
    pub fn suggest(&self, input: &str) -> Option<&str> {
        suggest(self.available_commands(), input)
    }
}
