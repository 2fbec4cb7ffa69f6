use serde::Serialize;
use tracing::{debug, info};
use wf_core::{LocationId, World};
use wf_fiction::{GameSession, GameStatus};

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::script::Script;

/// One replayed command and what the session answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// The command as written in the script.
    pub command: String,
    /// The response, or the message of a rejected command.
    pub response: String,
    /// Whether the session accepted the command.
    pub accepted: bool,
}

/// Summary of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimReport {
    /// Visited location IDs, in order.
    pub trace: Vec<LocationId>,
    /// Final outcome.
    pub status: GameStatus,
    /// Final score.
    pub score: u32,
    /// Moves left at the end.
    pub moves_remaining: u32,
    /// Items still carried.
    pub inventory: Vec<String>,
    /// Number of script commands that were fed to the session.
    pub steps: usize,
}

/// Replays a command script against a fresh session.
///
/// Commands go through [`GameSession::process`] one at a time. The run
/// stops early once the session ends.
#[derive(Debug, Clone)]
pub struct Simulation {
    session: GameSession,
    script: Script,
    cursor: usize,
    transcript: Vec<Step>,
}

impl Simulation {
    /// Create a simulation from a world, a script and a configuration.
    pub fn new(world: World, script: Script, config: SimConfig) -> SimResult<Self> {
        let session = GameSession::new(world, config.initial_location, config.rules)?;
        Ok(Self {
            session,
            script,
            cursor: 0,
            transcript: Vec::new(),
        })
    }

    /// Create a simulation from a JSON world document.
    pub fn from_json(json: &str, script: Script, config: SimConfig) -> SimResult<Self> {
        let world = World::from_json(json)?;
        Self::new(world, script, config)
    }

    /// Replay the next command.
    ///
    /// Returns `None` once the script is exhausted or the session has ended.
    /// Commands the session rejects are recorded and the run continues.
    pub fn step(&mut self) -> SimResult<Option<&Step>> {
        if !self.session.is_running() {
            return Ok(None);
        }
        let Some(command) = self.script.commands().get(self.cursor) else {
            return Ok(None);
        };
        let command = command.clone();
        self.cursor += 1;

        let step = match self.session.process(&command) {
            Ok(response) => Step {
                command,
                response,
                accepted: true,
            },
            Err(e) if e.is_recoverable() => {
                debug!(command = %command, error = %e, "command rejected");
                Step {
                    response: e.to_string(),
                    command,
                    accepted: false,
                }
            }
            Err(e) => return Err(e.into()),
        };
        self.transcript.push(step);
        Ok(self.transcript.last())
    }

    /// Replay until the script runs out or the session ends.
    pub fn run(&mut self) -> SimResult<GameStatus> {
        while self.step()?.is_some() {}
        let status = self.session.status();
        info!(
            status = %status,
            steps = self.cursor,
            score = self.session.engine().score(),
            "simulation finished"
        );
        Ok(status)
    }

    /// The visited location IDs, in order.
    pub fn trace(&self) -> Vec<LocationId> {
        self.session.trace()
    }

    /// The outcome so far.
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// The underlying session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Every replayed command with its response.
    pub fn transcript(&self) -> &[Step] {
        &self.transcript
    }

    /// Summarize the run so far.
    pub fn report(&self) -> SimReport {
        let engine = self.session.engine();
        SimReport {
            trace: self.trace(),
            status: self.status(),
            score: engine.score(),
            moves_remaining: engine.moves_remaining(),
            inventory: engine.inventory_names(),
            steps: self.cursor,
        }
    }
}
