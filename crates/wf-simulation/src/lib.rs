//! Scripted, non-interactive replay of Wayfarer sessions.
//!
//! A [`Simulation`] feeds a fixed command [`Script`] through the same
//! [`wf_fiction::GameSession`] entry point the interactive loop uses, so a
//! replay can never disagree with live play. Its output is the trace of
//! visited locations plus the final outcome.

/// Configuration types for simulation runs.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Command scripts and their file formats.
pub mod script;
/// The replay driver.
pub mod simulation;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`script::Script`].
pub use script::Script;
/// Re-exports of [`simulation::Simulation`], [`simulation::SimReport`] and [`simulation::Step`].
pub use simulation::{SimReport, Simulation, Step};
