//! Command parsing and suggestions.

mod command;
mod resolver;

pub use command::{Command, MenuCommand, parse_command};
pub use resolver::{SUGGESTION_THRESHOLD, suggest};
