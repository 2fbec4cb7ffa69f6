//! Command parsing for player input.

use std::fmt;

use wf_core::normalize_name;

use crate::error::{FictionError, FictionResult};

/// A global command that is available at every location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    /// Show the full description of the current location.
    Look,
    /// List carried items.
    Inventory,
    /// Show score and remaining moves.
    Score,
    /// Replay the event log.
    Log,
    /// End the session.
    Quit,
}

impl MenuCommand {
    /// Every menu command, in the order menus list them.
    pub const ALL: [Self; 5] = [
        Self::Look,
        Self::Inventory,
        Self::Score,
        Self::Log,
        Self::Quit,
    ];

    /// Parse a menu keyword. Matching is exact on normalized input.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "look" => Some(Self::Look),
            "inventory" => Some(Self::Inventory),
            "score" => Some(Self::Score),
            "log" => Some(Self::Log),
            "quit" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Get the keyword for this command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Look => "look",
            Self::Inventory => "inventory",
            Self::Score => "score",
            Self::Log => "log",
            Self::Quit => "quit",
        }
    }
}

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Follow one of the current location's exits.
    Move {
        /// The movement keyword, e.g. `go east`.
        keyword: String,
    },
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Put down or deposit an item.
    Drop {
        /// The item name.
        item: String,
    },
    /// Use a carried item.
    Use {
        /// The item name.
        item: String,
    },
    /// A global menu command.
    Menu(MenuCommand),
}

const TAKE_PREFIX: &str = "take ";
const DROP_PREFIX: &str = "drop ";
const USE_PREFIX: &str = "use ";

/// Parse a player input string into a command.
///
/// Input is trimmed, lowercased and has its whitespace collapsed. Menu
/// keywords and the `take`/`drop`/`use` prefixes are reserved; anything else
/// is taken to be a movement keyword, which the engine checks against the
/// current location's exits.
pub fn parse_command(input: &str) -> FictionResult<Command> {
    let input = normalize_name(input);
    if input.is_empty() {
        return Err(FictionError::InvalidCommand(input));
    }

    if let Some(menu) = MenuCommand::parse(&input) {
        return Ok(Command::Menu(menu));
    }
    if let Some(item) = input.strip_prefix(TAKE_PREFIX) {
        return Ok(Command::Take { item: item.into() });
    }
    if let Some(item) = input.strip_prefix(DROP_PREFIX) {
        return Ok(Command::Drop { item: item.into() });
    }
    if let Some(item) = input.strip_prefix(USE_PREFIX) {
        return Ok(Command::Use { item: item.into() });
    }
    if matches!(input.as_str(), "take" | "drop" | "use") {
        return Err(FictionError::InvalidCommand(input));
    }

    Ok(Command::Move { keyword: input })
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move { keyword } => f.write_str(keyword),
            Self::Take { item } => write!(f, "{TAKE_PREFIX}{item}"),
            Self::Drop { item } => write!(f, "{DROP_PREFIX}{item}"),
            Self::Use { item } => write!(f, "{USE_PREFIX}{item}"),
            Self::Menu(menu) => f.write_str(menu.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_menu() {
        for menu in MenuCommand::ALL {
            assert_eq!(parse_command(menu.name()).unwrap(), Command::Menu(menu));
        }
        assert_eq!(
            parse_command("  INVENTORY ").unwrap(),
            Command::Menu(MenuCommand::Inventory)
        );
    }

    #[test]
    fn parse_item_verbs() {
        assert_eq!(
            parse_command("take usb drive").unwrap(),
            Command::Take {
                item: "usb drive".to_string()
            }
        );
        assert_eq!(
            parse_command("Drop  Lucky   Mug").unwrap(),
            Command::Drop {
                item: "lucky mug".to_string()
            }
        );
        assert_eq!(
            parse_command("use key").unwrap(),
            Command::Use {
                item: "key".to_string()
            }
        );
    }

    #[test]
    fn bare_item_verbs_are_invalid() {
        assert!(matches!(
            parse_command("take"),
            Err(FictionError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_command("use   "),
            Err(FictionError::InvalidCommand(_))
        ));
    }

    #[test]
    fn everything_else_is_movement() {
        assert_eq!(
            parse_command("Go East").unwrap(),
            Command::Move {
                keyword: "go east".to_string()
            }
        );
        assert_eq!(
            parse_command("dance wildly").unwrap(),
            Command::Move {
                keyword: "dance wildly".to_string()
            }
        );
    }

    #[test]
    fn empty_input_is_invalid() {
        assert!(matches!(
            parse_command(""),
            Err(FictionError::InvalidCommand(_))
        ));
        assert!(matches!(
            parse_command("   "),
            Err(FictionError::InvalidCommand(_))
        ));
    }

    #[test]
    fn display_is_canonical() {
        let cmd = parse_command("TAKE   the   Key").unwrap();
        assert_eq!(cmd.to_string(), "take the key");
        assert_eq!(Command::Menu(MenuCommand::Log).to_string(), "log");
        assert_eq!(parse_command("go  south").unwrap().to_string(), "go south");
    }
}
