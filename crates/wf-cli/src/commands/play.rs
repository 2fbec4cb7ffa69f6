use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use wf_core::LocationId;
use wf_fiction::{FictionError, GameSession, GameStatus};

use super::RuleArgs;

pub fn run(world: &Path, start: u32, rule_args: &RuleArgs) -> Result<(), String> {
    let world = super::load_world(world)?;
    let rules = rule_args.rules(&world);
    let mut session = GameSession::new(world, LocationId(start), rules)
        .map_err(|e| format!("failed to start game: {e}"))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(&mut session, stdin.lock(), stdout.lock()).map_err(|e| e.to_string())
}

/// Drive a session from line-based input until it ends or the input runs out.
fn run_loop<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut input: R,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "{}\n", session.describe_current())?;
    let mut line = String::new();

    while session.is_running() {
        write_menu(session, &mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }

        match session.process(&line) {
            Ok(response) => writeln!(out, "{response}\n")?,
            Err(FictionError::InvalidCommand(_)) => {
                let mut message = "That's not a valid command.".to_string();
                if let Some(hint) = session.suggest(&line) {
                    message.push_str(&format!(" Did you mean '{hint}'?"));
                }
                writeln!(out, "{}\n", message.yellow())?;
            }
            Err(e) if e.is_recoverable() => writeln!(out, "{}\n", e.to_string().yellow())?,
            Err(FictionError::GameOver) => break,
            Err(e) => return Err(io::Error::other(e.to_string())),
        }
    }

    let engine = session.engine();
    match session.status() {
        GameStatus::Won => writeln!(
            out,
            "{} You brought everything back. Final score: {}",
            "You win!".green().bold(),
            engine.score()
        )?,
        GameStatus::Lost => writeln!(
            out,
            "{} You ran out of moves. Final score: {}",
            "Game over.".red().bold(),
            engine.score()
        )?,
        GameStatus::Ongoing => writeln!(out, "Final score: {}", engine.score())?,
    }
    Ok(())
}

fn write_menu<W: Write>(session: &GameSession, out: &mut W) -> io::Result<()> {
    let exits: Vec<_> = session.engine().current_location().commands().collect();
    writeln!(
        out,
        "{} {}",
        "Exits:".dimmed(),
        if exits.is_empty() {
            "none".to_string()
        } else {
            exits.join(", ")
        }
    )?;
    writeln!(
        out,
        "{} look, inventory, score, log, quit, take <item>, drop <item>, use <item>",
        "Menu:".dimmed()
    )
}
