use std::path::Path;

use colored::Colorize;

use wf_core::LocationId;
use wf_fiction::GameStatus;
use wf_simulation::{Script, SimConfig, Simulation};

use super::RuleArgs;

pub fn run(
    world: &Path,
    script: &Path,
    start: u32,
    rule_args: &RuleArgs,
    verbose: bool,
    json: bool,
) -> Result<(), String> {
    let world = super::load_world(world)?;
    let script = Script::load(script).map_err(|e| e.to_string())?;
    let config = SimConfig::default()
        .with_initial_location(start)
        .with_rules(rule_args.rules(&world));

    let mut sim = Simulation::new(world, script, config)
        .map_err(|e| format!("failed to start simulation: {e}"))?;
    sim.run().map_err(|e| format!("simulation error: {e}"))?;
    let report = sim.report();

    if json {
        let out = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    if verbose {
        println!("  {}", "Replay".bold().underline());
        println!();
        for (i, step) in sim.transcript().iter().enumerate() {
            let label = format!("[{:>3}]", i + 1).dimmed();
            let command = if step.accepted {
                step.command.cyan()
            } else {
                step.command.yellow()
            };
            println!("  {label} > {command}");
            for line in step.response.lines() {
                println!("        {line}");
            }
        }
        println!();
    }

    let status = match report.status {
        GameStatus::Won => "won".green().bold(),
        GameStatus::Lost => "lost".red().bold(),
        GameStatus::Ongoing => "ongoing".normal(),
    };
    println!("  {} {}", "Trace:".bold(), format_trace(&report.trace));
    println!("  {} {status}", "Outcome:".bold());
    println!("  {} {}", "Score:".bold(), report.score);
    println!(
        "  {} {}/{}",
        "Moves remaining:".bold(),
        report.moves_remaining,
        sim.session().engine().max_moves()
    );
    if !report.inventory.is_empty() {
        println!("  {} {}", "Carrying:".bold(), report.inventory.join(", "));
    }
    Ok(())
}

fn format_trace(trace: &[LocationId]) -> String {
    trace
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
