use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(world_path: &Path) -> Result<(), String> {
    let world = super::load_world(world_path)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Location", "Exits", "Items", "Locked"]);
    for location in world.locations() {
        let exits: Vec<String> = location
            .available_commands
            .iter()
            .map(|(keyword, to)| format!("{keyword} -> {to}"))
            .collect();
        table.add_row(vec![
            location.id.to_string(),
            location.brief_description.clone(),
            exits.join("\n"),
            location.items.join(", "),
            if location.locked { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    println!("  All checks passed for '{}'.", world_path.display());
    println!(
        "  {} locations, {} items, {} moves",
        world.location_count(),
        world.items().len(),
        world.max_moves()
    );
    Ok(())
}
