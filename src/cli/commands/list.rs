use anyhow::Result;
use colored::*;

use rtlforge::{ AppState, DeliverableRegistry };

use crate::cli::commands::Persistence;
use crate::cli::ui;

/// List deliverables with their defaults and the saved selection
pub fn execute(persistence: &Persistence, output_format: &str) -> Result<()> {
    let state = AppState::restore(persistence.load());
    let selected = state.selected_deliverables();

    if output_format == "json" {
        let entries: Vec<_> = DeliverableRegistry::catalog()
            .map(|d| {
                serde_json::json!({
                    "id": d.id.as_str(),
                    "name": d.display_name,
                    "default": d.default_selected,
                    "selected": selected.iter().any(|s| s == d.id.as_str()),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    ui::print_header("Deliverables");
    for d in DeliverableRegistry::catalog() {
        let mark = if selected.iter().any(|s| s == d.id.as_str()) { "[x]" } else { "[ ]" };
        let default = if d.default_selected { " (default)".dimmed().to_string() } else { String::new() };
        println!("{} {:<20} {}{}", mark, d.id.as_str().cyan(), d.display_name, default);
    }
    Ok(())
}
