use anyhow::Result;

use rtlforge::AppState;

use crate::cli::commands::Persistence;
use crate::cli::ui;
use crate::cli::StateAction;

pub fn execute(persistence: &Persistence, action: &StateAction) -> Result<()> {
    match action {
        StateAction::Show => {
            match persistence.load() {
                Some(saved) => {
                    let state = AppState::restore(Some(saved));
                    println!("{}", serde_json::to_string_pretty(&state)?);
                }
                None => ui::print_info("No saved state; defaults will be used."),
            }
        }
        StateAction::Reset => {
            persistence.reset();
            ui::print_success("Saved state cleared.");
        }
    }
    Ok(())
}
