use anyhow::Result;
use std::path::Path;

use rtlforge::models::common::{ ARCHITECTURES, PROTOCOLS, SIMULATION_TOOLS };
use rtlforge::{ AppState, DesignAssistant, OperationMode, Session };

use crate::cli::commands::{ run_submission, Persistence };
use crate::cli::ui;

/// Walk the user through the form
fn fill_form(state: AppState) -> std::io::Result<AppState> {
    let mut state = state.with_mode(ui::select_mode(state.operation_mode)?);
    state = state.with_description(ui::input_description(&state.description)?);

    if state.operation_mode == OperationMode::Generate {
        state = state.with_hdl_language(ui::select_hdl_language(state.hdl_language)?);
        state = state.with_protocol(
            ui::select_from("Interface protocol", PROTOCOLS, &state.protocol)?
        );
        state = state.with_architecture(
            ui::select_from("Target architecture", ARCHITECTURES, &state.architecture)?
        );
        state = ui::select_deliverables(&state)?;
        if state.simulation_scripts_selected() {
            state = state.with_simulation_tool(
                ui::select_from("Target simulator", SIMULATION_TOOLS, &state.simulation_tool)?
            );
        }
    }

    let thinking = ui::confirm_action(
        "Enable extended reasoning (slower, higher quality)?",
        state.thinking_mode
    )?;
    Ok(state.with_thinking_mode(thinking))
}

/// Interactive form, saved as it is filled in and then submitted
pub async fn execute(
    assistant: &dyn DesignAssistant,
    persistence: &Persistence,
    output: Option<&Path>,
    output_format: &str
) -> Result<()> {
    ui::print_header("RTL Forge");

    let state = fill_form(AppState::restore(persistence.load()))?;
    persistence.save(&state);

    if !ui::confirm_action("Submit this request?", true)? {
        ui::print_info("Request not submitted; your selections have been saved.");
        return Ok(());
    }

    let mut session = Session::new(state);
    run_submission(&mut session, assistant, output, output_format).await
}
