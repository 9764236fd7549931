use anyhow::Result;
use std::path::Path;

use rtlforge::{ AppState, DesignAssistant, OperationMode, Session };

use crate::cli::commands::{ run_submission, Persistence };
use crate::cli::ui;

/// Architecture exploration command
pub async fn execute(
    assistant: &dyn DesignAssistant,
    persistence: &Persistence,
    description: Option<&str>,
    thinking: Option<bool>,
    output: Option<&Path>,
    output_format: &str
) -> Result<()> {
    let mut state = AppState::restore(persistence.load()).with_mode(OperationMode::Explore);
    if let Some(description) = description {
        state = state.with_description(description);
    }
    if let Some(thinking) = thinking {
        state = state.with_thinking_mode(thinking);
    }
    persistence.save(&state);

    if output_format != "json" {
        ui::print_header("Exploring Microarchitectures");
    }

    let mut session = Session::new(state);
    run_submission(&mut session, assistant, output, output_format).await
}
