use anyhow::Result;
use std::path::Path;

use rtlforge::{
    export_artifacts,
    progress_messages,
    DesignAssistant,
    KeyValueStore,
    RecoverableError,
    Session,
    StatePersistence,
};

use crate::cli::ui;

pub mod generate;
pub mod explore;
pub mod interactive;
pub mod list;
pub mod state;

pub type Persistence = StatePersistence<Box<dyn KeyValueStore>>;

/// Submit the session's form, show the outcome and optionally export it.
///
/// Generation failures are reported to the user and become the command's
/// error; nothing partial is shown.
pub async fn run_submission(
    session: &mut Session,
    assistant: &dyn DesignAssistant,
    output: Option<&Path>,
    output_format: &str
) -> Result<()> {
    let ticker = ui::ProgressTicker::start(progress_messages(session.state.operation_mode));
    let outcome = session.submit(assistant).await;
    ticker.stop();

    match outcome {
        None => {
            ui::print_warning("Nothing to submit: the design description is empty.");
            return Ok(());
        }
        Some(Err(e)) => {
            if let Some(message) = &session.error {
                ui::print_error(message);
            }
            if let Some(hint) = e.recovery_strategy() {
                ui::print_info(&hint);
            }
            return Err(e.into());
        }
        Some(Ok(())) => {}
    }

    let Some(result) = session.output.as_ref() else {
        return Ok(());
    };

    if result.is_empty() {
        ui::print_warning("The model did not return any of the requested deliverables.");
        return Ok(());
    }

    if output_format == "json" {
        println!("{}", serde_json::to_string_pretty(&result.to_json())?);
    } else {
        ui::display_result(result, session.active_tab.as_deref());
    }

    let Some(dir) = output else {
        if output_format != "json" {
            ui::print_info("Pass -o [DIR] to save these files.");
        }
        return Ok(());
    };
    let written = export_artifacts(result, dir)?;
    if output_format != "json" {
        for path in &written {
            ui::print_success(&format!("Saved {}", path.display()));
        }
    }

    Ok(())
}
