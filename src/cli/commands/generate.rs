use anyhow::{ anyhow, Result };
use std::path::Path;

use rtlforge::{ AppState, DeliverableId, DeliverableRegistry, DesignAssistant, HdlLanguage, OperationMode, Session };

use crate::cli::commands::{ run_submission, Persistence };
use crate::cli::ui;

/// Command-line overrides for the saved form
pub struct GenerateArgs<'a> {
    pub description: Option<&'a str>,
    pub language: Option<&'a str>,
    pub deliverables: Option<&'a [String]>,
    pub protocol: Option<&'a str>,
    pub architecture: Option<&'a str>,
    pub sim_tool: Option<&'a str>,
    pub thinking: Option<bool>,
}

/// Apply the overrides on top of `state`
pub fn apply_overrides(state: AppState, args: &GenerateArgs<'_>) -> Result<AppState> {
    let mut state = state.with_mode(OperationMode::Generate);

    if let Some(description) = args.description {
        state = state.with_description(description);
    }
    if let Some(language) = args.language {
        let language = HdlLanguage::parse(language).ok_or_else(||
            anyhow!("Unsupported HDL language: {}", language)
        )?;
        state = state.with_hdl_language(language);
    }
    if let Some(ids) = args.deliverables {
        for id in ids {
            let known = id
                .parse::<DeliverableId>()
                .ok()
                .and_then(|id| DeliverableRegistry::lookup(id.as_str()))
                .map_or(false, |d| d.offered);
            if !known {
                return Err(anyhow!("Unknown deliverable '{}'. Run `rtlforge list` to see the options.", id));
            }
        }
        state = state.with_selection(ids);
    }
    if let Some(protocol) = args.protocol {
        state = state.with_protocol(protocol);
    }
    if let Some(architecture) = args.architecture {
        state = state.with_architecture(architecture);
    }
    if let Some(tool) = args.sim_tool {
        state = state.with_simulation_tool(tool);
    }
    if let Some(thinking) = args.thinking {
        state = state.with_thinking_mode(thinking);
    }

    Ok(state)
}

/// Generate deliverables for the saved form plus any overrides
pub async fn execute(
    assistant: &dyn DesignAssistant,
    persistence: &Persistence,
    args: GenerateArgs<'_>,
    output: Option<&Path>,
    output_format: &str
) -> Result<()> {
    let state = apply_overrides(AppState::restore(persistence.load()), &args)?;
    persistence.save(&state);

    if state.selected_deliverables().is_empty() {
        ui::print_warning("No deliverables selected; the model will have nothing to generate.");
    }
    if output_format != "json" {
        ui::print_header("Generating Hardware Deliverables");
        ui::print_result("Language", state.hdl_language.as_str());
        ui::print_result("Deliverables", &state.selected_deliverables().join(", "));
    }

    let mut session = Session::new(state);
    run_submission(&mut session, assistant, output, output_format).await
}
