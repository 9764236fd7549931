use colored::*;
use console::Term;
use dialoguer::{ theme::ColorfulTheme, Confirm, Input, MultiSelect, Select };
use indicatif::{ ProgressBar, ProgressStyle };
use std::time::Duration;
use textwrap::wrap;
use tokio::task::JoinHandle;

use rtlforge::implementations::render::{ sanitize_markdown, validate_diagram, Viewer };
use rtlforge::implementations::session::PROGRESS_INTERVAL;
use rtlforge::models::common::EXAMPLE_PROMPTS;
use rtlforge::{ AppState, Artifact, GenerationResult, HdlLanguage, OperationMode };

/// UI theme for consistent appearance
pub fn get_theme() -> ColorfulTheme {
    ColorfulTheme::default()
}

fn term_width() -> usize {
    Term::stdout().size().1 as usize
}

fn to_io(e: dialoguer::Error) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, e)
}

/// Print a section header
pub fn print_header(title: &str) {
    let title = format!(" {} ", title);
    println!("\n{}\n", title.bold().white().on_blue());
}

/// Print Markdown with light formatting and proper wrapping
pub fn print_text(text: &str) {
    let width = term_width().saturating_sub(10).max(20);
    let mut in_fence = false;
    for line in sanitize_markdown(text).lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            println!("{}", line.dimmed());
        } else if in_fence {
            println!("{}", line.cyan());
        } else if line.starts_with('#') {
            println!("{}", line.trim_start_matches('#').trim().bold().underline());
        } else if line.trim_start().starts_with('-') || line.trim_start().starts_with('*') || line.starts_with('|') {
            println!("{}", line);
        } else {
            for wrapped_line in wrap(line, width) {
                println!("{}", wrapped_line);
            }
        }
    }
}

/// Print source code with line numbers
pub fn print_code(code: &str) {
    let digits = code.lines().count().max(1).to_string().len();
    for (i, line) in code.lines().enumerate() {
        println!("{} {}", format!("{:>width$} |", i + 1, width = digits).dimmed(), line);
    }
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "ERROR:".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "WARNING:".yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "SUCCESS:".green().bold(), message);
}

/// Print information
pub fn print_info(message: &str) {
    println!("{} {}", "INFO:".blue().bold(), message);
}

/// Print a formatted result
pub fn print_result(label: &str, value: &str) {
    println!("{}: {}", label.bold(), value);
}

/// Show one artifact in the viewer its language tag calls for.
///
/// Render failures stay inside this artifact's panel.
pub fn display_artifact(key: &str, artifact: &Artifact) {
    let viewer = Viewer::for_language(&artifact.language);
    print_header(&format!("{} ({})", artifact.filename, key));
    print_result("Language", &artifact.language);
    println!();

    match viewer {
        Viewer::Markdown => print_text(&artifact.code),
        Viewer::Code => print_code(&artifact.code),
        Viewer::Diagram => {
            match validate_diagram(&artifact.code) {
                Ok(()) => print_code(&artifact.code),
                Err(e) => {
                    print_warning(&e.to_string());
                    print_code(&artifact.code);
                }
            }
        }
    }
}

/// Show every artifact, active tab first
pub fn display_result(result: &GenerationResult, active_tab: Option<&str>) {
    let tabs = result.keys().collect::<Vec<_>>().join(" | ");
    print_result("Artifacts", &tabs);

    if let Some(active) = active_tab.and_then(|key| result.get(key).map(|a| (key, a))) {
        display_artifact(active.0, active.1);
    }
    for (key, artifact) in result.iter() {
        if Some(key) != active_tab {
            display_artifact(key, artifact);
        }
    }
}

/// Interactive selection of one value from a list, defaulting to `current`
pub fn select_from(prompt: &str, items: &[&str], current: &str) -> std::io::Result<String> {
    let default = items
        .iter()
        .position(|i| *i == current)
        .unwrap_or(0);

    let selection = Select::with_theme(&get_theme())
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact()
        .map_err(to_io)?;

    Ok(items[selection].to_string())
}

/// Interactive selection of the operation mode
pub fn select_mode(current: OperationMode) -> std::io::Result<OperationMode> {
    let modes = ["Generate deliverables", "Explore architectures"];
    let default = if current == OperationMode::Explore { 1 } else { 0 };

    let selection = Select::with_theme(&get_theme())
        .with_prompt("Select mode")
        .items(&modes)
        .default(default)
        .interact()
        .map_err(to_io)?;

    Ok(if selection == 1 { OperationMode::Explore } else { OperationMode::Generate })
}

/// Interactive selection of the target HDL
pub fn select_hdl_language(current: HdlLanguage) -> std::io::Result<HdlLanguage> {
    let languages = [HdlLanguage::Verilog, HdlLanguage::Vhdl];
    let names: Vec<&str> = languages.iter().map(|l| l.as_str()).collect();
    let chosen = select_from("Select target HDL", &names, current.as_str())?;
    Ok(HdlLanguage::parse(&chosen).unwrap_or(current))
}

/// Ask for the design description, offering the canned examples
pub fn input_description(current: &str) -> std::io::Result<String> {
    let mut choices = vec!["Keep / edit current description"];
    choices.extend_from_slice(EXAMPLE_PROMPTS);

    let selection = Select::with_theme(&get_theme())
        .with_prompt("Design description")
        .items(&choices)
        .default(0)
        .interact()
        .map_err(to_io)?;

    let initial = if selection == 0 { current } else { choices[selection] };
    Input::with_theme(&get_theme())
        .with_prompt("Describe the circuit")
        .with_initial_text(initial)
        .validate_with(|input: &String| -> Result<(), &str> {
            if input.trim().is_empty() { Err("Description must not be empty") } else { Ok(()) }
        })
        .interact_text()
        .map_err(to_io)
}

/// Check or uncheck deliverables
pub fn select_deliverables(state: &AppState) -> std::io::Result<AppState> {
    let names: Vec<&str> = state.deliverables
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    let checked: Vec<bool> = state.deliverables
        .iter()
        .map(|d| d.checked)
        .collect();

    let picked = MultiSelect::with_theme(&get_theme())
        .with_prompt("Select deliverables (space to toggle)")
        .items(&names)
        .defaults(&checked)
        .interact()
        .map_err(to_io)?;

    let ids: Vec<String> = picked
        .into_iter()
        .map(|i| state.deliverables[i].id.clone())
        .collect();
    Ok(state.with_selection(&ids))
}

/// Confirm an action with the user
pub fn confirm_action(prompt: &str, default: bool) -> std::io::Result<bool> {
    Confirm::with_theme(&get_theme())
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(to_io)
}

/// Display a spinner while waiting for an operation to complete
pub fn spinner_with_message(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

/// Spinner whose message cycles through a fixed rotation until stopped
pub struct ProgressTicker {
    spinner: ProgressBar,
    rotation: JoinHandle<()>,
}

impl ProgressTicker {
    pub fn start(messages: &'static [&'static str]) -> Self {
        let spinner = spinner_with_message(messages.first().copied().unwrap_or("Working..."));
        let handle = spinner.clone();
        let rotation = tokio::spawn(async move {
            let mut interval = tokio::time::interval(PROGRESS_INTERVAL);
            interval.tick().await;
            let mut i = 0;
            loop {
                interval.tick().await;
                i = (i + 1) % messages.len().max(1);
                if let Some(message) = messages.get(i) {
                    handle.set_message(*message);
                }
            }
        });
        Self { spinner, rotation }
    }

    /// Cancel the rotation and clear the spinner, whatever the outcome
    pub fn stop(self) {
        self.rotation.abort();
        self.spinner.finish_and_clear();
    }
}
