use std::path::{ Path, PathBuf };
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use log::{ debug, info, warn };

use rtlforge::{
    DesignAssistant,
    FileStore,
    GeminiClient,
    GeneratorConfig,
    KeyValueStore,
    LLMHdlGenerator,
    MemoryStore,
    RecoverableError,
    RtlForgeError,
    StatePersistence,
};
use rtlforge::implementations::render::resolve_export_dir;
mod cli;
use cli::commands::generate::GenerateArgs;
use cli::commands::Persistence;
use cli::{ Commands, RtlForgeCli };

fn load_config(cli: &RtlForgeCli) -> Result<GeneratorConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            GeneratorConfig::from_file(path).map_err(RtlForgeError::from)?
        }
        None => GeneratorConfig::default(),
    };
    if let Some(dir) = &cli.state_dir {
        config.state_dir = Some(dir.clone());
    }
    Ok(config)
}

/// Where `-o` asked the results to go, if anywhere
fn export_dir(output: &Option<Option<PathBuf>>) -> Option<PathBuf> {
    let requested: Option<Option<&Path>> = output.as_ref().map(|dir| dir.as_deref());
    resolve_export_dir(requested, chrono::Utc::now())
}

fn open_persistence(cli: &RtlForgeCli, config: &GeneratorConfig) -> Persistence {
    let store: Box<dyn KeyValueStore> = if cli.no_persist {
        debug!("Form persistence disabled");
        Box::new(MemoryStore::new())
    } else {
        debug!("Form state directory: {}", config.state_dir().display());
        Box::new(FileStore::new(config.state_dir()))
    };
    StatePersistence::new(store)
}

/// Build the model-backed assistant; a missing credential is reported here, once
fn build_assistant(config: &GeneratorConfig) -> Result<Arc<dyn DesignAssistant>> {
    let client = GeminiClient::from_config(config).map_err(|e| {
        let e = RtlForgeError::from(e);
        cli::ui::print_error(&e.to_string());
        if let Some(hint) = e.recovery_strategy() {
            cli::ui::print_info(&hint);
        }
        e
    })?;
    info!("Using model {}", config.model());
    Ok(Arc::new(LLMHdlGenerator::new(Arc::new(client))))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = RtlForgeCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    if let Err(e) = dotenv::dotenv() {
        debug!("No .env file loaded: {}", e);
    }

    let config = load_config(&cli)?;
    let persistence = open_persistence(&cli, &config);
    let output_format = cli.output_format.as_str();
    if output_format != "text" && output_format != "json" {
        warn!("Unknown output format '{}', using text", output_format);
    }

    match &cli.command {
        Commands::Generate {
            description,
            language,
            deliverables,
            protocol,
            architecture,
            sim_tool,
            thinking,
            output,
        } => {
            let assistant = build_assistant(&config)?;
            let args = GenerateArgs {
                description: description.as_deref(),
                language: language.as_deref(),
                deliverables: deliverables.as_deref(),
                protocol: protocol.as_deref(),
                architecture: architecture.as_deref(),
                sim_tool: sim_tool.as_deref(),
                thinking: *thinking,
            };
            cli::commands::generate::execute(
                assistant.as_ref(),
                &persistence,
                args,
                export_dir(output).as_deref(),
                output_format
            ).await?;
        }

        Commands::Explore { description, thinking, output } => {
            let assistant = build_assistant(&config)?;
            cli::commands::explore::execute(
                assistant.as_ref(),
                &persistence,
                description.as_deref(),
                *thinking,
                export_dir(output).as_deref(),
                output_format
            ).await?;
        }

        Commands::Interactive { output } => {
            let assistant = build_assistant(&config)?;
            cli::commands::interactive::execute(
                assistant.as_ref(),
                &persistence,
                export_dir(output).as_deref(),
                output_format
            ).await?;
        }

        Commands::List => {
            cli::commands::list::execute(&persistence, output_format)?;
        }

        Commands::State { action } => {
            cli::commands::state::execute(&persistence, action)?;
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
