use clap::{ Parser, Subcommand };
use std::path::PathBuf;

pub mod commands;
pub mod ui;

#[derive(Parser)]
#[command(
    name = "rtlforge",
    about = "An AI assistant that generates RTL, testbenches and design documents",
    version,
    author,
    long_about = None
)]
pub struct RtlForgeCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short = 'L', long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the saved form state
    #[arg(long, global = true)]
    pub state_dir: Option<PathBuf>,

    /// Do not read or write the saved form state
    #[arg(long, global = true, default_value = "false")]
    pub no_persist: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    pub output_format: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate RTL and verification deliverables from a description
    Generate {
        /// Natural-language description of the circuit
        description: Option<String>,

        /// Target HDL (vhdl, verilog)
        #[arg(short, long)]
        language: Option<String>,

        /// Comma-separated deliverable ids (see `rtlforge list`)
        #[arg(short, long, value_delimiter = ',')]
        deliverables: Option<Vec<String>>,

        /// Interface protocol, or "None"
        #[arg(long)]
        protocol: Option<String>,

        /// Target microarchitecture, or "None"
        #[arg(long)]
        architecture: Option<String>,

        /// Simulator for generated simulation scripts
        #[arg(long)]
        sim_tool: Option<String>,

        /// Enable extended reasoning (slower, more deliberate); `--thinking false` turns it off
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        thinking: Option<bool>,

        /// Directory to write the generated files into; `-o` alone picks generated/rtl_<timestamp>. Nothing is written without it
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// Propose and compare microarchitectures for a design problem
    Explore {
        /// Natural-language description of the design problem
        description: Option<String>,

        /// Enable extended reasoning (slower, more deliberate); `--thinking false` turns it off
        #[arg(long, num_args = 0..=1, default_missing_value = "true")]
        thinking: Option<bool>,

        /// Directory to write the exploration document into; `-o` alone picks generated/rtl_<timestamp>. Nothing is written without it
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// Fill in the request form interactively, then submit it
    Interactive {
        /// Directory to write the generated files into; `-o` alone picks generated/rtl_<timestamp>. Nothing is written without it
        #[arg(short, long, num_args = 0..=1)]
        output: Option<Option<PathBuf>>,
    },

    /// List the available deliverables and the current selection
    List,

    /// Inspect or clear the saved form state
    State {
        #[command(subcommand)]
        action: StateAction,
    },
}

#[derive(Subcommand)]
pub enum StateAction {
    /// Print the saved form state
    Show,
    /// Forget the saved form state
    Reset,
}
