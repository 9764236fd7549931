use serde::{ Deserialize, Serialize };

/// Target hardware description language for RTL deliverables
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HdlLanguage {
    #[serde(rename = "VHDL")]
    Vhdl,
    #[default]
    Verilog,
}

impl HdlLanguage {
    pub fn as_str(&self) -> &'static str {
        match self {
            HdlLanguage::Vhdl => "VHDL",
            HdlLanguage::Verilog => "Verilog",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "vhdl" => Some(HdlLanguage::Vhdl),
            "verilog" | "v" => Some(HdlLanguage::Verilog),
            _ => None,
        }
    }
}

impl std::fmt::Display for HdlLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a submission asks for deliverables or for an architecture comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    #[default]
    Generate,
    Explore,
}

impl std::fmt::Display for OperationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationMode::Generate => write!(f, "generate"),
            OperationMode::Explore => write!(f, "explore"),
        }
    }
}

/// Sentinel used by the protocol and architecture selectors for "not set"
pub const NONE_OPTION: &str = "None";

/// Interface protocols offered by the form
pub const PROTOCOLS: &[&str] = &[
    NONE_OPTION,
    "AXI4-Lite",
    "AXI4-Stream",
    "APB",
    "Wishbone",
    "SPI",
    "I2C",
    "UART",
];

/// Target microarchitectures offered by the form
pub const ARCHITECTURES: &[&str] = &[
    NONE_OPTION,
    "Pipelined",
    "Multi-cycle",
    "FSM-based",
    "Low-power",
    "High-throughput",
];

/// Simulators offered when simulation scripts are requested
pub const SIMULATION_TOOLS: &[&str] = &[
    "ModelSim",
    "Questa",
    "VCS",
    "Xcelium",
    "Vivado Simulator",
    "Verilator",
    "Icarus Verilog",
];

/// Canned descriptions shown next to the description field
pub const EXAMPLE_PROMPTS: &[&str] = &[
    "Design a 4-bit synchronous up-counter with an active-high reset.",
    "Create an SPI master controller with configurable clock polarity and phase.",
    "A simple arbiter for two request signals with a fixed-priority scheme.",
    "An 8-bit wide, 32-deep synchronous FIFO with AXI-Stream interfaces.",
];
