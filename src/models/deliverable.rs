use std::str::FromStr;

use serde::{ Deserialize, Serialize };

/// Artifact key used for the single document produced by architecture exploration
pub const EXPLORATION_RESULT_KEY: &str = "explorationResult";

/// Every kind of output the model can be asked to produce.
///
/// Declaration order is registry order: it drives the form layout, the schema
/// property order and the order in which generated artifacts are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeliverableId {
    RtlCode,
    Testbench,
    TestPlan,
    StateDiagram,
    FunctionalCoverage,
    SvaAssertions,
    SimulationScripts,
    DesignSpec,
    SynthesisReport,
    LintReport,
    ScoreboardLog,
    WaveformSummary,
    OutputTable,
    TestCases,
    PerformanceReport,
}

impl DeliverableId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliverableId::RtlCode => "rtlCode",
            DeliverableId::Testbench => "testbench",
            DeliverableId::TestPlan => "testPlan",
            DeliverableId::StateDiagram => "stateDiagram",
            DeliverableId::FunctionalCoverage => "functionalCoverage",
            DeliverableId::SvaAssertions => "svaAssertions",
            DeliverableId::SimulationScripts => "simulationScripts",
            DeliverableId::DesignSpec => "designSpec",
            DeliverableId::SynthesisReport => "synthesisReport",
            DeliverableId::LintReport => "lintReport",
            DeliverableId::ScoreboardLog => "scoreboardLog",
            DeliverableId::WaveformSummary => "waveformSummary",
            DeliverableId::OutputTable => "outputTable",
            DeliverableId::TestCases => "testCases",
            DeliverableId::PerformanceReport => "performanceReport",
        }
    }
}

impl std::fmt::Display for DeliverableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliverableId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeliverableRegistry::all()
            .iter()
            .map(|d| d.id)
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("Unknown deliverable: {}", s))
    }
}

/// Static description of one registry entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliverableDescriptor {
    pub id: DeliverableId,
    pub display_name: &'static str,
    pub default_selected: bool,
    /// Shown in the form catalog; entries that are not offered are still
    /// advertised in the response schema and understood by the prompt builder
    pub offered: bool,
}

/// A catalog entry together with the user's current selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deliverable {
    pub id: String,
    pub name: String,
    pub checked: bool,
}

const fn entry(
    id: DeliverableId,
    display_name: &'static str,
    default_selected: bool,
    offered: bool
) -> DeliverableDescriptor {
    DeliverableDescriptor { id, display_name, default_selected, offered }
}

const REGISTRY: &[DeliverableDescriptor] = &[
    entry(DeliverableId::RtlCode, "VHDL/Verilog Code", true, true),
    entry(DeliverableId::Testbench, "UVM Testbench", true, true),
    entry(DeliverableId::TestPlan, "Test Plan", false, true),
    entry(DeliverableId::StateDiagram, "State Diagram", false, true),
    entry(DeliverableId::FunctionalCoverage, "Func. Coverage", false, true),
    entry(DeliverableId::SvaAssertions, "SVA Assertions", false, true),
    entry(DeliverableId::SimulationScripts, "Sim Scripts", false, true),
    entry(DeliverableId::DesignSpec, "Design Spec", false, true),
    entry(DeliverableId::SynthesisReport, "Synthesis Report", false, true),
    entry(DeliverableId::LintReport, "Lint Report", false, true),
    entry(DeliverableId::ScoreboardLog, "Scoreboard Log", false, true),
    entry(DeliverableId::WaveformSummary, "Waveform Summary", false, true),
    entry(DeliverableId::OutputTable, "Output Table", false, true),
    entry(DeliverableId::TestCases, "Test Cases", false, false),
    entry(DeliverableId::PerformanceReport, "Performance Report", false, false),
];

/// Fixed, ordered catalog of deliverables
pub struct DeliverableRegistry;

impl DeliverableRegistry {
    /// Every deliverable the registry knows, in registry order
    pub fn all() -> &'static [DeliverableDescriptor] {
        REGISTRY
    }

    /// Entries offered in the form, in display order
    pub fn catalog() -> impl Iterator<Item = &'static DeliverableDescriptor> {
        REGISTRY.iter().filter(|d| d.offered)
    }

    pub fn all_ids() -> Vec<DeliverableId> {
        REGISTRY.iter().map(|d| d.id).collect()
    }

    pub fn default_selected_ids() -> Vec<DeliverableId> {
        REGISTRY.iter()
            .filter(|d| d.default_selected)
            .map(|d| d.id)
            .collect()
    }

    pub fn lookup(id: &str) -> Option<&'static DeliverableDescriptor> {
        REGISTRY.iter().find(|d| d.id.as_str() == id)
    }

    pub fn display_name(id: &str) -> Option<&'static str> {
        Self::lookup(id).map(|d| d.display_name)
    }

    /// Registry position of `id`; unknown keys sort after every known one
    pub fn position(id: &str) -> usize {
        REGISTRY.iter()
            .position(|d| d.id.as_str() == id)
            .unwrap_or(REGISTRY.len())
    }

    /// Instruction phrase used in the prompt's deliverable list.
    ///
    /// Unknown ids are echoed back unchanged so a stale or hand-typed id never
    /// fails prompt construction.
    pub fn fragment(id: &str, hdl_language: &str, simulation_tool: &str) -> String {
        let Ok(known) = id.parse::<DeliverableId>() else {
            return id.to_string();
        };

        match known {
            DeliverableId::RtlCode => format!("RTL Code in {}", hdl_language),
            DeliverableId::Testbench => "SystemVerilog/UVM Testbench".to_string(),
            DeliverableId::TestCases => "Test Cases Description (in Markdown)".to_string(),
            DeliverableId::DesignSpec => "Design Specification (in Markdown)".to_string(),
            DeliverableId::FunctionalCoverage =>
                "Functional Coverage Model (SystemVerilog)".to_string(),
            DeliverableId::SvaAssertions => "SystemVerilog Assertions (SVA)".to_string(),
            DeliverableId::SimulationScripts =>
                format!("Simulation Scripts for {}", simulation_tool),
            DeliverableId::PerformanceReport =>
                "Performance and Resource Analysis Report (Markdown)".to_string(),
            DeliverableId::TestPlan => "Verification Test Plan (in Markdown)".to_string(),
            DeliverableId::StateDiagram => "State Diagram (in Mermaid.js syntax)".to_string(),
            DeliverableId::ScoreboardLog => "Example Scoreboard Log (Plain Text)".to_string(),
            DeliverableId::WaveformSummary =>
                "Waveform Behavior Summary (in Markdown)".to_string(),
            DeliverableId::OutputTable => "Test Results Summary Table (in Markdown)".to_string(),
            DeliverableId::SynthesisReport => "Synthesis & Timing Report (in Markdown)".to_string(),
            DeliverableId::LintReport => "RTL Lint & Code Quality Report (in Markdown)".to_string(),
        }
    }

    /// The form catalog with default selections applied
    pub fn default_deliverables() -> Vec<Deliverable> {
        Self::catalog()
            .map(|d| Deliverable {
                id: d.id.as_str().to_string(),
                name: d.display_name.to_string(),
                checked: d.default_selected,
            })
            .collect()
    }
}
