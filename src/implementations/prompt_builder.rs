use crate::models::common::{ HdlLanguage, NONE_OPTION };
use crate::models::deliverable::{ DeliverableId, DeliverableRegistry };

/// Filename of the architecture exploration document
pub const EXPLORATION_FILENAME: &str = "Architecture_Exploration.md";

const ROLE_STATEMENT: &str =
    "You are an expert Hardware Design and Verification Engineer AI assistant. Your role is to help users develop, verify, and test digital designs.
Follow best practices for synthesizable, modular, and well-documented code.";

const GENERATION_INSTRUCTIONS: &str =
    "Instructions:
1.  Analyze the user's request and generate all the required deliverables.
2.  Ensure all generated code is syntactically correct and complete.
3.  For testbenches, create a comprehensive UVM-based environment.
4.  For documentation (like specs or reports), use Markdown format.
5.  If a state diagram is requested, generate it using valid Mermaid.js 'stateDiagram-v2' syntax. Place notes on separate lines, not within transition labels. Example of a correct note: 'note right of IDLE: This is the reset state.'. Set the 'language' property to 'Mermaid'.
6.  For advanced verification deliverables:
    - Scoreboard Log: Generate a sample plain text log from a UVM scoreboard. Show transaction comparisons with PASS/FAIL status.
    - Waveform Summary: Create a Markdown document describing expected behaviors of critical signals during key operations.
    - Output Table: Generate a Markdown table that summarizes test cases, including columns for Test Name, Description, and an example Pass/Fail Status.
7.  For advanced analysis deliverables:
    - Synthesis Report: Provide a Markdown report estimating resource usage (LUTs, FFs, BRAMs, DSPs) and identify potential timing critical paths. Discuss potential synthesis optimizations.
    - Lint Report: Generate a Markdown report analyzing the RTL code for potential issues like non-synthesizable constructs, style violations, or common pitfalls.
8.  Return the output as a single, valid JSON object that adheres to the provided schema. Do not include any text, markdown formatting, or code blocks before or after the JSON object.
9.  Only generate properties in the JSON for the deliverables that were explicitly requested.";

/// Comma-separated deliverable phrases, in selection order
pub fn deliverable_list(
    selected_ids: &[String],
    hdl_language: HdlLanguage,
    simulation_tool: &str
) -> String {
    selected_ids
        .iter()
        .map(|id| DeliverableRegistry::fragment(id, hdl_language.as_str(), simulation_tool))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the instruction text for a generate request.
///
/// The description is embedded verbatim between quotes. Optional lines are
/// only emitted when they carry information.
pub fn build_prompt(
    description: &str,
    hdl_language: HdlLanguage,
    selected_ids: &[String],
    protocol: &str,
    architecture: &str,
    simulation_tool: &str
) -> String {
    let mut task = vec![
        format!("- Target RTL Language: {}", hdl_language),
        "- Verification Environment: SystemVerilog with UVM.".to_string()
    ];

    if protocol != NONE_OPTION {
        task.push(format!("- Interface Protocol: {}", protocol));
    }
    if architecture != NONE_OPTION {
        task.push(format!("- Target Architecture: {}", architecture));
    }
    if selected_ids.iter().any(|id| id == DeliverableId::SimulationScripts.as_str()) {
        task.push(format!("- Target Simulator: {}", simulation_tool));
    }
    if !selected_ids.is_empty() {
        task.push(
            format!(
                "- Required Deliverables: {}.",
                deliverable_list(selected_ids, hdl_language, simulation_tool)
            )
        );
    }

    format!(
        "{}\n\nUser's Design Request:\n\"{}\"\n\nGeneration Task:\n{}\n\n{}\n",
        ROLE_STATEMENT,
        description,
        task.join("\n"),
        GENERATION_INSTRUCTIONS
    )
}

/// Build the fixed architecture-comparison prompt used by explore mode
pub fn build_exploration_prompt(description: &str) -> String {
    format!(
        "You are a Senior Principal Digital Design Architect with decades of experience.
A junior engineer has come to you with the following design problem. Your task is to explore and propose multiple microarchitectural approaches to solve it.

Problem Statement:
\"{}\"

Your Task:
1.  Thoroughly analyze the problem statement.
2.  Propose at least two distinct and viable microarchitectural solutions.
3.  For each proposed architecture, provide a clear, high-level description of its structure and operation. Use bullet points and simple diagrams if it helps clarity.
4.  Create a comparison table or section that analyzes the trade-offs between the proposed solutions. Key comparison points should include:
    - Performance (e.g., latency, throughput, max frequency).
    - Area/Resource Usage (estimated complexity, number of flops/LUTs).
    - Power Consumption (qualitative assessment).
    - Complexity (design effort, verification complexity).
5.  Conclude with a recommendation on which architecture to proceed with and why, based on a likely set of design goals (e.g., if the goal is low power, recommend one; if it's high performance, recommend another).

Format your response in clear, well-structured Markdown.
",
        description
    )
}
