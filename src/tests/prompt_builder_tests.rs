#[cfg(test)]
mod tests {
    use crate::implementations::prompt_builder::{
        build_exploration_prompt,
        build_prompt,
        deliverable_list,
    };
    use crate::models::common::HdlLanguage;
    use crate::models::deliverable::DeliverableRegistry;

    const COUNTER: &str = "Design a 4-bit synchronous up-counter with an active-high reset.";

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn deliverable_line(prompt: &str) -> Option<&str> {
        prompt.lines().find(|l| l.starts_with("- Required Deliverables:"))
    }

    #[test]
    fn test_prompt_quotes_description_verbatim() {
        let description = "  A FIFO with \"odd\" quoting & <angle> brackets  ";
        let prompt = build_prompt(
            description,
            HdlLanguage::Verilog,
            &ids(&["rtlCode"]),
            "None",
            "None",
            "ModelSim"
        );
        assert!(prompt.contains(&format!("\"{}\"", description)));
    }

    #[test]
    fn test_deliverable_list_follows_selection_order() {
        let selection = ids(&["lintReport", "rtlCode", "stateDiagram"]);
        let prompt = build_prompt(COUNTER, HdlLanguage::Vhdl, &selection, "None", "None", "ModelSim");
        let line = deliverable_line(&prompt).expect("deliverable line");

        assert_eq!(
            line,
            "- Required Deliverables: RTL Lint & Code Quality Report (in Markdown), RTL Code in VHDL, State Diagram (in Mermaid.js syntax)."
        );
    }

    #[test]
    fn test_deliverable_list_mentions_each_selected_once_and_nothing_else() {
        let selection = ids(&["testbench", "svaAssertions", "designSpec", "outputTable"]);
        let line = deliverable_list(&selection, HdlLanguage::Verilog, "ModelSim");

        for id in DeliverableRegistry::all_ids() {
            let fragment = DeliverableRegistry::fragment(id.as_str(), "Verilog", "ModelSim");
            let expected = if selection.iter().any(|s| s == id.as_str()) { 1 } else { 0 };
            assert_eq!(line.matches(fragment.as_str()).count(), expected, "fragment for {}", id);
        }
    }

    #[test]
    fn test_empty_selection_produces_no_deliverable_list() {
        let prompt = build_prompt(COUNTER, HdlLanguage::Verilog, &[], "None", "None", "ModelSim");
        assert!(deliverable_line(&prompt).is_none());
        assert!(prompt.contains(COUNTER));
    }

    #[test]
    fn test_protocol_line_only_when_set() {
        let selection = ids(&["rtlCode"]);
        let without = build_prompt(COUNTER, HdlLanguage::Verilog, &selection, "None", "None", "ModelSim");
        assert!(!without.contains("Interface Protocol"));

        let with = build_prompt(COUNTER, HdlLanguage::Verilog, &selection, "AXI4-Lite", "None", "ModelSim");
        let matching: Vec<&str> = with
            .lines()
            .filter(|l| l.contains("AXI4-Lite"))
            .collect();
        assert_eq!(matching, vec!["- Interface Protocol: AXI4-Lite"]);
    }

    #[test]
    fn test_architecture_line_only_when_set() {
        let selection = ids(&["rtlCode"]);
        let without = build_prompt(COUNTER, HdlLanguage::Verilog, &selection, "None", "None", "ModelSim");
        assert!(!without.contains("Target Architecture"));

        let with = build_prompt(COUNTER, HdlLanguage::Verilog, &selection, "None", "Pipelined", "ModelSim");
        assert!(with.contains("- Target Architecture: Pipelined"));
    }

    #[test]
    fn test_simulator_line_requires_simulation_scripts() {
        let without = build_prompt(COUNTER, HdlLanguage::Verilog, &ids(&["rtlCode"]), "None", "None", "Questa");
        assert!(!without.contains("Target Simulator"));

        let with = build_prompt(
            COUNTER,
            HdlLanguage::Verilog,
            &ids(&["rtlCode", "simulationScripts"]),
            "None",
            "None",
            "Questa"
        );
        assert!(with.contains("- Target Simulator: Questa"));
        assert!(with.contains("Simulation Scripts for Questa"));
    }

    #[test]
    fn test_no_blank_placeholder_lines_in_task_section() {
        let prompt = build_prompt(COUNTER, HdlLanguage::Verilog, &ids(&["rtlCode"]), "None", "None", "ModelSim");
        let task = prompt
            .split("Generation Task:\n")
            .nth(1)
            .and_then(|rest| rest.split("\n\n").next())
            .unwrap();
        assert!(task.lines().all(|l| l.starts_with("- ")));
    }

    #[test]
    fn test_prompt_carries_output_contract() {
        let prompt = build_prompt(COUNTER, HdlLanguage::Verilog, &ids(&["stateDiagram"]), "None", "None", "ModelSim");
        assert!(prompt.contains("single, valid JSON object"));
        assert!(prompt.contains("Only generate properties in the JSON for the deliverables that were explicitly requested."));
        assert!(prompt.contains("stateDiagram-v2"));
        assert!(prompt.contains("Place notes on separate lines, not within transition labels."));
    }

    #[test]
    fn test_unknown_id_is_echoed_into_list() {
        let line = deliverable_list(&ids(&["rtlCode", "powerIntent"]), HdlLanguage::Verilog, "ModelSim");
        assert_eq!(line, "RTL Code in Verilog, powerIntent");
    }

    #[test]
    fn test_exploration_prompt_covers_comparison_axes() {
        let prompt = build_exploration_prompt(COUNTER);
        assert!(prompt.contains(&format!("\"{}\"", COUNTER)));
        assert!(prompt.contains("at least two distinct"));
        for axis in ["Performance", "Area/Resource Usage", "Power Consumption", "Complexity"] {
            assert!(prompt.contains(axis), "missing axis {}", axis);
        }
        assert!(prompt.contains("recommendation"));
        assert!(!prompt.contains("JSON"));
    }
}
