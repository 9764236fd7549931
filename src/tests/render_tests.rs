#[cfg(test)]
mod tests {
    use std::path::{ Path, PathBuf };

    use chrono::{ TimeZone, Utc };
    use tempfile::TempDir;

    use crate::errors::RtlForgeError;
    use crate::implementations::render::{
        export_artifacts,
        export_file_name,
        resolve_export_dir,
        sanitize_markdown,
        validate_diagram,
        Viewer,
    };
    use crate::models::artifact::{ Artifact, GenerationResult };

    #[test]
    fn test_viewer_selection() {
        assert_eq!(Viewer::for_language("Markdown"), Viewer::Markdown);
        assert_eq!(Viewer::for_language("md"), Viewer::Markdown);
        assert_eq!(Viewer::for_language(" Mermaid "), Viewer::Diagram);
        assert_eq!(Viewer::for_language("Verilog"), Viewer::Code);
        assert_eq!(Viewer::for_language("Tcl"), Viewer::Code);
        assert_eq!(Viewer::for_language(""), Viewer::Code);
    }

    #[test]
    fn test_valid_state_diagram() {
        let source =
            "%% counter FSM\nstateDiagram-v2\n    [*] --> IDLE\n    IDLE --> COUNT : enable\n    note right of COUNT : wraps at 15\n";
        assert!(validate_diagram(source).is_ok());
    }

    #[test]
    fn test_note_inside_transition_is_rejected() {
        let source = "stateDiagram-v2\n    IDLE --> COUNT : enable note right of COUNT\n";
        let err = validate_diagram(source).unwrap_err();

        match &err {
            RtlForgeError::Render { viewer, message } => {
                assert_eq!(viewer, "diagram");
                assert!(message.contains("line 2"));
            }
            other => panic!("expected render error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_or_unknown_diagram_is_rejected() {
        assert!(validate_diagram("").is_err());
        assert!(validate_diagram("%% only a comment\n").is_err());
        assert!(validate_diagram("module counter;").is_err());
    }

    #[test]
    fn test_sanitize_strips_html_outside_fences() {
        let markdown =
            "# Plan <script>alert(1)</script>\n\na < b and <b>bold</b>\n```verilog\nassign y = a<b;\n<keep>\n```\n";
        let clean = sanitize_markdown(markdown);

        assert!(clean.contains("# Plan alert(1)"));
        assert!(clean.contains("a < b and bold"));
        assert!(clean.contains("assign y = a<b;"));
        assert!(clean.contains("<keep>"));
        assert!(!clean.contains("<script>"));
    }

    #[test]
    fn test_export_file_name_discards_directories() {
        let nested = Artifact::new("../../etc/counter.v", "Verilog", "");
        assert_eq!(export_file_name("rtlCode", &nested), "counter.v");

        let blank = Artifact::new("  ", "Text", "");
        assert_eq!(export_file_name("lintReport", &blank), "lintReport.txt");

        let dots = Artifact::new("..", "Text", "");
        assert_eq!(export_file_name("testPlan", &dots), "testPlan.txt");
    }

    #[test]
    fn test_export_writes_each_artifact() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("generated");

        let mut result = GenerationResult::new();
        result.insert("testbench", Artifact::new("tb_counter.sv", "SystemVerilog", "module tb;"));
        result.insert("rtlCode", Artifact::new("counter.v", "Verilog", "module counter;"));

        let written = export_artifacts(&result, &out).unwrap();

        assert_eq!(written, vec![out.join("counter.v"), out.join("tb_counter.sv")]);
        assert_eq!(std::fs::read_to_string(out.join("counter.v")).unwrap(), "module counter;");
        assert_eq!(std::fs::read_to_string(out.join("tb_counter.sv")).unwrap(), "module tb;");
    }

    #[test]
    fn test_nothing_is_exported_unless_requested() {
        let now = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 5).unwrap();

        assert_eq!(resolve_export_dir(None, now), None);
        assert_eq!(
            resolve_export_dir(Some(Some(Path::new("out/uart"))), now),
            Some(PathBuf::from("out/uart"))
        );
        assert_eq!(
            resolve_export_dir(Some(None), now),
            Some(PathBuf::from("generated").join("rtl_20261017_093005"))
        );
    }
}
