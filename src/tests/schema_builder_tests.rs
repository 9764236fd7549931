#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use crate::implementations::schema_builder::{ build_schema, FileSchema };
    use crate::models::deliverable::DeliverableRegistry;

    fn registry_names() -> BTreeSet<String> {
        DeliverableRegistry::all_ids()
            .iter()
            .map(|id| id.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_schema_fields_are_selection_independent() {
        let selections: Vec<Vec<String>> = vec![
            vec![],
            vec!["rtlCode".to_string()],
            vec!["lintReport".to_string(), "testbench".to_string(), "bogus".to_string()]
        ];

        for selection in selections {
            let schema = build_schema(&selection);
            let names: BTreeSet<String> = schema
                .field_names()
                .into_iter()
                .map(str::to_string)
                .collect();
            assert_eq!(names, registry_names());
        }
    }

    #[test]
    fn test_schema_json_advertises_every_field_as_optional() {
        let json = build_schema(&["rtlCode".to_string()]).to_json();

        assert_eq!(json["type"], "OBJECT");
        assert!(json.get("required").is_none());
        let properties = json["properties"].as_object().unwrap();
        let names: BTreeSet<String> = properties.keys().cloned().collect();
        assert_eq!(names, registry_names());
        assert!(!properties.contains_key("explorationResult"));
    }

    #[test]
    fn test_file_leaf_requires_all_three_fields() {
        let json = build_schema(&[]).to_json();
        let rtl = &json["properties"]["rtlCode"];

        assert_eq!(rtl["type"], "OBJECT");
        for field in FileSchema::REQUIRED {
            assert_eq!(rtl["properties"][field]["type"], "STRING");
        }
        assert_eq!(rtl["required"], serde_json::json!(["filename", "language", "code"]));
    }

    #[test]
    fn test_property_ordering_follows_registry() {
        let json = build_schema(&[]).to_json();
        let ordering: Vec<&str> = json["propertyOrdering"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        let expected: Vec<&str> = DeliverableRegistry::all_ids()
            .iter()
            .map(|id| id.as_str())
            .collect();
        assert_eq!(ordering, expected);
    }

    #[test]
    fn test_field_lookup() {
        let schema = build_schema(&[]);
        assert!(schema.field("stateDiagram").is_some());
        assert!(schema.field("explorationResult").is_none());
    }
}
