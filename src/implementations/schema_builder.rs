use serde_json::{ json, Value };

use crate::models::deliverable::{ DeliverableId, DeliverableRegistry };

/// Shape of one generated file in the model's reply.
///
/// All three fields are required whenever the enclosing property is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileSchema;

impl FileSchema {
    pub const REQUIRED: [&'static str; 3] = ["filename", "language", "code"];

    pub fn to_json(&self) -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "filename": {
                    "type": "STRING",
                    "description": "The filename for the content, e.g., 'counter.v' or 'spec.md'."
                },
                "language": {
                    "type": "STRING",
                    "description": "The language identifier, e.g., 'Verilog', 'Markdown', 'Mermaid', 'Text'."
                },
                "code": {
                    "type": "STRING",
                    "description": "The complete, syntactically correct code or document content."
                }
            },
            "required": Self::REQUIRED,
            "propertyOrdering": Self::REQUIRED,
        })
    }
}

/// Structured-output descriptor: one optional file property per deliverable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSchema {
    pub fields: Vec<(DeliverableId, FileSchema)>,
}

impl ResponseSchema {
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields
            .iter()
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn field(&self, name: &str) -> Option<&FileSchema> {
        self.fields
            .iter()
            .find(|(id, _)| id.as_str() == name)
            .map(|(_, schema)| schema)
    }

    /// Render in the provider's OpenAPI-subset dialect
    pub fn to_json(&self) -> Value {
        let properties = self.fields
            .iter()
            .map(|(id, schema)| (id.as_str().to_string(), schema.to_json()))
            .collect::<serde_json::Map<_, _>>();

        json!({
            "type": "OBJECT",
            "properties": properties,
            "propertyOrdering": self.field_names(),
        })
    }
}

/// Build the response schema.
///
/// Every registry deliverable is advertised as an optional property whatever
/// the selection; the prompt tells the model which ones to fill.
pub fn build_schema(_selected_ids: &[String]) -> ResponseSchema {
    ResponseSchema {
        fields: DeliverableRegistry::all_ids()
            .into_iter()
            .map(|id| (id, FileSchema))
            .collect(),
    }
}
