use serde::{ Deserialize, Serialize };

use crate::models::deliverable::DeliverableRegistry;

/// Generated content for one deliverable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub filename: String,
    /// Free-form content tag, e.g. "Verilog", "Markdown", "Mermaid", "Text"
    pub language: String,
    pub code: String,
}

impl Artifact {
    pub fn new(
        filename: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>
    ) -> Self {
        Self {
            filename: filename.into(),
            language: language.into(),
            code: code.into(),
        }
    }
}

/// Artifacts returned for one submission, keyed by deliverable id.
///
/// Entries are kept in registry order so the first key is always the
/// deliverable that should be shown first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResult {
    entries: Vec<(String, Artifact)>,
}

impl GenerationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the artifact stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, artifact: Artifact) {
        let key = key.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = artifact;
            return;
        }
        let position = DeliverableRegistry::position(&key);
        let index = self.entries
            .iter()
            .position(|(k, _)| DeliverableRegistry::position(k) > position)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, (key, artifact));
    }

    pub fn get(&self, key: &str) -> Option<&Artifact> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, a)| a)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Artifact)> {
        self.entries.iter().map(|(k, a)| (k.as_str(), a))
    }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// JSON object form, as the model would have returned it
    pub fn to_json(&self) -> serde_json::Value {
        let map = self.entries
            .iter()
            .map(|(k, a)| (k.clone(), serde_json::to_value(a).unwrap_or_default()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }
}
