use log::debug;
use serde::de::DeserializeOwned;
use serde::{ Deserialize, Deserializer, Serialize };

use crate::errors::{ RtlForgeError, RtlForgeResult };
use crate::models::common::{ HdlLanguage, OperationMode, NONE_OPTION };
use crate::models::deliverable::{ Deliverable, DeliverableId, DeliverableRegistry };
use crate::models::request::GenerationRequest;

pub const DEFAULT_DESCRIPTION: &str =
    "Design a 4-bit synchronous up-counter with an active-high reset.";
pub const DEFAULT_SIMULATION_TOOL: &str = "ModelSim";

/// Everything the form holds; this is also the persisted record.
///
/// Transitions return a new state instead of mutating in place. When read
/// back, a missing field takes its default and a field that no longer parses
/// is reset on its own, so one stale value never discards the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppState {
    #[serde(deserialize_with = "lenient")]
    pub description: String,
    #[serde(deserialize_with = "lenient")]
    pub hdl_language: HdlLanguage,
    #[serde(deserialize_with = "lenient")]
    pub protocol: String,
    #[serde(deserialize_with = "lenient")]
    pub architecture: String,
    #[serde(deserialize_with = "lenient")]
    pub simulation_tool: String,
    #[serde(deserialize_with = "lenient")]
    pub thinking_mode: bool,
    #[serde(deserialize_with = "lenient")]
    pub operation_mode: OperationMode,
    #[serde(deserialize_with = "lenient_list")]
    pub deliverables: Vec<Deliverable>,
}

/// Read one field, falling back to the type's default if it does not parse
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where D: Deserializer<'de>, T: DeserializeOwned + Default
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(
        serde_json::from_value(value).unwrap_or_else(|e| {
            debug!("Ignoring unreadable saved field: {}", e);
            T::default()
        })
    )
}

/// Read a list, keeping only the entries that parse
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where D: Deserializer<'de>, T: DeserializeOwned
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = value else {
        debug!("Ignoring saved list that is not an array");
        return Ok(Vec::new());
    };
    Ok(
        items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect()
    )
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            description: DEFAULT_DESCRIPTION.to_string(),
            hdl_language: HdlLanguage::Verilog,
            protocol: NONE_OPTION.to_string(),
            architecture: NONE_OPTION.to_string(),
            simulation_tool: DEFAULT_SIMULATION_TOOL.to_string(),
            thinking_mode: false,
            operation_mode: OperationMode::Generate,
            deliverables: DeliverableRegistry::default_deliverables(),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() { default.to_string() } else { value }
}

impl AppState {
    /// Rebuild the form from whatever was persisted.
    ///
    /// Empty fields fall back to their defaults. Deliverables always follow the
    /// current catalog: saved selections are copied by id, saved ids the catalog
    /// no longer knows are dropped, and new catalog entries keep their default.
    pub fn restore(saved: Option<AppState>) -> Self {
        let defaults = AppState::default();
        let Some(saved) = saved else {
            return defaults;
        };

        let deliverables = defaults.deliverables
            .into_iter()
            .map(|d| {
                match saved.deliverables.iter().find(|s| s.id == d.id) {
                    Some(s) => Deliverable { checked: s.checked, ..d },
                    None => d,
                }
            })
            .collect();

        Self {
            description: or_default(saved.description, DEFAULT_DESCRIPTION),
            hdl_language: saved.hdl_language,
            protocol: or_default(saved.protocol, NONE_OPTION),
            architecture: or_default(saved.architecture, NONE_OPTION),
            simulation_tool: or_default(saved.simulation_tool, DEFAULT_SIMULATION_TOOL),
            thinking_mode: saved.thinking_mode,
            operation_mode: saved.operation_mode,
            deliverables,
        }
    }

    /// Ids of the checked deliverables, in catalog order
    pub fn selected_deliverables(&self) -> Vec<String> {
        self.deliverables
            .iter()
            .filter(|d| d.checked)
            .map(|d| d.id.clone())
            .collect()
    }

    pub fn simulation_scripts_selected(&self) -> bool {
        self.deliverables
            .iter()
            .any(|d| d.checked && d.id == DeliverableId::SimulationScripts.as_str())
    }

    pub fn toggle_deliverable(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(d) = next.deliverables.get_mut(index) {
            d.checked = !d.checked;
        }
        next
    }

    /// Replace the selection with exactly `ids`; ids outside the catalog are ignored
    pub fn with_selection(&self, ids: &[String]) -> Self {
        let mut next = self.clone();
        for d in next.deliverables.iter_mut() {
            d.checked = ids.iter().any(|id| *id == d.id);
        }
        next
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        Self { description: description.into(), ..self.clone() }
    }

    pub fn with_mode(&self, mode: OperationMode) -> Self {
        Self { operation_mode: mode, ..self.clone() }
    }

    pub fn with_hdl_language(&self, language: HdlLanguage) -> Self {
        Self { hdl_language: language, ..self.clone() }
    }

    pub fn with_protocol(&self, protocol: impl Into<String>) -> Self {
        Self { protocol: protocol.into(), ..self.clone() }
    }

    pub fn with_architecture(&self, architecture: impl Into<String>) -> Self {
        Self { architecture: architecture.into(), ..self.clone() }
    }

    pub fn with_simulation_tool(&self, tool: impl Into<String>) -> Self {
        Self { simulation_tool: tool.into(), ..self.clone() }
    }

    pub fn with_thinking_mode(&self, enabled: bool) -> Self {
        Self { thinking_mode: enabled, ..self.clone() }
    }

    /// Snapshot the form into a request
    pub fn to_request(&self) -> RtlForgeResult<GenerationRequest> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(RtlForgeError::InvalidInput("Design description is empty".to_string()));
        }

        Ok(GenerationRequest {
            mode: self.operation_mode,
            description: description.to_string(),
            hdl_language: self.hdl_language,
            selected_deliverable_ids: self.selected_deliverables(),
            protocol: self.protocol.clone(),
            architecture: self.architecture.clone(),
            simulation_tool: self.simulation_tool.clone(),
            use_extended_reasoning: self.thinking_mode,
        })
    }
}
