use serde::{Deserialize, Serialize};

/// Searchable fields carried by the page route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationParams {
    #[serde(default)]
    pub component_id: Option<String>,
    #[serde(default)]
    pub flow_file_uuid: Option<String>,
}

impl NavigationParams {
    pub fn new(component_id: Option<String>, flow_file_uuid: Option<String>) -> Self {
        Self { component_id, flow_file_uuid }
    }

    /// Component id, treating an empty value as absent
    pub fn component_id(&self) -> Option<&str> {
        self.component_id.as_deref().filter(|id| !id.is_empty())
    }

    /// Flow file uuid, treating an empty value as absent
    pub fn flow_file_uuid(&self) -> Option<&str> {
        self.flow_file_uuid.as_deref().filter(|uuid| !uuid.is_empty())
    }
}
