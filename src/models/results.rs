use serde::{Deserialize, Serialize};

use super::request::QueryRequest;

/// Summary of a single provenance event. Only the id is interpreted here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResults {
    pub total_count: u64,
    #[serde(default)]
    pub provenance_events: Vec<EventSummary>,
}

/// A completed query: the request that ran and what it returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub request: QueryRequest,
    pub results: QueryResults,
}
