use std::collections::BTreeMap;
use std::num::NonZeroU32;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Page size of the default request and the display cap of the results message
pub const MAX_RESULTS: NonZeroU32 = NonZeroU32::new(1000).unwrap();

/// Search term key for the owning component
pub const PROCESSOR_ID_TERM: &str = "ProcessorID";
/// Search term key for the flow file
pub const FLOW_FILE_UUID_TERM: &str = "FlowFileUUID";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    pub value: String,
    pub inverse: bool,
}

impl SearchTerm {
    /// Term that matches `value` (non-inverted)
    pub fn matching(value: impl Into<String>) -> Self {
        Self { value: value.into(), inverse: false }
    }
}

/// Canonical description of a provenance query.
///
/// `Default` is the unscoped request: no search terms, no date bounds,
/// `maxResults` of [`MAX_RESULTS`], summarized and non-incremental.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub incremental_results: bool,
    pub max_results: NonZeroU32,
    pub summarize: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_terms: Option<BTreeMap<String, SearchTerm>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::deserializers::deserialize_optional_timestamp"
    )]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "super::deserializers::deserialize_optional_timestamp"
    )]
    pub end_date: Option<DateTime<Utc>>,
}

impl QueryRequest {
    /// Add (or replace) a search term, creating the term map on first use
    pub fn with_search_term(mut self, field: impl Into<String>, term: SearchTerm) -> Self {
        self.search_terms.get_or_insert_with(BTreeMap::new).insert(field.into(), term);
        self
    }

    pub fn with_start_date(mut self, start: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn with_end_date(mut self, end: DateTime<Utc>) -> Self {
        self.end_date = Some(end);
        self
    }

    /// True when the request carries at least one filter.
    ///
    /// An empty term map counts as no terms.
    pub fn has_explicit_scope(&self) -> bool {
        let has_search_terms = self.search_terms.as_ref().is_some_and(|terms| !terms.is_empty());
        self.start_date.is_some() || self.end_date.is_some() || has_search_terms
    }

    pub fn search_term(&self, field: &str) -> Option<&SearchTerm> {
        self.search_terms.as_ref().and_then(|terms| terms.get(field))
    }
}

impl Default for QueryRequest {
    fn default() -> Self {
        Self {
            incremental_results: false,
            max_results: MAX_RESULTS,
            summarize: true,
            search_terms: None,
            start_date: None,
            end_date: None,
        }
    }
}
