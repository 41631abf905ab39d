use crate::models::QueryRequest;

/// Commands the listing sends to its store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingAction {
    /// Persist `request` as the current query request
    SaveRequest { request: QueryRequest },
    /// Reset the persisted request to absent
    ClearRequest,
    /// Run `request` against the query executor
    ResubmitQuery { request: QueryRequest },
    OpenSearchDialog,
    OpenEventDialog { id: String },
}

/// Anything that accepts listing actions
pub trait Dispatch {
    fn dispatch(&self, action: ListingAction);
}

/// Performs provenance queries. Results come back through
/// [`ListingStore::record_results`](super::ListingStore::record_results).
pub trait QueryExecutor {
    fn resubmit(&self, request: &QueryRequest);
}

/// Presents the search criteria editor and single event details
pub trait DialogHost {
    fn open_search_dialog(&self);
    fn open_event_dialog(&self, id: &str);
}
