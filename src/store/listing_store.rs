use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::actions::{DialogHost, Dispatch, ListingAction, QueryExecutor};
use crate::models::{Provenance, QueryRequest};
use crate::observable::{Signal, State, Subscription};

#[derive(Default)]
struct ListingState {
    provenance: Option<Provenance>,
    loaded_timestamp: Option<DateTime<Utc>>,
}

/// In-memory store for the provenance listing.
///
/// Holds the persisted query request and the latest completed query. Saving
/// or clearing the request emits on the request channel only when the value
/// actually changes. Effects (`ResubmitQuery`, dialogs) are forwarded to the
/// executor and dialog host supplied at construction.
pub struct ListingStore {
    request: State<Option<QueryRequest>>,
    state: RefCell<ListingState>,
    provenance_changes: Signal<Provenance>,
    executor: Rc<dyn QueryExecutor>,
    dialogs: Rc<dyn DialogHost>,
}

impl ListingStore {
    pub fn new(executor: Rc<dyn QueryExecutor>, dialogs: Rc<dyn DialogHost>) -> Self {
        Self {
            request: State::new(None),
            state: RefCell::new(ListingState::default()),
            provenance_changes: Signal::new(),
            executor,
            dialogs,
        }
    }

    /// Start with `request` already persisted
    pub fn with_request(self, request: QueryRequest) -> Self {
        self.request.set(Some(request));
        self
    }

    pub fn request(&self) -> Option<QueryRequest> {
        self.request.get()
    }

    pub fn save_request(&self, request: QueryRequest) {
        self.set_request(Some(request));
    }

    pub fn clear_request(&self) {
        self.set_request(None);
    }

    /// Observe the persisted request.
    ///
    /// `listener` receives the current value immediately, then every change.
    pub fn select_request<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Option<QueryRequest>) + 'static,
    {
        self.request.subscribe(listener)
    }

    /// Store the outcome of a completed query and stamp the load time
    pub fn record_results(&self, provenance: Provenance) {
        {
            let mut state = self.state.borrow_mut();
            state.provenance = Some(provenance.clone());
            state.loaded_timestamp = Some(Utc::now());
        }
        debug!(total_count = provenance.results.total_count, "recorded provenance results");
        self.provenance_changes.emit(&provenance);
    }

    pub fn provenance(&self) -> Option<Provenance> {
        self.state.borrow().provenance.clone()
    }

    pub fn loaded_timestamp(&self) -> Option<DateTime<Utc>> {
        self.state.borrow().loaded_timestamp
    }

    /// Observe completed queries recorded from now on
    pub fn select_provenance<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Provenance) + 'static,
    {
        self.provenance_changes.subscribe(listener)
    }

    fn set_request(&self, next: Option<QueryRequest>) {
        if self.request.get() == next {
            return;
        }
        debug!(present = next.is_some(), "persisted provenance request changed");
        self.request.set(next);
    }
}

impl Dispatch for ListingStore {
    fn dispatch(&self, action: ListingAction) {
        match action {
            ListingAction::SaveRequest { request } => self.save_request(request),
            ListingAction::ClearRequest => self.clear_request(),
            ListingAction::ResubmitQuery { request } => self.executor.resubmit(&request),
            ListingAction::OpenSearchDialog => self.dialogs.open_search_dialog(),
            ListingAction::OpenEventDialog { id } => self.dialogs.open_event_dialog(&id),
        }
    }
}
