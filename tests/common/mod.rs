//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use provenance_listing::ProvenanceEventListing;
use provenance_listing::models::{NavigationParams, QueryRequest};
use provenance_listing::observable::{State, Subscription};
use provenance_listing::store::{DialogHost, ListingStore, QueryExecutor};

/// Everything a sink was asked to do, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Resubmit(QueryRequest),
    OpenSearchDialog,
    OpenEventDialog(String),
}

/// Executor and dialog host that records every call
#[derive(Default)]
pub struct RecordingSinks {
    calls: RefCell<Vec<Call>>,
}

impl RecordingSinks {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn resubmitted(&self) -> Vec<QueryRequest> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::Resubmit(request) => Some(request.clone()),
                _ => None,
            })
            .collect()
    }
}

impl QueryExecutor for RecordingSinks {
    fn resubmit(&self, request: &QueryRequest) {
        self.calls.borrow_mut().push(Call::Resubmit(request.clone()));
    }
}

impl DialogHost for RecordingSinks {
    fn open_search_dialog(&self) {
        self.calls.borrow_mut().push(Call::OpenSearchDialog);
    }

    fn open_event_dialog(&self, id: &str) {
        self.calls.borrow_mut().push(Call::OpenEventDialog(id.to_string()));
    }
}

/// A store, its sinks and a route source, ready for a listing to be activated
pub struct Harness {
    pub sinks: Rc<RecordingSinks>,
    pub store: Rc<ListingStore>,
    pub route: State<Option<NavigationParams>>,
}

impl Harness {
    pub fn new() -> Self {
        let sinks = Rc::new(RecordingSinks::default());
        let store = Rc::new(ListingStore::new(sinks.clone(), sinks.clone()));
        Self { sinks, store, route: State::new(None) }
    }

    /// Start with `request` already persisted
    pub fn with_persisted(request: QueryRequest) -> Self {
        let sinks = Rc::new(RecordingSinks::default());
        let store =
            Rc::new(ListingStore::new(sinks.clone(), sinks.clone()).with_request(request));
        Self { sinks, store, route: State::new(None) }
    }

    pub fn activate(&self) -> ProvenanceEventListing {
        ProvenanceEventListing::activate(Rc::clone(&self.store), &self.route)
    }

    /// Record every value the persisted request takes, starting with the current one
    pub fn watch_saves(&self) -> (Rc<RefCell<Vec<Option<QueryRequest>>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let subscription =
            self.store.select_request(move |request| sink.borrow_mut().push(request.clone()));
        (seen, subscription)
    }
}

impl Default for Harness {
    fn default() -> Self {
        Self::new()
    }
}

pub fn route(component_id: Option<&str>, flow_file_uuid: Option<&str>) -> Option<NavigationParams> {
    Some(NavigationParams::new(component_id.map(String::from), flow_file_uuid.map(String::from)))
}
