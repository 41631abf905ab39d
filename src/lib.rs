//! Provenance Listing - Request reconciliation for a provenance event listing
//!
//! This library keeps a listing's provenance query in step with its persisted
//! request. It provides:
//!
//! - Deriving the initial query request from the route's searchable fields, once
//! - Resubmitting the query every time the persisted request changes
//! - Manual actions: clear, refresh, open search criteria, open event details
//! - The status line describing how many events are shown
//!
//! Everything is single-threaded: sources are [`observable::State`] cells and the
//! listing holds [`observable::Subscription`]s that are released on teardown.
//!
//! # Example
//!
//! ```no_run
//! use std::rc::Rc;
//!
//! use provenance_listing::models::{NavigationParams, QueryRequest};
//! use provenance_listing::observable::State;
//! use provenance_listing::store::{DialogHost, ListingStore, QueryExecutor};
//! use provenance_listing::ProvenanceEventListing;
//!
//! struct Executor;
//! impl QueryExecutor for Executor {
//!     fn resubmit(&self, request: &QueryRequest) {
//!         println!("query: {:?}", request.search_terms);
//!     }
//! }
//!
//! struct Dialogs;
//! impl DialogHost for Dialogs {
//!     fn open_search_dialog(&self) {}
//!     fn open_event_dialog(&self, _id: &str) {}
//! }
//!
//! let store = Rc::new(ListingStore::new(Rc::new(Executor), Rc::new(Dialogs)));
//! let route = State::new(Some(NavigationParams::new(Some("processor-id".into()), None)));
//! let listing = ProvenanceEventListing::activate(Rc::clone(&store), &route);
//!
//! listing.refresh();
//! listing.teardown();
//! ```

pub mod cli;
pub mod listing;
pub mod models;
pub mod observable;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use listing::{ProvenanceEventListing, derive_initial_request, results_message};
pub use models::{NavigationParams, Provenance, QueryRequest, QueryResults, SearchTerm};
pub use store::{ListingAction, ListingStore};
