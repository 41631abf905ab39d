//! Data models for provenance event listing.
//!
//! - [`QueryRequest`] - Canonical query description persisted by the listing store
//! - [`QueryResults`] / [`Provenance`] - What a completed query returned
//! - [`NavigationParams`] - Searchable fields taken from the page route
//!
//! Models serialize with camelCase keys. Optional date bounds accept either
//! Unix milliseconds or RFC3339 strings (see the `deserializers` module).

pub mod deserializers;
pub mod navigation;
pub mod request;
pub mod results;

pub use navigation::NavigationParams;
pub use request::{FLOW_FILE_UUID_TERM, MAX_RESULTS, PROCESSOR_ID_TERM, QueryRequest, SearchTerm};
pub use results::{EventSummary, Provenance, QueryResults};
