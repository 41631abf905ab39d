//! Provenance event listing: request reconciliation and status messages.

pub mod initial;
pub mod message;
pub mod reconciler;

pub use initial::{derive_initial_request, normalize_request};
pub use message::{results_message, results_message_with_limit};
pub use reconciler::ProvenanceEventListing;
