//! Persisted request store and its collaborator seams.
//!
//! The listing talks to the store only through [`ListingAction`]s. The store
//! reduces `SaveRequest`/`ClearRequest` into its state and hands the remaining
//! actions to the [`QueryExecutor`] and [`DialogHost`] it was built with.

pub mod actions;
pub mod listing_store;

pub use actions::{DialogHost, Dispatch, ListingAction, QueryExecutor};
pub use listing_store::ListingStore;
