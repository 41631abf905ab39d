//! Explicit publish/subscribe primitives.
//!
//! [`Signal`] is a single-threaded listener registry; [`State`] adds a current
//! value that is replayed to new subscribers. [`Subscription`] is the RAII
//! handle that keeps a listener registered. Two consumption policies are
//! offered: every value (`subscribe`) and first accepted value only
//! (`subscribe_first`).

mod signal;
mod state;
mod subscription;

pub use signal::Signal;
pub use state::State;
pub use subscription::Subscription;
