//! Request reconciliation for the provenance event listing.
//!
//! Two subscriptions are held for the lifetime of a [`ProvenanceEventListing`]:
//!
//! - **Initial derivation**: the first present navigation snapshot is turned
//!   into a request and saved to the store once. A route already known at
//!   activation is saved before the resubmission subscription attaches, so the
//!   first query is the scoped one. Later snapshots are ignored so route
//!   changes never clobber a request the user has since edited.
//! - **Resubmission**: every value the store emits for the persisted request
//!   (including the replay on subscription) is normalized, cached as the last
//!   known request, then resubmitted. Cache update always precedes dispatch.
//!
//! Both are released by [`ProvenanceEventListing::teardown`] or on drop; no
//! resubmission is dispatched afterwards.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use super::initial::{derive_initial_request, normalize_request};
use super::message::results_message;
use crate::models::{EventSummary, NavigationParams, Provenance, QueryRequest};
use crate::observable::{State, Subscription};
use crate::store::{Dispatch, ListingAction, ListingStore};

/// Last request observed from the store, replayed by refresh
#[derive(Debug, Default)]
struct ReconciliationState {
    request: Option<QueryRequest>,
}

/// Keeps the listing's provenance query in step with the persisted request
pub struct ProvenanceEventListing {
    store: Rc<ListingStore>,
    state: Rc<RefCell<ReconciliationState>>,
    navigation: Option<Subscription>,
    requests: Option<Subscription>,
}

impl ProvenanceEventListing {
    /// Wire the listing to `store` and the route's searchable fields.
    ///
    /// The route is subscribed first: a snapshot it already holds is saved
    /// before the persisted request is replayed.
    pub fn activate(
        store: Rc<ListingStore>,
        navigation: &State<Option<NavigationParams>>,
    ) -> Self {
        let state = Rc::new(RefCell::new(ReconciliationState::default()));
        let navigation = Some(Self::derive_initial(&store, navigation));
        let requests = Some(Self::resubmit_on_change(&store, &state));
        debug!("provenance listing activated");

        Self { store, state, navigation, requests }
    }

    fn derive_initial(
        store: &Rc<ListingStore>,
        navigation: &State<Option<NavigationParams>>,
    ) -> Subscription {
        let store = Rc::downgrade(store);
        navigation.subscribe_first(
            |params| params.is_some(),
            move |params| {
                let Some(params) = params else {
                    return;
                };
                let request = derive_initial_request(params);
                debug!(scoped = request.has_explicit_scope(), "derived initial provenance request");
                if let Some(store) = store.upgrade() {
                    store.dispatch(ListingAction::SaveRequest { request });
                }
            },
        )
    }

    fn resubmit_on_change(
        store: &Rc<ListingStore>,
        state: &Rc<RefCell<ReconciliationState>>,
    ) -> Subscription {
        let handle = Rc::downgrade(store);
        let state = Rc::clone(state);
        store.select_request(move |request| {
            let request = normalize_request(request.as_ref());
            state.borrow_mut().request = Some(request.clone());
            debug!(scoped = request.has_explicit_scope(), "resubmitting provenance query");
            if let Some(store) = handle.upgrade() {
                store.dispatch(ListingAction::ResubmitQuery { request });
            }
        })
    }

    /// Last request observed from the store
    pub fn current_request(&self) -> Option<QueryRequest> {
        self.state.borrow().request.clone()
    }

    /// True until teardown
    pub fn is_active(&self) -> bool {
        self.requests.is_some()
    }

    pub fn results_message(&self, provenance: &Provenance) -> String {
        results_message(provenance)
    }

    pub fn clear_request(&self) {
        debug!("clearing provenance request");
        self.store.dispatch(ListingAction::ClearRequest);
    }

    pub fn open_search_criteria(&self) {
        self.store.dispatch(ListingAction::OpenSearchDialog);
    }

    pub fn open_event_dialog(&self, event: &EventSummary) {
        self.store.dispatch(ListingAction::OpenEventDialog { id: event.id.clone() });
    }

    /// Re-run the last known request as-is.
    ///
    /// Before the store has emitted anything the default request is seeded and
    /// used instead.
    pub fn refresh(&self) {
        let cached = self.state.borrow().request.clone();
        let request = match cached {
            Some(request) => request,
            None => {
                warn!("refresh before any persisted request was observed, using default request");
                let request = QueryRequest::default();
                self.state.borrow_mut().request = Some(request.clone());
                request
            }
        };
        self.store.dispatch(ListingAction::ResubmitQuery { request });
    }

    /// Release both subscriptions. Nothing is dispatched afterwards.
    pub fn teardown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.navigation.take();
        if self.requests.take().is_some() {
            debug!("provenance listing torn down");
        }
    }
}

impl Drop for ProvenanceEventListing {
    fn drop(&mut self) {
        self.release();
    }
}
