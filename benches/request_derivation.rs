use std::hint::black_box;
use std::rc::Rc;

use criterion::{Criterion, criterion_group, criterion_main};
use provenance_listing::listing::derive_initial_request;
use provenance_listing::models::{NavigationParams, QueryRequest};
use provenance_listing::observable::State;
use provenance_listing::store::{DialogHost, ListingStore, QueryExecutor};
use provenance_listing::ProvenanceEventListing;

struct NullSinks;

impl QueryExecutor for NullSinks {
    fn resubmit(&self, request: &QueryRequest) {
        black_box(request);
    }
}

impl DialogHost for NullSinks {
    fn open_search_dialog(&self) {}
    fn open_event_dialog(&self, _id: &str) {}
}

fn bench_request_derivation(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_derivation");

    let params = NavigationParams::new(
        Some("0b4ac1e8-0190-1000-0000-00002f1a6e3c".to_string()),
        Some("8ae0c1d6-5b2e-4d7a-9c1b-3f0e2a7d9b11".to_string()),
    );
    group.bench_function("derive_initial_request", |b| {
        b.iter(|| derive_initial_request(black_box(&params)))
    });

    // Full cycle: activate, derive from the route, resubmit, tear down
    group.bench_function("activate_and_reconcile", |b| {
        b.iter(|| {
            let sinks = Rc::new(NullSinks);
            let store = Rc::new(ListingStore::new(sinks.clone(), sinks));
            let route = State::new(Some(params.clone()));
            let listing = ProvenanceEventListing::activate(Rc::clone(&store), &route);
            listing.teardown();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_request_derivation);
criterion_main!(benches);
