use crate::models::{MAX_RESULTS, Provenance, QueryRequest, QueryResults};

/// Status line shown above the provenance event table
pub fn results_message(provenance: &Provenance) -> String {
    let max_results = u64::from(MAX_RESULTS.get());
    results_message_with_limit(&provenance.request, &provenance.results, max_results)
}

/// Same as [`results_message`] with an explicit display cap
pub fn results_message_with_limit(
    request: &QueryRequest,
    results: &QueryResults,
    max_results: u64,
) -> String {
    let capped = results.total_count >= max_results;

    match (request.has_explicit_scope(), capped) {
        (true, true) => format!(
            "Showing {} of {} events that match the specified query, please refine the search.",
            max_results, results.total_count
        ),
        (true, false) => "Showing the events that match the specified query.".to_string(),
        (false, true) => format!(
            "Showing the most recent {} of {} events, please refine the search.",
            max_results, results.total_count
        ),
        (false, false) => "Showing the most recent events.".to_string(),
    }
}
