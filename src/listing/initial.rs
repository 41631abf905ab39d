use crate::models::{
    FLOW_FILE_UUID_TERM, NavigationParams, PROCESSOR_ID_TERM, QueryRequest, SearchTerm,
};

/// Build the first request of a listing from the route's searchable fields.
///
/// Starts from the default request and adds a non-inverted `ProcessorID` term
/// for the component id and a `FlowFileUUID` term for the flow file uuid. When
/// neither is present the request carries no search terms at all.
pub fn derive_initial_request(params: &NavigationParams) -> QueryRequest {
    let mut request = QueryRequest::default();

    if let Some(component_id) = params.component_id() {
        request = request.with_search_term(PROCESSOR_ID_TERM, SearchTerm::matching(component_id));
    }
    if let Some(flow_file_uuid) = params.flow_file_uuid() {
        request =
            request.with_search_term(FLOW_FILE_UUID_TERM, SearchTerm::matching(flow_file_uuid));
    }

    request
}

/// Substitute the default request for an absent persisted one
pub fn normalize_request(request: Option<&QueryRequest>) -> QueryRequest {
    request.cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(component_id: Option<&str>, flow_file_uuid: Option<&str>) -> NavigationParams {
        NavigationParams::new(component_id.map(String::from), flow_file_uuid.map(String::from))
    }

    #[test]
    fn test_no_identifiers_gives_default_request() {
        let request = derive_initial_request(&params(None, None));
        assert_eq!(request, QueryRequest::default());
        assert!(request.search_terms.is_none());
    }

    #[test]
    fn test_component_id_only() {
        let request = derive_initial_request(&params(Some("proc-1"), None));
        let terms = request.search_terms.as_ref().unwrap();

        assert_eq!(terms.len(), 1);
        assert_eq!(terms[PROCESSOR_ID_TERM], SearchTerm::matching("proc-1"));
    }

    #[test]
    fn test_flow_file_uuid_only() {
        let request = derive_initial_request(&params(None, Some("ff-1")));
        let terms = request.search_terms.as_ref().unwrap();

        assert_eq!(terms.len(), 1);
        assert_eq!(terms[FLOW_FILE_UUID_TERM], SearchTerm::matching("ff-1"));
    }

    #[test]
    fn test_both_identifiers() {
        let request = derive_initial_request(&params(Some("proc-1"), Some("ff-1")));
        let terms = request.search_terms.as_ref().unwrap();

        assert_eq!(terms.len(), 2);
        assert_eq!(terms[PROCESSOR_ID_TERM], SearchTerm { value: "proc-1".into(), inverse: false });
        assert_eq!(terms[FLOW_FILE_UUID_TERM], SearchTerm { value: "ff-1".into(), inverse: false });
        assert_eq!(request.max_results.get(), 1000);
        assert!(request.summarize);
        assert!(!request.incremental_results);
    }

    #[test]
    fn test_empty_identifiers_are_ignored() {
        let request = derive_initial_request(&params(Some(""), Some("")));
        assert!(request.search_terms.is_none());
    }

    #[test]
    fn test_normalize_absent_request() {
        assert_eq!(normalize_request(None), QueryRequest::default());
    }

    #[test]
    fn test_normalize_present_request_passes_through() {
        let request = derive_initial_request(&params(Some("proc-1"), None));
        assert_eq!(normalize_request(Some(&request)), request);
    }
}
