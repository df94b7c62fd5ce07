use analyser_engine::{interpret_analyze_response, FailureKind, FAILED_TO_ANALYZE};

#[test]
fn success_without_analysis_is_empty_report() {
    let result = interpret_analyze_response(200, br#"{"success": true}"#);
    assert_eq!(result, Ok(String::new()));
}

#[test]
fn empty_error_string_is_not_a_server_message() {
    let err = interpret_analyze_response(200, br#"{"success": false, "error": ""}"#).unwrap_err();
    assert_eq!(err.kind, FailureKind::ServerReported);
    assert_eq!(err.message, FAILED_TO_ANALYZE);
}

#[test]
fn validation_detail_list_uses_first_message() {
    let body = br#"{"detail": [{"loc": ["body", "url"], "msg": "field required", "type": "missing"}]}"#;
    let err = interpret_analyze_response(422, body).unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(422));
    assert_eq!(err.message, "field required");
}

#[test]
fn error_field_wins_over_detail() {
    let body = br#"{"success": false, "error": "bad site", "detail": "other"}"#;
    let err = interpret_analyze_response(500, body).unwrap_err();
    assert_eq!(err.message, "bad site");
}

#[test]
fn non_json_error_status_uses_status_message() {
    let err = interpret_analyze_response(503, b"Service Unavailable").unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert_eq!(err.message, "Request failed with status code 503");
}
