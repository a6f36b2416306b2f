use super::*;

// =============================================================
// interpret_deploy_response
// =============================================================

#[test]
fn deploy_ok_body_yields_timestamp_and_logs() {
    let result = interpret_deploy_response(200, r#"{"timestamp":"2024-01-01T00:00:00Z","logs":["ok"]}"#);
    assert_eq!(
        result,
        Ok(DeploySuccess { timestamp: "2024-01-01T00:00:00Z".to_owned(), logs: vec!["ok".to_owned()] })
    );
}

#[test]
fn deploy_error_status_carries_backend_message_and_logs() {
    let result = interpret_deploy_response(500, r#"{"error":"build failed","logs":["npm ERR!"]}"#);
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "build failed");
    assert_eq!(err.logs(), ["npm ERR!".to_owned()]);
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn deploy_error_status_without_json_uses_status_message() {
    let err = interpret_deploy_response(502, "<html>bad gateway</html>").unwrap_err();
    assert_eq!(err.to_string(), "request failed: 502");
    assert!(err.logs().is_empty());
}

#[test]
fn deploy_ok_status_with_error_body_is_failure() {
    let err = interpret_deploy_response(200, r#"{"error":"locked","logs":[]}"#).unwrap_err();
    assert_eq!(err.to_string(), "locked");
}

#[test]
fn deploy_ok_status_with_garbage_body_is_decode_error() {
    let err = interpret_deploy_response(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// decode_json
// =============================================================

#[test]
fn decode_json_reads_commit_list() {
    let body = r#"[{"hash":"abc1234","message":"m","author":"a","timestamp":"t"}]"#;
    let commits: Vec<Commit> = decode_json(200, body).unwrap();
    assert_eq!(commits.len(), 1);
    assert_eq!(commits[0].hash, "abc1234");
}

#[test]
fn decode_json_maps_not_found() {
    let err = decode_json::<Vec<Commit>>(404, "").unwrap_err();
    assert_eq!(err, ApiError::Status { status: 404, error: "request failed: 404".to_owned(), logs: Vec::new() });
}

// =============================================================
// interpret_ack
// =============================================================

#[test]
fn ack_accepts_empty_body() {
    assert_eq!(interpret_ack(204, ""), Ok(Ack::default()));
}

#[test]
fn ack_accepts_success_flag() {
    let ack = interpret_ack(200, r#"{"success":true,"message":"saved"}"#).unwrap();
    assert_eq!(ack.message.as_deref(), Some("saved"));
}

#[test]
fn ack_rejects_error_field() {
    let err = interpret_ack(200, r#"{"error":"notes too long"}"#).unwrap_err();
    assert_eq!(err.to_string(), "notes too long");
}

#[test]
fn ack_rejects_false_success_flag() {
    let err = interpret_ack(200, r#"{"success":false}"#).unwrap_err();
    assert_eq!(err.to_string(), "request rejected");
}

// =============================================================
// Error display
// =============================================================

#[test]
fn network_error_displays_reason_verbatim() {
    assert_eq!(ApiError::Network("Failed to fetch".to_owned()).to_string(), "Failed to fetch");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_off_browser() {
    assert_eq!(futures::executor::block_on(trigger_admin_deploy()), Err(ApiError::Unavailable));
    assert_eq!(futures::executor::block_on(fetch_commits()), Err(ApiError::Unavailable));
}
