//! Tests for MCP get and output tool handlers.
//!
//! Uses wiremock to mock the lakeFS API and test the MCP tool dispatch.

use lakeapi::mcp::{ActionsServer, GetParams, ListParams, OutputParams, ResourceType};
use lakeapi::{Credentials, LakeClient};
use wiremock::matchers::{any, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn server_for(mock_server: &MockServer) -> ActionsServer {
    let client = LakeClient::new(&mock_server.uri(), Credentials::token("test-token")).unwrap();
    ActionsServer::new(client)
}

/// Helper to build GetParams.
fn get_params(repository: &str, run_id: &str) -> GetParams {
    GetParams {
        repository: repository.to_string(),
        run_id: run_id.to_string(),
    }
}

/// Extract text from CallToolResult content.
fn extract_text(result: &rmcp::model::CallToolResult) -> &str {
    let content = &result.content[0];
    content.raw.as_text().expect("Expected text content").text.as_str()
}

#[tokio::test]
async fn test_mcp_get_run_returns_json() {
    let mock_server = MockServer::start().await;

    let run_json = serde_json::json!({
        "run_id": "run1",
        "branch": "main",
        "commit_id": "c0ffee",
        "status": "failed",
        "event_type": "pre-merge",
        "start_time": "2021-03-04T10:00:00Z"
    });

    Mock::given(method("GET"))
        .and(path("/repositories/repo1/actions/runs/run1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&run_json))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server_for(&mock_server)
        .handle_get(get_params("repo1", "run1"))
        .await
        .expect("handle_get should succeed");

    assert!(!result.is_error.unwrap_or(false));
    let text = extract_text(&result);
    let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed["run_id"], "run1");
    assert_eq!(parsed["status"], "failed");
}

#[tokio::test]
async fn test_mcp_get_missing_run_returns_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repositories/repo1/actions/runs/missing"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(serde_json::json!({"message": "run not found"})),
        )
        .mount(&mock_server)
        .await;

    let err = server_for(&mock_server)
        .handle_get(get_params("repo1", "missing"))
        .await
        .expect_err("missing run should fail");

    let err_msg = format!("{:?}", err);
    assert!(err_msg.contains("run not found"), "{err_msg}");
}

#[tokio::test]
async fn test_mcp_get_empty_id_fails_before_request() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = server_for(&mock_server)
        .handle_get(get_params("repo1", ""))
        .await
        .expect_err("empty run id should fail");

    let err_msg = format!("{:?}", err);
    assert!(err_msg.contains("run_id"), "{err_msg}");
}

#[tokio::test]
async fn test_mcp_list_hooks_returns_page() {
    let mock_server = MockServer::start().await;

    let response = serde_json::json!({
        "pagination": {"has_more": true, "next_offset": "0000_0000", "results": 1, "max_per_page": 1000},
        "results": [{
            "hook_run_id": "0000_0000",
            "action": "validate_tables",
            "hook_id": "check",
            "status": "completed",
            "start_time": "2021-03-04T10:00:00Z"
        }]
    });

    Mock::given(method("GET"))
        .and(path("/repositories/repo1/actions/runs/run1/hooks"))
        .and(query_param("amount", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server_for(&mock_server)
        .handle_list(ListParams {
            resource: ResourceType::Hook,
            repository: "repo1".to_string(),
            run_id: Some("run1".to_string()),
            after: None,
            amount: Some(1),
            branch: None,
            commit: None,
        })
        .await
        .expect("handle_list should succeed");

    let parsed: serde_json::Value = serde_json::from_str(extract_text(&result)).unwrap();
    assert_eq!(parsed["pagination"]["next_offset"], "0000_0000");
    assert_eq!(parsed["results"][0]["hook_id"], "check");
}

#[tokio::test]
async fn test_mcp_output_returns_whole_small_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repositories/repo1/actions/runs/run1/hooks/0000_0000/output"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/octet-stream")
                .set_body_bytes(b"all good\n".to_vec()),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = server_for(&mock_server)
        .handle_output(OutputParams {
            repository: "repo1".to_string(),
            run_id: "run1".to_string(),
            hook_run_id: "0000_0000".to_string(),
            tail_bytes: None,
        })
        .await
        .expect("handle_output should succeed");

    assert_eq!(extract_text(&result), "all good\n");
}
