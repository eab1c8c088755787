//! E2E tests using the mock lakeFS Actions server.
//!
//! These tests exercise full workflows against the mock server,
//! testing realistic scenarios rather than individual endpoints.

#![cfg(feature = "test-server")]

use std::collections::HashSet;

use lakeapi::mock_server::{Fixtures, MockServer, MockState};
use lakeapi::{
    ActionRun, ActionRunListQuery, ActionsApi, Credentials, HookRun, HookRunListQuery, LakeClient,
    LakeError, List, PaginationParams, RunStatus,
};

fn api_for(server: &MockServer) -> ActionsApi {
    ActionsApi::new(LakeClient::new(server.url(), Credentials::token("test-token")).unwrap())
}

// =============================================================================
// Server Lifecycle Tests
// =============================================================================

#[tokio::test]
async fn test_server_starts_on_random_port() {
    let server1 = MockServer::start().await;
    let server2 = MockServer::start().await;

    assert_ne!(server1.url(), server2.url());

    server1.shutdown().await;
    server2.shutdown().await;
}

#[tokio::test]
async fn test_server_shutdown_is_clean() {
    let server = MockServer::start().await;
    let url = server.url().to_string();

    server.shutdown().await;

    // After shutdown, server should not respond
    let client = reqwest::Client::new();
    let result = client.get(format!("{}/healthcheck", url)).send().await;

    assert!(result.is_err());
}

// =============================================================================
// Run Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_get_completed_run() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let run = api.get_run("repo1", "run1").await.expect("Failed to get run");

    assert_eq!(run.run_id, "run1");
    assert_eq!(run.status, RunStatus::Completed);

    server.shutdown().await;
}

#[tokio::test]
async fn test_get_missing_run_and_repository() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let err = api.get_run("repo1", "missing").await.unwrap_err();
    assert!(err.is_not_found());

    let err = api.get_run("no-such-repo", "run1").await.unwrap_err();
    assert!(err.is_not_found());

    let err = api
        .list_repository_runs("no-such-repo", None, None, None, None)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_then_get_each_run() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let page = api
        .list_repository_runs("repo1", None, None, None, None)
        .await
        .expect("Failed to list runs");
    assert!(!page.is_empty());

    for listed in &page {
        let run = api.get_run("repo1", &listed.run_id).await.unwrap();
        assert_eq!(&run, listed);
    }

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_runs_filtered_by_branch() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let page = api
        .list_repository_runs("repo1", None, None, Some("main"), None)
        .await
        .unwrap();

    assert!(!page.is_empty());
    assert!(page.iter().all(|r| r.branch == "main"));

    let page = api
        .list_repository_runs("repo1", None, None, Some("main"), Some("commit-run3"))
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.results[0].run_id, "run3");

    server.shutdown().await;
}

#[tokio::test]
async fn test_paging_through_runs_is_disjoint_and_complete() {
    let state = (0..25).fold(MockState::new(), |state, i| {
        state.with_run("repo1", Fixtures::completed_run(&format!("run{i:03}"), "main"))
    });
    let server = MockServer::with_state(state).await;
    let api = api_for(&server);

    let mut seen = Vec::new();
    let mut after: Option<String> = None;
    let mut pages = 0;

    loop {
        let page = api
            .list_repository_runs("repo1", after.as_deref(), Some(10), None, None)
            .await
            .unwrap();
        assert!(page.len() <= 10);
        pages += 1;

        seen.extend(page.iter().map(|r| r.run_id.clone()));
        match page.next_cursor() {
            Some(cursor) => after = Some(cursor.to_string()),
            None => break,
        }
    }

    assert_eq!(pages, 3);
    let unique: HashSet<_> = seen.iter().collect();
    assert_eq!(unique.len(), seen.len(), "pages overlap");

    let all = ActionRun::list_all(api.client(), &ActionRunListQuery::new("repo1"))
        .await
        .unwrap();
    let all_ids: Vec<_> = all.into_iter().map(|r| r.run_id).collect();
    assert_eq!(seen, all_ids);

    server.shutdown().await;
}

#[tokio::test]
async fn test_new_run_is_visible() {
    let server = MockServer::start_empty().await;
    let api = api_for(&server);

    server
        .state()
        .write()
        .await
        .insert_run("repo2", Fixtures::failed_run("late", "feature"));

    let run = api.get_run("repo2", "late").await.unwrap();
    assert!(run.is_failed());

    server.shutdown().await;
}

// =============================================================================
// Hook Workflow Tests
// =============================================================================

#[tokio::test]
async fn test_list_run_hooks_pages() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let first = api
        .list_run_hooks("repo1", "run1", Some(""), Some(10))
        .await
        .unwrap();
    assert!(first.len() <= 10);
    let cursor = first.next_cursor().expect("expected another page").to_string();

    let second = api
        .list_run_hooks("repo1", "run1", Some(&cursor), Some(10))
        .await
        .unwrap();
    assert!(!second.is_empty());
    assert!(second.next_cursor().is_none());

    let first_ids: HashSet<_> = first.iter().map(|h| &h.hook_run_id).collect();
    assert!(second.iter().all(|h| !first_ids.contains(&h.hook_run_id)));

    let all = HookRun::list_all(api.client(), &HookRunListQuery::new("repo1", "run1"))
        .await
        .unwrap();
    assert_eq!(all.len(), first.len() + second.len());

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_hooks_of_missing_run() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let err = api
        .list_run_hooks("repo1", "missing", None, None)
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    server.shutdown().await;
}

#[tokio::test]
async fn test_find_failed_hook_and_read_output() {
    let server = MockServer::start().await;
    let api = api_for(&server);

    let run = api.get_run("repo1", "run2").await.unwrap();
    assert!(run.is_failed());

    let hooks = run.hooks(api.client(), "repo1").await.unwrap();
    let failed = hooks
        .iter()
        .find(|h| h.is_failed())
        .expect("expected a failed hook");
    assert_eq!(failed.hook_run_id, "0000_0001");

    let output = api
        .get_run_hook_output("repo1", &run.run_id, &failed.hook_run_id)
        .await
        .unwrap();
    let mut sink = Vec::new();
    output.copy_to(&mut sink).await.unwrap();

    assert!(String::from_utf8(sink).unwrap().contains("schema mismatch"));

    server.shutdown().await;
}

#[tokio::test]
async fn test_large_output_streams_completely() {
    let body: Vec<u8> = (0..512 * 1024).map(|i| (i % 251) as u8).collect();
    let state = MockState::new()
        .with_run("repo1", Fixtures::completed_run("run1", "main"))
        .with_hooks("repo1", "run1", Fixtures::hook_runs(1))
        .with_output("repo1", "run1", "0000_0000", body.clone());
    let server = MockServer::with_state(state).await;
    let api = api_for(&server);

    let mut output = api
        .get_run_hook_output("repo1", "run1", "0000_0000")
        .await
        .unwrap();

    let mut received = 0usize;
    let mut chunks = 0usize;
    while let Some(chunk) = output.next_chunk().await.unwrap() {
        assert_eq!(&chunk[..], &body[received..received + chunk.len()]);
        received += chunk.len();
        chunks += 1;
    }

    assert_eq!(received, body.len());
    assert!(chunks >= 1);

    server.shutdown().await;
}

// =============================================================================
// Auth Tests
// =============================================================================

#[tokio::test]
async fn test_wrong_credentials_are_unauthorized() {
    let state = MockServer::default_state().with_required_token("secret-token");
    let server = MockServer::with_state(state).await;
    let api = api_for(&server);

    let err = api.get_run("repo1", "run1").await.unwrap_err();
    assert!(matches!(err, LakeError::Unauthorized { .. }));
    assert_eq!(err.status_code(), Some(401));

    let err = api
        .list_run_hooks("repo1", "run1", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, LakeError::Unauthorized { .. }));

    server.shutdown().await;
}

#[tokio::test]
async fn test_list_page_through_trait() {
    let server = MockServer::start().await;
    let client = LakeClient::new(server.url(), Credentials::token("test-token")).unwrap();

    let page = ActionRun::list_page(
        &client,
        &ActionRunListQuery::new("repo1").with_branch("dev"),
        &PaginationParams::new(None, Some(1)),
    )
    .await
    .unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.results[0].run_id, "run2");
    assert!(!page.has_more());

    server.shutdown().await;
}
