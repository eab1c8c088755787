//! Mock lakeFS Actions server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the lakeFS
//! Actions API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server maintains state across
//! requests, so cursor pagination and hook output streaming can be exercised
//! as real workflows.
//!
//! # Example
//!
//! ```ignore
//! use lakeapi::mock_server::MockServer;
//! use lakeapi::{get_run, Credentials, LakeClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = LakeClient::new(server.url(), Credentials::token("test-token")).unwrap();
//!
//!     // Server comes with default fixtures
//!     let run = get_run(&client, "repo1", "run1").await.unwrap();
//!     assert!(run.is_completed());
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::MockState;
