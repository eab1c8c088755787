//! lakeFS Actions API client library.
//!
//! A Rust library for reading action runs and hook runs from a lakeFS
//! server using a trait-based architecture where each operation (Get, List)
//! is defined as a trait that resource types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use lakeapi::{get_run, list_repository_runs, LakeClient};
//!
//! #[tokio::main]
//! async fn main() -> lakeapi::Result<()> {
//!     // Create client from environment variables
//!     let client = LakeClient::from_env()?;
//!
//!     // Get a run
//!     let run = get_run(&client, "repo1", "run1").await?;
//!     println!("Run {} is {}", run.run_id, run.status);
//!
//!     // List the first page of runs on main
//!     let page = list_repository_runs(&client, "repo1", None, Some(20), Some("main"), None).await?;
//!     println!("Found {} runs (more: {})", page.len(), page.has_more());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`LakeClient`] is the transport: authentication, request encoding and
//!   status-to-error mapping.
//! - [`Get`] and [`List`] are implemented by [`ActionRun`] and [`HookRun`].
//! - [`ActionsApi`] bundles a client with one method per API operation.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `LAKECTL_SERVER_ENDPOINT_URL` (optional) - Base URL (defaults to `http://localhost:8000/api/v1`;
//!   a bare `http://host:port` gets `/api/v1` appended)
//! - `LAKECTL_CREDENTIALS_ACCESS_KEY_ID` / `LAKECTL_CREDENTIALS_SECRET_ACCESS_KEY` - Access key pair
//! - `LAKEFS_ACCESS_TOKEN` - Bearer token, used when no access key pair is set
//! - `LAKEAPI_TIMEOUT_SECS` (optional) - Request timeout (defaults to 300)

mod actions;
mod client;
mod error;
mod models;
mod pagination;
mod traits;
mod validate;

pub mod cli;
pub mod mcp;
mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use actions::ActionsApi;
pub use client::{Credentials, LakeClient};
pub use error::{ApiErrorBody, LakeError, Result};
pub use pagination::{Page, Pagination, PaginationParams, DEFAULT_AMOUNT, MAX_AMOUNT};

// Re-export traits
pub use traits::{Get, List, DEFAULT_PAGE_SIZE};

// Re-export output formatting
pub use output::PrettyPrint;

// Re-export models
pub use models::{
    // Run types
    ActionRun,
    ActionRunList,
    ActionRunListQuery,
    RunKey,
    RunStatus,
    // Hook types
    HookOutput,
    HookRun,
    HookRunList,
    HookRunListQuery,
};

// Re-export convenience functions
pub use models::{get_run, list_all_repository_runs, list_repository_runs};
pub use models::{get_run_hook_output, list_all_run_hooks, list_run_hooks};
