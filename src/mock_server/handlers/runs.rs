//! Action run endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_auth, error_response};
use crate::mock_server::state::MockState;

/// Query parameters for listing runs.
#[derive(Debug, Default, Deserialize)]
pub struct ListRunsQuery {
    pub after: Option<String>,
    pub amount: Option<u32>,
    pub branch: Option<String>,
    pub commit: Option<String>,
}

/// GET /repositories/{repository}/actions/runs/{run_id}
pub async fn get_run(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((repository, run_id)): Path<(String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(response) = check_auth(&state, &headers) {
        return response;
    }

    if !state.has_repository(&repository) {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("repository not found: {repository}"),
        );
    }

    match state.get_run(&repository, &run_id) {
        Some(run) => (StatusCode::OK, Json(run.clone())).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("run not found: {run_id}")),
    }
}

/// GET /repositories/{repository}/actions/runs
pub async fn list_runs(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path(repository): Path<String>,
    Query(query): Query<ListRunsQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(response) = check_auth(&state, &headers) {
        return response;
    }

    if !state.has_repository(&repository) {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("repository not found: {repository}"),
        );
    }

    let page = state.list_runs(
        &repository,
        query.branch.as_deref(),
        query.commit.as_deref(),
        query.after.as_deref(),
        query.amount,
    );

    (StatusCode::OK, Json(page)).into_response()
}
