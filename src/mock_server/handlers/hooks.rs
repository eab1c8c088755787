//! Hook run endpoint handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tokio::sync::RwLock;

use super::{check_auth, error_response};
use crate::mock_server::state::MockState;

/// Query parameters for listing hook runs.
#[derive(Debug, Default, Deserialize)]
pub struct ListHooksQuery {
    pub after: Option<String>,
    pub amount: Option<u32>,
}

/// GET /repositories/{repository}/actions/runs/{run_id}/hooks
pub async fn list_hooks(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((repository, run_id)): Path<(String, String)>,
    Query(query): Query<ListHooksQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(response) = check_auth(&state, &headers) {
        return response;
    }

    if state.get_run(&repository, &run_id).is_none() {
        return error_response(
            StatusCode::NOT_FOUND,
            format!("run not found: {repository}/{run_id}"),
        );
    }

    let page = state.list_hooks(
        &repository,
        &run_id,
        query.after.as_deref(),
        query.amount,
    );

    (StatusCode::OK, Json(page)).into_response()
}

/// GET /repositories/{repository}/actions/runs/{run_id}/hooks/{hook_run_id}/output
pub async fn get_hook_output(
    State(state): State<Arc<RwLock<MockState>>>,
    headers: HeaderMap,
    Path((repository, run_id, hook_run_id)): Path<(String, String, String)>,
) -> impl IntoResponse {
    let state = state.read().await;
    if let Err(response) = check_auth(&state, &headers) {
        return response;
    }

    match state.get_output(&repository, &run_id, &hook_run_id) {
        Some(output) => (
            StatusCode::OK,
            [(CONTENT_TYPE, "application/octet-stream")],
            output.to_vec(),
        )
            .into_response(),
        None => error_response(
            StatusCode::NOT_FOUND,
            format!("hook output not found: {run_id}/{hook_run_id}"),
        ),
    }
}
