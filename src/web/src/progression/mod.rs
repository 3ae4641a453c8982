pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chalk_core::{CoreError, ProgressionEngine};
use serde::Deserialize;
use std::sync::Arc;

pub use routes::progression_routes;

#[derive(Deserialize)]
pub struct ProgressionRequest {
    pub start_season: i32,
    pub horizon: u32,
}

/// The whole-roster walk is CPU bound, so it runs off the async executor.
pub async fn progression_process_action(
    State(state): State<AppData>,
    Json(request): Json<ProgressionRequest>,
) -> ApiResult<impl IntoResponse> {
    let store = Arc::clone(&state.store);

    let result = tokio::task::spawn_blocking(move || {
        ProgressionEngine::ensure_snapshots(&*store, request.start_season, request.horizon)
    })
    .await;

    match result {
        Ok(report) => Ok(Json(report?)),
        Err(_) => Err(CoreError::Upstream("progression task aborted".to_string()).into()),
    }
}
