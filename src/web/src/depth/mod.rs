pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use chalk_core::{DepthResolver, DepthView};
use log::warn;
use serde::Deserialize;
use std::env;

pub use routes::depth_routes;

#[derive(Deserialize)]
pub struct DepthRequest {
    pub formation_id: String,
    pub season: i32,
    #[serde(default)]
    pub view: Option<String>,
}

pub async fn depth_get_action(
    State(state): State<AppData>,
    Query(params): Query<DepthRequest>,
) -> ApiResult<impl IntoResponse> {
    let view = match &params.view {
        Some(raw) => raw.parse::<DepthView>().map_err(ApiError::Core)?,
        None => DepthView::Starters,
    };

    let curve = weight_curve_override();
    let chart = DepthResolver::resolve_with_curve(
        &*state.store,
        &params.formation_id,
        params.season,
        view,
        curve.as_deref(),
    )?;

    Ok(Json(chart))
}

/// DEPTH_WEIGHTS is a comma list of floats replacing the global fallback
/// curve of the weighted view. Malformed values are ignored, not fatal.
fn weight_curve_override() -> Option<Vec<f64>> {
    let raw = env::var("DEPTH_WEIGHTS").ok()?;
    let parsed: Result<Vec<f64>, _> = raw.split(',').map(|t| t.trim().parse::<f64>()).collect();
    match parsed {
        Ok(weights) if !weights.is_empty() && weights.iter().all(|w| *w >= 0.0) => Some(weights),
        _ => {
            warn!("ignoring malformed DEPTH_WEIGHTS '{}'", raw);
            None
        }
    }
}
