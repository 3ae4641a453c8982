pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use chalk_core::Store;
use serde::Deserialize;

pub use routes::archetype_routes;

#[derive(Deserialize)]
pub struct ArchetypeListRequest {
    #[serde(default)]
    pub position: Option<String>,
}

pub async fn archetype_list_action(
    State(state): State<AppData>,
    Query(params): Query<ArchetypeListRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut archetypes = state.store.archetypes()?;
    if let Some(position) = &params.position {
        let position = position.trim().to_uppercase();
        archetypes.retain(|a| a.position == position);
    }
    Ok(Json(archetypes))
}
