pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use chalk_core::Store;

pub use routes::formation_routes;

pub async fn formation_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.store.formations()?))
}
