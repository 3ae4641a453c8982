use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn progression_routes() -> Router<AppData> {
    Router::new().route("/api/progression", post(super::progression_process_action))
}
