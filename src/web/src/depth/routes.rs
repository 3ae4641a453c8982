use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn depth_routes() -> Router<AppData> {
    Router::new().route("/api/depth", get(super::depth_get_action))
}
