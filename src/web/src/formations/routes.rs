use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn formation_routes() -> Router<AppData> {
    Router::new().route("/api/formations", get(super::formation_list_action))
}
