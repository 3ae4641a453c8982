use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn roster_routes() -> Router<AppData> {
    Router::new().route("/api/roster", get(super::roster_list_action))
}
