use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn archetype_routes() -> Router<AppData> {
    Router::new().route("/api/archetypes", get(super::archetype_list_action))
}
