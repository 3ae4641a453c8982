use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn player_routes() -> Router<AppData> {
    Router::new()
        .route(
            "/api/players",
            get(super::player_list_action).post(super::player_create_action),
        )
        .route("/api/players/{player_id}", get(super::player_get_action))
}
