use crate::AppData;
use crate::archetypes::archetype_routes;
use crate::depth::depth_routes;
use crate::formations::formation_routes;
use crate::players::player_routes;
use crate::progression::progression_routes;
use crate::roster::roster_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(depth_routes())
            .merge(progression_routes())
            .merge(player_routes())
            .merge(roster_routes())
            .merge(archetype_routes())
            .merge(formation_routes())
    }
}
