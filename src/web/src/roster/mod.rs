pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use chalk_core::{Store, class_from};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

pub use routes::roster_routes;

#[derive(Deserialize)]
pub struct RosterRequest {
    pub season: i32,
}

#[derive(Serialize)]
pub struct RosterEntryDto {
    pub id: String,
    pub name: String,
    pub position: String,
    pub class: &'static str,
    /// None when the player has no snapshot for the requested season.
    pub ovr: Option<u8>,
}

/// Roster listing for one season: class standing plus that season's OVR,
/// best first, players without a snapshot at the end.
pub async fn roster_list_action(
    State(state): State<AppData>,
    Query(params): Query<RosterRequest>,
) -> ApiResult<impl IntoResponse> {
    let season = params.season;

    let mut entries = Vec::new();
    for player in state.store.players()? {
        let ovr = state.store.snapshot(&player.id, season)?.map(|s| s.ovr);
        entries.push(RosterEntryDto {
            id: player.id,
            name: player.name,
            position: player.position,
            class: class_from(season, player.enrollment_year, player.redshirt),
            ovr,
        });
    }

    let entries: Vec<_> = entries
        .into_iter()
        .sorted_by_key(|e| Reverse(e.ovr.map(i32::from).unwrap_or(-1)))
        .collect();

    Ok(Json(entries))
}
