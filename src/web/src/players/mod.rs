pub mod routes;

use crate::{ApiError, ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use chalk_core::{
    ClassYear, CoreError, DevTrait, Player, RatingPredictor, RatingSnapshot, SourceType, Store,
    derive_enrollment_year, sanitize_name,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use routes::player_routes;

#[derive(Deserialize)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub position: String,
    /// Season the player is being registered at; the baseline snapshot is
    /// written for this season.
    pub registry_year: i32,
    pub class_year: ClassYear,
    #[serde(default)]
    pub redshirt: bool,
    pub archetype_id: String,
    #[serde(default)]
    pub dev_trait: DevTrait,
    #[serde(default)]
    pub dev_cap: Option<u8>,
    /// Partial rating inputs keyed by rating token.
    #[serde(default)]
    pub subset: HashMap<String, f64>,
}

#[derive(Serialize)]
pub struct PlayerCreatedDto {
    pub player: Player,
    pub season: i32,
    pub ovr: u8,
}

pub async fn player_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    Ok(Json(state.store.players()?))
}

pub async fn player_get_action(
    State(state): State<AppData>,
    Path(player_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let player = state
        .store
        .player(&player_id)?
        .ok_or_else(|| CoreError::NotFound(format!("player {}", player_id)))?;
    Ok(Json(player))
}

pub async fn player_create_action(
    State(state): State<AppData>,
    Json(request): Json<PlayerCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = sanitize_name(&request.name);
    if name.is_empty() {
        return Err(ApiError::BadRequest("name must not be empty".to_string()));
    }
    let position = request.position.trim().to_uppercase();
    if position.is_empty() {
        return Err(ApiError::BadRequest("position must not be empty".to_string()));
    }

    let prediction = RatingPredictor::predict_with_store(
        &*state.store,
        &position,
        &request.archetype_id,
        &request.subset,
        request.dev_trait,
        request.dev_cap,
    )?;

    let player = Player {
        id: state.store.new_player_id(),
        name,
        position,
        enrollment_year: derive_enrollment_year(
            request.registry_year,
            request.class_year,
            request.redshirt,
        ),
        redshirt: request.redshirt,
        archetype_id: Some(request.archetype_id),
        dev_trait: request.dev_trait,
        dev_cap: request.dev_cap,
        source: SourceType::Manual,
    };

    state.store.create_player(player.clone())?;
    state.store.create_snapshot(RatingSnapshot {
        player_id: player.id.clone(),
        season: request.registry_year,
        ratings: prediction.ratings,
        ovr: prediction.ovr,
        predicted: true,
    })?;

    info!(
        "player {} created at {} ({}, ovr {})",
        player.id, request.registry_year, player.position, prediction.ovr
    );

    Ok(Json(PlayerCreatedDto {
        player,
        season: request.registry_year,
        ovr: prediction.ovr,
    }))
}
