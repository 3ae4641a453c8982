use crate::ratings::RatingVector;
use serde::{Deserialize, Serialize};

/// A player's complete rating vector as of one season. At most one snapshot
/// exists per (player, season); the store enforces that invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingSnapshot {
    pub player_id: String,
    pub season: i32,
    pub ratings: RatingVector,
    pub ovr: u8,
    /// True when the engine generated the ratings rather than a person
    /// entering them.
    pub predicted: bool,
}

/// Projection of a snapshot used by the depth resolver, which only needs OVR.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotOvr {
    pub player_id: String,
    pub ovr: u8,
}
