use crate::ratings::DevTrait;
use serde::{Deserialize, Serialize};

/// The canonical position vocabulary used when creating players. Stored
/// positions stay raw strings because imported rosters use looser labels
/// ("TB", "OLB", "NICKEL") that the depth resolver normalizes on read.
pub const POSITIONS: &[&str] = &[
    "QB", "HB", "FB", "WR", "TE", "LT", "LG", "C", "RG", "RT", "LEDG", "REDG", "DT", "SAM",
    "MIKE", "WILL", "CB", "FS", "SS", "K", "P",
];

pub const OFF_POSITIONS: &[&str] = &["QB", "HB", "FB", "WR", "TE", "LT", "LG", "C", "RG", "RT"];

pub const DEF_POSITIONS: &[&str] = &[
    "LEDG", "REDG", "DT", "SAM", "MIKE", "WILL", "CB", "FS", "SS",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Manual,
    Import,
}

/// Roster identity and dev metadata. Ratings never live here: the
/// authoritative rating state per season is the player's [`RatingSnapshot`].
///
/// [`RatingSnapshot`]: crate::roster::RatingSnapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: String,
    pub enrollment_year: i32,
    #[serde(default)]
    pub redshirt: bool,
    #[serde(default)]
    pub archetype_id: Option<String>,
    #[serde(default)]
    pub dev_trait: DevTrait,
    #[serde(default)]
    pub dev_cap: Option<u8>,
    #[serde(default)]
    pub source: SourceType,
}
