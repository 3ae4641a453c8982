use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "OFF")]
    Off,
    #[serde(rename = "DEF")]
    Def,
}

/// One depth-chart slot of a formation. `position_hints` is a required typed
/// field written at seed time; the first hint names the position the slot is
/// matched against, with the slot key as a last resort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationSlot {
    pub slot_key: String,
    pub position_hints: Vec<String>,
    /// Normalized board coordinates in [0,1].
    pub x: f32,
    pub y: f32,
}

/// A scheme identified by (side, name, variant) with an ordered slot list.
/// Seed/config data, read-only at resolution time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    pub id: String,
    pub side: Side,
    pub name: String,
    #[serde(default)]
    pub variant: Option<String>,
    pub slots: Vec<FormationSlot>,
}
