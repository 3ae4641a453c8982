pub mod formation;
pub mod player;
pub mod snapshot;

pub use formation::{Formation, FormationSlot, Side};
pub use player::{DEF_POSITIONS, OFF_POSITIONS, POSITIONS, Player, SourceType};
pub use snapshot::{RatingSnapshot, SnapshotOvr};
