pub mod archetype;
pub mod depth;
pub mod error;
pub mod predict;
pub mod progression;
pub mod ratings;
pub mod roster;
pub mod store;

#[cfg(test)]
pub mod testing;

pub use error::{CoreError, Result};

// Rating exports
pub use ratings::{
    ClassYear, DevTrait, RatingKey, RatingVector, clamp_rating, class_from, compress_over_cap,
    compute_ovr, derive_enrollment_year, sanitize_name,
};

// Roster exports
pub use roster::{
    Formation, FormationSlot, OFF_POSITIONS, DEF_POSITIONS, POSITIONS, Player, RatingSnapshot,
    Side, SnapshotOvr, SourceType,
};

// Archetype exports
pub use archetype::{Archetype, MappingRule};

// Engine exports
pub use predict::{Prediction, RatingPredictor};
pub use progression::{PlayerFailure, ProgressionEngine, ProgressionReport};
pub use depth::{
    DepthChart, DepthPlayer, DepthResolver, DepthView, FormationMeta, SlotAssignment, SlotEntry,
    WeightedContributor,
};

pub use store::Store;
