pub mod normalize;
pub mod resolver;
pub mod weights;

pub use resolver::{
    DepthChart, DepthPlayer, DepthResolver, DepthView, FormationMeta, SlotAssignment, SlotEntry,
    WeightedContributor,
};
