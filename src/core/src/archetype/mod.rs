pub mod archetype;

pub use archetype::{Archetype, MappingRule};
