mod generators;
mod loaders;
mod store;

pub use generators::RosterGenerator;
pub use loaders::DatabaseLoader;
pub use store::Database;
