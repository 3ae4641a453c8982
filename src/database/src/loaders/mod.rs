mod archetype;
mod formation;

pub use archetype::ArchetypeLoader;
pub use formation::FormationLoader;

use crate::store::Database;
use log::info;

pub struct DatabaseLoader;

impl DatabaseLoader {
    /// Builds a store seeded from the embedded archetype and formation data.
    /// Seeding goes through the same upserts a reseed would use, so loading
    /// over an existing data set never duplicates rows.
    pub fn load() -> Database {
        let database = Database::new();

        let archetypes = ArchetypeLoader::load();
        let archetype_count = archetypes.len();
        for archetype in archetypes {
            database
                .upsert_archetype(archetype)
                .expect("archetype seed failed");
        }

        let formations = FormationLoader::load();
        let formation_count = formations.len();
        for formation in formations {
            database
                .upsert_formation(formation)
                .expect("formation seed failed");
        }

        info!(
            "seeded {} archetypes, {} formations",
            archetype_count, formation_count
        );

        database
    }
}
