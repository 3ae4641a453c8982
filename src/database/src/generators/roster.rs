use crate::store::Database;
use chalk_core::{
    ClassYear, DevTrait, Player, RatingPredictor, RatingSnapshot, Result, SourceType, Store,
    derive_enrollment_year,
};
use log::debug;
use rand::RngExt;
use std::collections::HashMap;

const FIRST_NAMES: &[&str] = &[
    "Marcus", "Jalen", "DeShawn", "Tyler", "Caleb", "Jordan", "Malik", "Brady", "Xavier", "Trent",
    "Isaiah", "Cole", "Darius", "Hunter", "Amari", "Gavin", "Tremaine", "Wyatt", "Kenny", "Drew",
    "Javon", "Reese", "Omar", "Chase",
];

const LAST_NAMES: &[&str] = &[
    "Washington", "Bell", "Carter", "Hayes", "Mitchell", "Brooks", "Jenkins", "Ford", "Sanders",
    "Price", "Coleman", "Watts", "Gibson", "Hargrove", "Dillon", "McCray", "Pruitt", "Tate",
    "Vance", "Whitfield", "Barnes", "Okafor", "Lattimore", "Nix",
];

/// Demo roster size per position.
const POSITION_COUNTS: &[(&str, usize)] = &[
    ("QB", 3),
    ("HB", 4),
    ("FB", 1),
    ("WR", 6),
    ("TE", 3),
    ("LT", 2),
    ("LG", 2),
    ("C", 2),
    ("RG", 2),
    ("RT", 2),
    ("LEDG", 3),
    ("REDG", 3),
    ("DT", 4),
    ("SAM", 3),
    ("MIKE", 3),
    ("WILL", 3),
    ("CB", 6),
    ("FS", 2),
    ("SS", 2),
    ("K", 1),
    ("P", 1),
];

const CLASS_YEARS: &[ClassYear] = &[
    ClassYear::Freshman,
    ClassYear::Sophomore,
    ClassYear::Junior,
    ClassYear::Senior,
];

pub struct RosterGenerator;

impl RosterGenerator {
    /// Fills the store with a randomized roster whose baseline snapshots are
    /// archetype predictions at `season`. Positions without a seeded
    /// archetype are left unstaffed.
    pub fn generate(database: &Database, season: i32) -> Result<usize> {
        let archetypes = database.archetypes()?;
        let mut rng = rand::rng();
        let mut created = 0usize;

        for &(position, count) in POSITION_COUNTS {
            let candidates: Vec<_> = archetypes
                .iter()
                .filter(|a| a.position == position)
                .collect();
            if candidates.is_empty() {
                debug!("no archetype seeded for {}, skipping", position);
                continue;
            }

            for _ in 0..count {
                let archetype = candidates[rng.random_range(0..candidates.len())];
                let class_year = CLASS_YEARS[rng.random_range(0..CLASS_YEARS.len())];
                let redshirt = rng.random_bool(0.2);
                let dev_trait = random_dev_trait(&mut rng);

                let subset: HashMap<String, f64> = archetype
                    .subset_keys
                    .iter()
                    .map(|key| (key.clone(), rng.random_range(55..=92) as f64))
                    .collect();
                let prediction =
                    RatingPredictor::predict(archetype, position, &subset, dev_trait, None);

                let id = database.new_player_id();
                database.create_player(Player {
                    id: id.clone(),
                    name: random_name(&mut rng),
                    position: position.to_string(),
                    enrollment_year: derive_enrollment_year(season, class_year, redshirt),
                    redshirt,
                    archetype_id: Some(archetype.id.clone()),
                    dev_trait,
                    dev_cap: None,
                    source: SourceType::Import,
                })?;
                database.create_snapshot(RatingSnapshot {
                    player_id: id,
                    season,
                    ratings: prediction.ratings,
                    ovr: prediction.ovr,
                    predicted: true,
                })?;

                created += 1;
            }
        }

        Ok(created)
    }
}

fn random_name(rng: &mut impl RngExt) -> String {
    format!(
        "{} {}",
        FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())],
        LAST_NAMES[rng.random_range(0..LAST_NAMES.len())]
    )
}

fn random_dev_trait(rng: &mut impl RngExt) -> DevTrait {
    match rng.random_range(0..100) {
        0..60 => DevTrait::Normal,
        60..80 => DevTrait::Impact,
        80..95 => DevTrait::Star,
        _ => DevTrait::Elite,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;
    use chalk_core::{POSITIONS, compute_ovr};

    #[test]
    fn generated_roster_covers_the_seeded_positions() {
        let database = DatabaseLoader::load();

        let created = RosterGenerator::generate(&database, 2026).unwrap();

        let players = database.players().unwrap();
        assert_eq!(created, players.len());
        assert!(created > 0);
        for player in &players {
            assert!(POSITIONS.contains(&player.position.as_str()));
            assert!(player.archetype_id.is_some());
            assert!(player.enrollment_year <= 2026);
        }
    }

    #[test]
    fn every_generated_player_has_a_consistent_baseline_snapshot() {
        let database = DatabaseLoader::load();
        RosterGenerator::generate(&database, 2026).unwrap();

        for player in database.players().unwrap() {
            let snapshot = database.snapshot(&player.id, 2026).unwrap().unwrap();
            assert!(snapshot.predicted);
            assert_eq!(snapshot.ovr, compute_ovr(&player.position, &snapshot.ratings));
        }
    }
}
