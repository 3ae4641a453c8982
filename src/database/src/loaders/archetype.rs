use chalk_core::Archetype;
use std::collections::HashMap;

const STATIC_ARCHETYPES_CSV: &str = include_str!("../data/archetypes.csv");

/// Seed rows are `position,name,subset keys...`. Templates and mapping rules
/// start empty; administrators fill them in per archetype, and prediction
/// falls back to the positional heuristics until then.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    pub fn load() -> Vec<Archetype> {
        Self::parse(STATIC_ARCHETYPES_CSV)
    }

    fn parse(raw: &str) -> Vec<Archetype> {
        raw.lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(Self::parse_row)
            .collect()
    }

    fn parse_row(line: &str) -> Option<Archetype> {
        let mut cells = line.split(',').map(|c| c.trim().trim_matches('"'));
        let position = cells.next()?;
        let name = cells.next()?;
        if position.is_empty() || name.is_empty() {
            return None;
        }

        Some(Archetype {
            id: archetype_id(position, name),
            position: position.to_string(),
            name: name.to_string(),
            subset_keys: cells
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            base_template: HashMap::new(),
            mapping: HashMap::new(),
        })
    }
}

/// Deterministic slug, so reseeding produces the same ids.
fn archetype_id(position: &str, name: &str) -> String {
    format!("{}-{}", position, name)
        .to_lowercase()
        .replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chalk_core::{POSITIONS, RatingKey};

    #[test]
    fn every_seed_row_parses_into_a_known_position() {
        let archetypes = ArchetypeLoader::load();
        assert!(archetypes.len() >= 20);
        for archetype in &archetypes {
            assert!(
                POSITIONS.contains(&archetype.position.as_str()),
                "{}",
                archetype.position
            );
            assert!(!archetype.subset_keys.is_empty(), "{}", archetype.id);
            for key in &archetype.subset_keys {
                assert!(key.parse::<RatingKey>().is_ok(), "{}", key);
            }
        }
    }

    #[test]
    fn ids_are_deterministic_slugs() {
        assert_eq!("qb-pocket-passer", archetype_id("QB", "Pocket Passer"));
        let archetypes = ArchetypeLoader::load();
        let reloaded = ArchetypeLoader::load();
        assert_eq!(
            archetypes.iter().map(|a| &a.id).collect::<Vec<_>>(),
            reloaded.iter().map(|a| &a.id).collect::<Vec<_>>()
        );
    }

    #[test]
    fn malformed_rows_are_dropped() {
        let parsed = ArchetypeLoader::parse("WR,Deep Threat,SPD\n,,\n\nQB,");
        assert_eq!(1, parsed.len());
        assert_eq!("wr-deep-threat", parsed[0].id);
    }
}
