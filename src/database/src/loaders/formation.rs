use chalk_core::{Formation, FormationSlot, Side};
use serde::Deserialize;

const STATIC_FORMATIONS_JSON: &str = include_str!("../data/formations.json");

#[derive(Deserialize)]
pub struct FormationEntity {
    pub side: Side,
    pub name: String,
    pub variant: Option<String>,
    pub slots: Vec<FormationSlotEntity>,
}

#[derive(Deserialize)]
pub struct FormationSlotEntity {
    pub slot_key: String,
    pub hint: String,
    pub x: f32,
    pub y: f32,
}

pub struct FormationLoader;

impl FormationLoader {
    pub fn load() -> Vec<Formation> {
        let entities: Vec<FormationEntity> =
            serde_json::from_str(STATIC_FORMATIONS_JSON).expect("malformed formation seed");
        entities.into_iter().map(Formation::from).collect()
    }
}

impl From<FormationEntity> for Formation {
    fn from(entity: FormationEntity) -> Self {
        Formation {
            id: formation_id(entity.side, &entity.name, entity.variant.as_deref()),
            side: entity.side,
            name: entity.name,
            variant: entity.variant,
            slots: entity
                .slots
                .into_iter()
                .map(|slot| FormationSlot {
                    slot_key: slot.slot_key,
                    position_hints: vec![slot.hint],
                    x: slot.x,
                    y: slot.y,
                })
                .collect(),
        }
    }
}

/// Deterministic slug over the (side, name, variant) identity.
fn formation_id(side: Side, name: &str, variant: Option<&str>) -> String {
    let side = match side {
        Side::Off => "off",
        Side::Def => "def",
    };
    let mut id = format!("{}-{}", side, name.to_lowercase().replace(' ', "-"));
    if let Some(variant) = variant {
        id.push('-');
        id.push_str(&variant.to_lowercase().replace(' ', "-"));
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_contains_both_sides_with_eleven_slots_each() {
        let formations = FormationLoader::load();
        assert_eq!(2, formations.len());

        let offense = formations.iter().find(|f| f.side == Side::Off).unwrap();
        assert_eq!("off-shotgun-5wr", offense.id);
        assert_eq!(11, offense.slots.len());
        assert_eq!(5, offense.slots.iter().filter(|s| s.slot_key.starts_with("WR")).count());

        let defense = formations.iter().find(|f| f.side == Side::Def).unwrap();
        assert_eq!("def-3-3-5", defense.id);
        assert_eq!(11, defense.slots.len());
    }

    #[test]
    fn slot_coordinates_are_normalized() {
        for formation in FormationLoader::load() {
            for slot in &formation.slots {
                assert!((0.0..=1.0).contains(&slot.x), "{}", slot.slot_key);
                assert!((0.0..=1.0).contains(&slot.y), "{}", slot.slot_key);
                assert!(!slot.position_hints.is_empty());
            }
        }
    }
}
