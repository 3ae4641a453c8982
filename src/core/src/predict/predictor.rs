use crate::archetype::Archetype;
use crate::error::{CoreError, Result};
use crate::predict::fallback::fallback_fill;
use crate::ratings::{DevTrait, RatingKey, RatingVector, clamp_rating, compress_over_cap, compute_ovr};
use crate::store::Store;
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub ratings: RatingVector,
    pub ovr: u8,
}

/// Fills a complete rating vector from partial subset inputs plus an
/// archetype template, then derives OVR. Pure over its inputs: the same
/// archetype and subset always produce the same prediction.
pub struct RatingPredictor;

impl RatingPredictor {
    pub fn predict_with_store<S: Store + ?Sized>(
        store: &S,
        position: &str,
        archetype_id: &str,
        subset: &HashMap<String, f64>,
        dev_trait: DevTrait,
        dev_cap: Option<u8>,
    ) -> Result<Prediction> {
        let archetype = store
            .archetype(archetype_id)?
            .ok_or_else(|| CoreError::NotFound(format!("archetype {}", archetype_id)))?;

        Ok(Self::predict(&archetype, position, subset, dev_trait, dev_cap))
    }

    pub fn predict(
        archetype: &Archetype,
        position: &str,
        subset: &HashMap<String, f64>,
        _dev_trait: DevTrait,
        dev_cap: Option<u8>,
    ) -> Prediction {
        let mut ratings = RatingVector::empty();
        for (key, value) in &archetype.base_template {
            ratings.set(*key, *value);
        }

        let subset = normalize_subset(subset);

        for key in RatingKey::ALL {
            if key == RatingKey::Ovr {
                continue;
            }
            // Template-supplied positive values win over any derivation.
            if ratings.get(key) > 0 {
                continue;
            }

            if let Some(rule) = archetype.mapping.get(&key) {
                let mut value = rule.intercept;
                for (input, weight) in &rule.weights {
                    if let Ok(input) = input.parse::<RatingKey>() {
                        if let Some(collected) = subset.get(&input) {
                            value += weight * *collected as f64;
                        }
                    }
                }
                ratings.set(key, clamp_rating(value));
                continue;
            }

            ratings.set(key, fallback_fill(key, &subset));
        }

        if let Some(cap) = dev_cap {
            compress_over_cap(&mut ratings, cap);
        }

        let ovr = compute_ovr(position, &ratings);
        ratings.set(RatingKey::Ovr, ovr);

        Prediction { ratings, ovr }
    }
}

/// Uppercase and clamp the raw subset. Unknown keys and OVR are dropped: the
/// rating set is closed and OVR is never a free input.
fn normalize_subset(raw: &HashMap<String, f64>) -> HashMap<RatingKey, u8> {
    let mut subset = HashMap::with_capacity(raw.len());
    for (key, value) in raw {
        match key.parse::<RatingKey>() {
            Ok(RatingKey::Ovr) => debug!("subset input OVR ignored: always derived"),
            Ok(key) => {
                subset.insert(key, clamp_rating(*value));
            }
            Err(_) => debug!("unknown subset key '{}' ignored", key),
        }
    }
    subset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archetype::MappingRule;

    fn archetype() -> Archetype {
        Archetype {
            id: "arch-qb-pocket".into(),
            position: "QB".into(),
            name: "Pocket Passer".into(),
            subset_keys: vec!["THP".into(), "SAC".into(), "AWR".into()],
            base_template: HashMap::new(),
            mapping: HashMap::new(),
        }
    }

    fn subset(pairs: &[(&str, f64)]) -> HashMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn mapping_rule_evaluates_intercept_plus_weighted_inputs() {
        let mut archetype = archetype();
        archetype.mapping.insert(
            RatingKey::Sac,
            MappingRule {
                intercept: 10.0,
                weights: HashMap::from([("THP".to_string(), 0.5)]),
            },
        );

        let prediction = RatingPredictor::predict(
            &archetype,
            "QB",
            &subset(&[("THP", 80.0)]),
            DevTrait::Normal,
            None,
        );

        assert_eq!(50, prediction.ratings.get(RatingKey::Sac)); // 10 + 0.5 * 80
    }

    #[test]
    fn mapping_rule_missing_inputs_contribute_zero() {
        let mut archetype = archetype();
        archetype.mapping.insert(
            RatingKey::Sac,
            MappingRule {
                intercept: 35.0,
                weights: HashMap::from([("THP".to_string(), 0.5), ("AWR".to_string(), 0.2)]),
            },
        );

        let prediction =
            RatingPredictor::predict(&archetype, "QB", &HashMap::new(), DevTrait::Normal, None);

        assert_eq!(35, prediction.ratings.get(RatingKey::Sac));
    }

    #[test]
    fn template_positive_values_are_never_overwritten() {
        let mut archetype = archetype();
        archetype.base_template.insert(RatingKey::Thp, 92);
        archetype.mapping.insert(
            RatingKey::Thp,
            MappingRule {
                intercept: 1.0,
                weights: HashMap::new(),
            },
        );

        let prediction = RatingPredictor::predict(
            &archetype,
            "QB",
            &subset(&[("THP", 40.0)]),
            DevTrait::Normal,
            None,
        );

        assert_eq!(92, prediction.ratings.get(RatingKey::Thp));
    }

    #[test]
    fn fallback_chain_fills_unmapped_ratings() {
        let prediction = RatingPredictor::predict(
            &archetype(),
            "WR",
            &subset(&[("SPD", 90.0)]),
            DevTrait::Normal,
            None,
        );

        // ACC has no mapping rule; its chain prefers SPD.
        assert_eq!(90, prediction.ratings.get(RatingKey::Acc));
        // SPD itself is copied through the self-chain.
        assert_eq!(90, prediction.ratings.get(RatingKey::Spd));
    }

    #[test]
    fn empty_subset_defaults_every_rating_to_fifty() {
        let prediction =
            RatingPredictor::predict(&archetype(), "QB", &HashMap::new(), DevTrait::Normal, None);

        for key in RatingKey::ALL {
            if key == RatingKey::Ovr {
                continue;
            }
            assert_eq!(50, prediction.ratings.get(key), "{}", key);
        }
        assert_eq!(50, prediction.ovr);
    }

    #[test]
    fn dev_cap_softly_compresses_high_ratings() {
        let mut archetype = archetype();
        archetype.base_template.insert(RatingKey::Thp, 90);

        let prediction =
            RatingPredictor::predict(&archetype, "QB", &HashMap::new(), DevTrait::Normal, Some(80));

        assert_eq!(85, prediction.ratings.get(RatingKey::Thp)); // 80 + 0.5 * 10
    }

    #[test]
    fn ovr_matches_independent_recompute_and_all_keys_in_range() {
        let inputs = subset(&[("THP", 88.0), ("SAC", 74.0), ("AWR", 63.0), ("SPD", 70.0)]);
        let prediction =
            RatingPredictor::predict(&archetype(), "QB", &inputs, DevTrait::Star, Some(85));

        assert_eq!(prediction.ovr, compute_ovr("QB", &prediction.ratings));
        assert_eq!(prediction.ovr, prediction.ratings.get(RatingKey::Ovr));
        for key in RatingKey::ALL {
            assert!(prediction.ratings.get(key) <= 99);
        }
    }

    #[test]
    fn prediction_is_deterministic() {
        let inputs = subset(&[("THP", 82.0), ("AWR", 61.0)]);
        let first =
            RatingPredictor::predict(&archetype(), "QB", &inputs, DevTrait::Impact, Some(90));
        let second =
            RatingPredictor::predict(&archetype(), "QB", &inputs, DevTrait::Impact, Some(90));

        assert_eq!(first.ratings, second.ratings);
        assert_eq!(first.ovr, second.ovr);
    }

    #[test]
    fn ovr_and_unknown_subset_keys_are_ignored() {
        let inputs = subset(&[("OVR", 99.0), ("NOPE", 99.0), ("thp ", 60.0)]);
        let prediction =
            RatingPredictor::predict(&archetype(), "QB", &inputs, DevTrait::Normal, None);

        // Lowercase/padded THP was accepted; nothing else leaked in.
        assert_eq!(60, prediction.ratings.get(RatingKey::Thp));
        assert_eq!(prediction.ovr, prediction.ratings.get(RatingKey::Ovr));
        assert_ne!(99, prediction.ovr);
    }

    #[test]
    fn missing_archetype_is_not_found() {
        use crate::testing::MemStore;

        let store = MemStore::new();
        let result = RatingPredictor::predict_with_store(
            &store,
            "QB",
            "arch-missing",
            &HashMap::new(),
            DevTrait::Normal,
            None,
        );

        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
