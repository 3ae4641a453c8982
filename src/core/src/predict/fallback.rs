use crate::ratings::{RatingKey, clamp_rating};
use std::collections::HashMap;

/// Substitute-input chains for ratings with neither a template value nor a
/// mapping rule. Candidates are tried in order against the collected subset;
/// keys without a chain fall back to their own subset value. Kept as a table
/// so tests can enumerate every chain.
const FALLBACK_CHAINS: &[(RatingKey, &[RatingKey])] = &[
    (RatingKey::Acc, &[RatingKey::Spd, RatingKey::Agi]),
    (RatingKey::Agi, &[RatingKey::Cod, RatingKey::Acc]),
    (RatingKey::Jkm, &[RatingKey::Agi, RatingKey::Cod]),
    (RatingKey::Spc, &[RatingKey::Cth, RatingKey::Jmp]),
    (RatingKey::Srr, &[RatingKey::Cth, RatingKey::Rls, RatingKey::Spd]),
    (RatingKey::Mrr, &[RatingKey::Cth, RatingKey::Rls, RatingKey::Spd]),
    (RatingKey::Drr, &[RatingKey::Cth, RatingKey::Rls, RatingKey::Spd]),
    (RatingKey::Pbk, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Pbp, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Pbf, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Rbk, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Rbp, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Rbf, &[RatingKey::Str, RatingKey::Awr]),
    (RatingKey::Mcv, &[RatingKey::Spd, RatingKey::Acc, RatingKey::Awr]),
    (RatingKey::Zcv, &[RatingKey::Spd, RatingKey::Acc, RatingKey::Awr]),
    (RatingKey::Prs, &[RatingKey::Spd, RatingKey::Acc, RatingKey::Awr]),
    (RatingKey::Fmv, &[RatingKey::Str, RatingKey::Bsh]),
    (RatingKey::Pmv, &[RatingKey::Str, RatingKey::Bsh]),
    (RatingKey::Tak, &[RatingKey::Pow, RatingKey::Str, RatingKey::Awr]),
];

pub(crate) fn chain_for(key: RatingKey) -> Option<&'static [RatingKey]> {
    FALLBACK_CHAINS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, chain)| *chain)
}

/// Fill one rating from the subset inputs: first candidate present in the
/// chain wins; otherwise the mean of all provided inputs; otherwise 50.
pub(crate) fn fallback_fill(key: RatingKey, subset: &HashMap<RatingKey, u8>) -> u8 {
    match chain_for(key) {
        Some(chain) => {
            for candidate in chain {
                if let Some(value) = subset.get(candidate) {
                    return *value;
                }
            }
        }
        None => {
            if let Some(value) = subset.get(&key) {
                return *value;
            }
        }
    }

    if subset.is_empty() {
        50
    } else {
        let sum: f64 = subset.values().map(|v| *v as f64).sum();
        clamp_rating(sum / subset.len() as f64)
    }
}
