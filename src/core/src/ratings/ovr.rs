use crate::ratings::vector::{RatingKey, RatingVector, clamp_rating};

/// Position-keyed overall rating. Each branch is a convex combination of the
/// ratings relevant to that position, so improving a relevant rating never
/// lowers the result and no branch can leave [0,99].
pub fn compute_ovr(position: &str, ratings: &RatingVector) -> u8 {
    use RatingKey::*;

    let r = |key: RatingKey| ratings.get(key) as f64;
    let avg = |keys: &[RatingKey]| {
        keys.iter().map(|&k| ratings.get(k) as f64).sum::<f64>() / keys.len() as f64
    };

    let position = position.trim().to_uppercase();

    let raw = match position.as_str() {
        "QB" => {
            0.25 * r(Thp)
                + 0.15 * r(Sac)
                + 0.15 * r(Mac)
                + 0.10 * r(Dac)
                + 0.10 * r(Tup)
                + 0.10 * r(Awr)
                + 0.10 * r(Run)
                + 0.05 * r(Bsk)
        }
        "WR" => {
            0.20 * r(Spd)
                + 0.15 * r(Acc)
                + 0.15 * r(Cth)
                + 0.10 * r(Spc)
                + 0.10 * avg(&[Srr, Mrr, Drr])
                + 0.10 * r(Rls)
                + 0.05 * r(Agi)
                + 0.05 * r(Jmp)
                + 0.10 * r(Awr)
        }
        "HB" => {
            0.18 * r(Spd)
                + 0.16 * r(Acc)
                + 0.12 * r(Agi)
                + 0.10 * r(Bcv)
                + 0.10 * r(Btk)
                + 0.08 * r(Car)
                + 0.06 * r(Jkm)
                + 0.06 * r(Spm)
                + 0.04 * r(Sfa)
                + 0.10 * r(Awr)
        }
        "TE" => {
            0.16 * r(Spd)
                + 0.14 * r(Cth)
                + 0.10 * r(Spc)
                + 0.10 * avg(&[Srr, Mrr])
                + 0.10 * r(Rbk)
                + 0.10 * r(Pbk)
                + 0.08 * r(Str)
                + 0.07 * r(Rls)
                + 0.05 * r(Jmp)
                + 0.10 * r(Awr)
        }
        "LT" | "LG" | "C" | "RG" | "RT" => {
            0.25 * r(Rbk)
                + 0.25 * r(Pbk)
                + 0.10 * r(Rbp)
                + 0.10 * r(Rbf)
                + 0.10 * r(Pbp)
                + 0.10 * r(Pbf)
                + 0.10 * r(Str)
        }
        "LEDG" | "REDG" | "DT" => {
            0.22 * r(Pmv)
                + 0.18 * r(Fmv)
                + 0.15 * r(Bsh)
                + 0.12 * r(Str)
                + 0.10 * r(Pur)
                + 0.10 * r(Prc)
                + 0.13 * r(Tak)
        }
        "SAM" | "MIKE" | "WILL" => {
            0.18 * r(Tak)
                + 0.14 * r(Prc)
                + 0.14 * r(Bsh)
                + 0.12 * r(Pur)
                + 0.10 * r(Zcv)
                + 0.08 * r(Mcv)
                + 0.08 * r(Spd)
                + 0.08 * r(Acc)
                + 0.08 * r(Str)
        }
        "CB" => {
            0.22 * r(Mcv)
                + 0.18 * r(Zcv)
                + 0.14 * r(Spd)
                + 0.10 * r(Acc)
                + 0.10 * r(Prs)
                + 0.08 * r(Agi)
                + 0.08 * r(Jmp)
                + 0.10 * r(Awr)
        }
        "FS" | "SS" => {
            0.20 * r(Zcv)
                + 0.16 * r(Mcv)
                + 0.14 * r(Tak)
                + 0.10 * r(Prc)
                + 0.10 * r(Pur)
                + 0.10 * r(Spd)
                + 0.08 * r(Acc)
                + 0.12 * r(Awr)
        }
        "K" => 0.60 * r(Kpw) + 0.40 * r(Kac),
        "P" => 0.70 * r(Kpw) + 0.30 * r(Kac),
        _ => avg(&[Spd, Acc, Awr, Str, Agi, Prc]),
    };

    clamp_rating(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVERY_POSITION: &[&str] = &[
        "QB", "HB", "FB", "WR", "TE", "LT", "LG", "C", "RG", "RT", "LEDG", "REDG", "DT", "SAM",
        "MIKE", "WILL", "CB", "FS", "SS", "K", "P",
    ];

    fn uniform(value: u8) -> RatingVector {
        let mut ratings = RatingVector::empty();
        for key in RatingKey::ALL {
            ratings.set(key, value);
        }
        ratings
    }

    #[test]
    fn uniform_vector_maps_to_itself_for_every_position() {
        // Convex weights: a flat vector must produce exactly that value.
        for position in EVERY_POSITION {
            assert_eq!(70, compute_ovr(position, &uniform(70)), "{}", position);
            assert_eq!(99, compute_ovr(position, &uniform(99)), "{}", position);
            assert_eq!(0, compute_ovr(position, &uniform(0)), "{}", position);
        }
    }

    #[test]
    fn improving_a_relevant_rating_never_decreases_ovr() {
        let base = uniform(60);
        for position in EVERY_POSITION {
            let before = compute_ovr(position, &base);
            for key in RatingKey::ALL {
                if key == RatingKey::Ovr {
                    continue;
                }
                let mut bumped = base.clone();
                bumped.set(key, 90);
                assert!(
                    compute_ovr(position, &bumped) >= before,
                    "{} regressed on {}",
                    position,
                    key
                );
            }
        }
    }

    #[test]
    fn kicker_formula_is_exact() {
        let mut ratings = RatingVector::empty();
        ratings.set(RatingKey::Kpw, 90);
        ratings.set(RatingKey::Kac, 70);
        assert_eq!(82, compute_ovr("K", &ratings)); // 0.6*90 + 0.4*70
        assert_eq!(84, compute_ovr("P", &ratings)); // 0.7*90 + 0.3*70
    }

    #[test]
    fn unknown_position_uses_athleticism_average() {
        let mut ratings = RatingVector::empty();
        for key in [
            RatingKey::Spd,
            RatingKey::Acc,
            RatingKey::Awr,
            RatingKey::Str,
            RatingKey::Agi,
            RatingKey::Prc,
        ] {
            ratings.set(key, 66);
        }
        // Everything else stays zero and must not contribute.
        assert_eq!(66, compute_ovr("LS", &ratings));
    }

    #[test]
    fn position_token_is_case_insensitive() {
        let ratings = uniform(55);
        assert_eq!(compute_ovr("qb", &ratings), compute_ovr("QB", &ratings));
        assert_eq!(compute_ovr(" wr ", &ratings), compute_ovr("WR", &ratings));
    }
}
