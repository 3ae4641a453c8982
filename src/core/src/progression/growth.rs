use crate::ratings::{DevTrait, RatingKey, RatingVector, clamp_rating, compress_over_cap};

/// Base growth in points per season before multipliers: largest for game IQ
/// and technique ratings, smallest for raw size/speed and durability.
pub(crate) fn base_growth(key: RatingKey) -> f64 {
    use RatingKey::*;

    match key {
        // physical
        Spd | Cod | Jmp => 0.6,
        Acc | Agi => 0.8,
        Str => 1.0,
        // ball skills / technique
        Cth | Rls | Dac | Run => 1.2,
        Cit | Spc | Bsk | Pac => 1.0,
        Srr | Mrr | Drr | Sac | Mac => 1.6,
        Thp => 0.6,
        Tup => 1.4,
        // blocking
        Pbk | Rbk => 1.6,
        Pbp | Pbf | Rbp | Rbf => 1.4,
        Lbk | Ilb => 1.0,
        // defense
        Tak => 1.4,
        Pow => 1.0,
        Bsh | Fmv | Pmv | Pur | Prs => 1.2,
        Mcv | Zcv => 1.6,
        // special teams
        Kpw => 0.4,
        Kac => 0.8,
        Ret => 0.6,
        Lsp => 0.2,
        // game IQ / durability
        Awr => 2.0,
        Prc => 1.8,
        Sta => 0.6,
        Tgh => 0.4,
        Inj => 0.2,
        // ball carrier
        Car | Trk | Sfa | Spm | Jkm => 1.0,
        Bcv | Btk => 1.2,
        _ => 0.8,
    }
}

/// Years-since-enrollment growth curve: freshman and sophomore seasons grow
/// fastest, the junior season is flat, then decline.
pub(crate) fn age_multiplier(years_since_enroll: i32) -> f64 {
    match years_since_enroll {
        y if y <= 0 => 1.20,
        1 => 1.10,
        2 => 1.00,
        3 => 0.70,
        _ => 0.40,
    }
}

/// Technique ratings central to a position progress a little faster.
fn position_nudge(position: &str, key: RatingKey) -> f64 {
    use RatingKey::*;

    let boosted = match position {
        "QB" => matches!(key, Sac | Mac | Tup),
        "LT" | "LG" | "C" | "RG" | "RT" => matches!(key, Pbk | Rbk),
        "CB" => matches!(key, Mcv | Zcv),
        _ => false,
    };

    if boosted { 1.1 } else { 1.0 }
}

/// One season of growth. The age multiplier is applied as a gentle additive
/// nudge (`0.5 * (mult - 1)`) on top of the dev-multiplied base growth, not
/// as a straight scale; compounding it multiplicatively would run away over
/// a four-year chain. OVR is left untouched for the caller to recompute.
pub(crate) fn next_season_ratings(
    current: &RatingVector,
    position: &str,
    dev_trait: DevTrait,
    dev_cap: Option<u8>,
    years_since_enroll: i32,
) -> RatingVector {
    let position = position.trim().to_uppercase();
    let dev = dev_trait.multiplier();
    let age = age_multiplier(years_since_enroll);

    let mut next = current.clone();
    for key in RatingKey::ALL {
        if key == RatingKey::Ovr {
            continue;
        }
        let growth = base_growth(key) * dev * position_nudge(&position, key);
        let value = current.get(key) as f64 + growth + 0.5 * (age - 1.0);
        next.set(key, clamp_rating(value));
    }

    if let Some(cap) = dev_cap {
        compress_over_cap(&mut next, cap);
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_curve_shape() {
        assert_eq!(1.20, age_multiplier(-1));
        assert_eq!(1.20, age_multiplier(0));
        assert_eq!(1.10, age_multiplier(1));
        assert_eq!(1.00, age_multiplier(2));
        assert_eq!(0.70, age_multiplier(3));
        assert_eq!(0.40, age_multiplier(4));
        assert_eq!(0.40, age_multiplier(9));
    }

    #[test]
    fn awareness_grows_fastest_speed_slowly() {
        let mut current = RatingVector::empty();
        current.set(RatingKey::Awr, 50);
        current.set(RatingKey::Spd, 50);

        let next = next_season_ratings(&current, "HB", DevTrait::Normal, None, 2);

        assert_eq!(52, next.get(RatingKey::Awr)); // +2.0
        assert_eq!(51, next.get(RatingKey::Spd)); // +0.6 rounds to +1
    }

    #[test]
    fn elite_dev_outgrows_normal() {
        let mut current = RatingVector::empty();
        current.set(RatingKey::Awr, 60);

        let normal = next_season_ratings(&current, "WR", DevTrait::Normal, None, 1);
        let elite = next_season_ratings(&current, "WR", DevTrait::Elite, None, 1);

        assert_eq!(62, normal.get(RatingKey::Awr)); // +2.0 +0.05
        assert_eq!(63, elite.get(RatingKey::Awr)); // +2.9 +0.05
    }

    #[test]
    fn positional_nudge_only_touches_its_keys() {
        let mut current = RatingVector::empty();
        current.set(RatingKey::Sac, 50);
        current.set(RatingKey::Mcv, 50);

        let qb = next_season_ratings(&current, "QB", DevTrait::Normal, None, 2);
        let cb = next_season_ratings(&current, "CB", DevTrait::Normal, None, 2);

        // SAC: 1.6 * 1.1 = 1.76 for QB vs 1.6 plain for CB; both round to +2.
        // MCV gets the CB nudge instead, so the two positions diverge there.
        assert_eq!(52, qb.get(RatingKey::Sac));
        assert!(cb.get(RatingKey::Mcv) >= qb.get(RatingKey::Mcv));
    }

    #[test]
    fn dev_cap_applies_after_growth() {
        let mut current = RatingVector::empty();
        current.set(RatingKey::Awr, 88);

        let next = next_season_ratings(&current, "QB", DevTrait::Elite, Some(80), 0);

        // 88 + 2.9 + 0.1 = 91 -> cap 80 + 0.5*11 = 85.5 -> 86
        assert_eq!(86, next.get(RatingKey::Awr));
    }

    #[test]
    fn ratings_never_leave_range() {
        let mut current = RatingVector::empty();
        for key in RatingKey::ALL {
            current.set(key, 99);
        }
        let next = next_season_ratings(&current, "WR", DevTrait::Elite, None, 0);
        for key in RatingKey::ALL {
            assert!(next.get(key) <= 99);
        }
    }
}
