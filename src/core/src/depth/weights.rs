//! Contribution weights for the weighted depth view.

/// Fallback curve used when a canonical group has no dedicated weight row
/// and the caller supplied no override.
pub const DEFAULT_WEIGHT_CURVE: &[f64] = &[1.0, 0.6, 0.35, 0.2, 0.1];

/// Per-group contribution weights, first entry for the best-rated player.
/// Thin positions (QB, TE) lean almost entirely on the top man; rotation
/// positions (WR, CB) spread credit four deep.
const POSITION_WEIGHTS: &[(&str, &[f64])] = &[
    ("QB", &[0.7, 0.3]),
    ("RB", &[0.6, 0.25, 0.15]),
    ("FB", &[0.6, 0.25, 0.15]),
    ("WR", &[0.5, 0.25, 0.15, 0.1]),
    ("TE", &[0.7, 0.3]),
    ("LT", &[0.6, 0.25, 0.15]),
    ("LG", &[0.6, 0.25, 0.15]),
    ("C", &[0.6, 0.25, 0.15]),
    ("RG", &[0.6, 0.25, 0.15]),
    ("RT", &[0.6, 0.25, 0.15]),
    ("LE", &[0.6, 0.25, 0.15]),
    ("RE", &[0.6, 0.25, 0.15]),
    ("EDGE", &[0.6, 0.25, 0.15]),
    ("DT", &[0.6, 0.25, 0.15]),
    ("LOLB", &[0.6, 0.25, 0.15]),
    ("MLB", &[0.6, 0.25, 0.15]),
    ("ROLB", &[0.6, 0.25, 0.15]),
    ("CB", &[0.5, 0.25, 0.15, 0.1]),
    ("FS", &[0.6, 0.25, 0.15]),
    ("SS", &[0.6, 0.25, 0.15]),
];

/// Weight curve for a canonical group. The caller-supplied curve, when
/// present, replaces the global fallback but not the positional rows.
pub fn curve_for<'a>(group: &str, fallback: Option<&'a [f64]>) -> &'a [f64] {
    POSITION_WEIGHTS
        .iter()
        .find(|(g, _)| *g == group)
        .map(|(_, w)| *w)
        .unwrap_or_else(|| fallback.unwrap_or(DEFAULT_WEIGHT_CURVE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_is_a_normalized_descending_curve() {
        for (group, weights) in POSITION_WEIGHTS {
            let sum: f64 = weights.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "{}", group);
            for pair in weights.windows(2) {
                assert!(pair[0] > pair[1], "{}", group);
            }
        }
    }

    #[test]
    fn unknown_group_uses_the_fallback_curve() {
        assert_eq!(DEFAULT_WEIGHT_CURVE, curve_for("K", None));
        let custom = [0.9, 0.1];
        assert_eq!(&custom[..], curve_for("K", Some(&custom)));
    }

    #[test]
    fn positional_rows_win_over_a_caller_curve() {
        let custom = [0.9, 0.1];
        assert_eq!(&[0.7, 0.3][..], curve_for("QB", Some(&custom)));
    }
}
