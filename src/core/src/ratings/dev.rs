use serde::{Deserialize, Serialize};

/// Growth-speed classifier applied on top of the per-rating base growth
/// rates during seasonal progression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DevTrait {
    #[default]
    Normal,
    Impact,
    Star,
    Elite,
}

impl DevTrait {
    pub fn multiplier(self) -> f64 {
        match self {
            DevTrait::Normal => 1.00,
            DevTrait::Impact => 1.15,
            DevTrait::Star => 1.30,
            DevTrait::Elite => 1.45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassYear {
    Freshman,
    Sophomore,
    Junior,
    Senior,
}

impl ClassYear {
    fn years_played(self) -> i32 {
        match self {
            ClassYear::Freshman => 0,
            ClassYear::Sophomore => 1,
            ClassYear::Junior => 2,
            ClassYear::Senior => 3,
        }
    }
}

/// Back-derive the enrollment year from the class standing shown at a given
/// registry season.
pub fn derive_enrollment_year(registry_year: i32, class_year: ClassYear, redshirt: bool) -> i32 {
    registry_year - class_year.years_played() - if redshirt { 1 } else { 0 }
}

/// Short class label for a player at a given season (Fr/So/Jr/Sr).
pub fn class_from(season: i32, enrollment_year: i32, redshirt: bool) -> &'static str {
    let rs = if redshirt { 1 } else { 0 };
    match season - enrollment_year - rs {
        y if y <= 0 => "Fr",
        1 => "So",
        2 => "Jr",
        _ => "Sr",
    }
}

/// Trim and collapse runs of whitespace in user-entered names.
pub fn sanitize_name(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers_match_the_dev_ladder() {
        assert_eq!(1.00, DevTrait::Normal.multiplier());
        assert_eq!(1.15, DevTrait::Impact.multiplier());
        assert_eq!(1.30, DevTrait::Star.multiplier());
        assert_eq!(1.45, DevTrait::Elite.multiplier());
    }

    #[test]
    fn enrollment_year_accounts_for_class_and_redshirt() {
        assert_eq!(2026, derive_enrollment_year(2026, ClassYear::Freshman, false));
        assert_eq!(2023, derive_enrollment_year(2026, ClassYear::Senior, false));
        assert_eq!(2022, derive_enrollment_year(2026, ClassYear::Senior, true));
    }

    #[test]
    fn class_label_progresses_by_season() {
        assert_eq!("Fr", class_from(2025, 2025, false));
        assert_eq!("So", class_from(2026, 2025, false));
        assert_eq!("Jr", class_from(2027, 2025, false));
        assert_eq!("Sr", class_from(2028, 2025, false));
        assert_eq!("Sr", class_from(2030, 2025, false));
        // Redshirt shifts the whole ladder one season later.
        assert_eq!("Fr", class_from(2026, 2025, true));
    }

    #[test]
    fn name_sanitation_collapses_whitespace() {
        assert_eq!("Jim Snapp", sanitize_name("  Jim   Snapp \n"));
        assert_eq!("", sanitize_name("   "));
    }
}
