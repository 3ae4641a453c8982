pub mod dev;
pub mod ovr;
pub mod vector;

pub use dev::{ClassYear, DevTrait, class_from, derive_enrollment_year, sanitize_name};
pub use ovr::compute_ovr;
pub use vector::{KEY_COUNT, RatingKey, RatingVector, clamp_rating, compress_over_cap};
