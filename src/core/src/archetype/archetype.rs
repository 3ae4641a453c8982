use crate::ratings::RatingKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Linear rule for deriving one rating from the collected subset inputs:
/// `intercept + Σ weight_i * subset[key_i]`. Weight keys are uppercase subset
/// key names; referenced inputs that were not collected contribute zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingRule {
    #[serde(default)]
    pub intercept: f64,
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

/// Per-(position, name) prediction template. Created and updated by seeding,
/// read-only at prediction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Archetype {
    pub id: String,
    pub position: String,
    pub name: String,
    /// Which inputs a UI should collect for this archetype, in display order.
    #[serde(default)]
    pub subset_keys: Vec<String>,
    /// Partial starting vector; keys the template leaves at zero get filled
    /// by mapping rules or heuristics.
    #[serde(default)]
    pub base_template: HashMap<RatingKey, u8>,
    #[serde(default)]
    pub mapping: HashMap<RatingKey, MappingRule>,
}
