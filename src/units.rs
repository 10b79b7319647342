use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Pounds per kilogram.
pub const LB_PER_KG: f64 = 2.2046226218;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    /// Weight figure in pounds, as the pressure formula expects it.
    pub fn to_pounds(self, weight: f64) -> f64 {
        match self {
            Self::Kg => kg_to_lb(weight),
            Self::Lb => weight,
        }
    }
}

pub fn kg_to_lb(kg: f64) -> f64 {
    kg * LB_PER_KG
}
