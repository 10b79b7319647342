//! Named constants for the categorical choices of the pressure form.
//!
//! The calculator consumes plain `f64` factors so that any tuning value is
//! accepted; these enums are the documented presets the front end offers.

use std::fmt::Display;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub trait Multiplier: Copy + Display + FromStr + IntoEnumIterator + 'static {
    /// Table name as shown to the user.
    const TABLE: &'static str;

    fn factor(self) -> f64;

    /// First preset whose factor equals `value`.
    fn from_factor(value: f64) -> Option<Self> {
        Self::iter().find(|m| m.factor() == value)
    }

    /// `NAME (value)` for a preset, `custom (value)` otherwise.
    fn label(value: f64) -> String {
        match Self::from_factor(value) {
            Some(m) => format!("{} ({})", m, value),
            None => format!("custom ({})", value),
        }
    }

    fn options() -> Vec<(String, f64)> {
        Self::iter().map(|m| (m.to_string(), m.factor())).collect()
    }
}

/// Accepts only finite numbers; `inf` and `NaN` cannot be stored as JSON.
pub fn parse_finite(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(v) => Err(format!("'{}' must be a finite number", v)),
        Err(e) => Err(format!("'{}' is not a number: {}", s.trim(), e)),
    }
}

/// Accepts a preset name (any case) or a raw finite number.
pub fn parse_factor<M: Multiplier>(s: &str) -> Result<f64, String> {
    let s = s.trim();
    if let Ok(m) = M::from_str(s) {
        return Ok(m.factor());
    }
    parse_finite(s).map_err(|_| {
        let names: Vec<String> = M::iter().map(|m| m.to_string()).collect();
        format!(
            "'{}' is neither a number nor one of: {}",
            s,
            names.join(", ")
        )
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum TireCasing {
    Thin,
    Standard,
    Reinforced,
    Double,
}

impl Multiplier for TireCasing {
    const TABLE: &'static str = "tire_casing";

    fn factor(self) -> f64 {
        match self {
            Self::Thin => 1.025,
            Self::Standard => 1.0,
            Self::Reinforced => 0.95,
            Self::Double => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RideStyle {
    Cross,
    Gravel,
    XcountryMtb,
    Road,
    Fat,
    EnduroMtb,
    TrailMtb,
    DownhillMtb,
}

impl Multiplier for RideStyle {
    const TABLE: &'static str = "ride_style";

    fn factor(self) -> f64 {
        match self {
            Self::Cross => 0.6,
            Self::Gravel => 0.9,
            Self::XcountryMtb => 0.9,
            Self::Road => 1.0,
            Self::Fat => 1.0,
            Self::EnduroMtb => 1.05,
            Self::TrailMtb => 1.05,
            Self::DownhillMtb => 1.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum WheelPosition {
    Front,
    Rear,
}

impl Multiplier for WheelPosition {
    const TABLE: &'static str = "wheel_position";

    fn factor(self) -> f64 {
        match self {
            Self::Front => 0.94,
            Self::Rear => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RimType {
    TubelessCrochet,
    TubelessStraightSide,
    Tubes,
}

impl Multiplier for RimType {
    const TABLE: &'static str = "rim_type";

    fn factor(self) -> f64 {
        match self {
            Self::TubelessCrochet => 1.03,
            Self::TubelessStraightSide => 0.955,
            Self::Tubes => 1.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Surface {
    Dry,
    Snow,
    Wet,
}

impl Multiplier for Surface {
    const TABLE: &'static str = "surface";

    fn factor(self) -> f64 {
        match self {
            Self::Dry => 1.0,
            Self::Snow => 0.5,
            Self::Wet => 0.9,
        }
    }
}

/// Common bead-seat diameters. The "factor" is the diameter in mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum WheelDiameter {
    #[strum(serialize = "700C")]
    Iso622,
    #[strum(serialize = "650B")]
    Iso584,
    #[strum(serialize = "650C")]
    Iso571,
}

impl Multiplier for WheelDiameter {
    const TABLE: &'static str = "wheel_diameter";

    fn factor(self) -> f64 {
        match self {
            Self::Iso622 => 622.0,
            Self::Iso584 => 584.0,
            Self::Iso571 => 571.0,
        }
    }
}

/// Every preset table, in the order the form presents them.
pub fn option_tables() -> Vec<(&'static str, Vec<(String, f64)>)> {
    vec![
        (RideStyle::TABLE, RideStyle::options()),
        (TireCasing::TABLE, TireCasing::options()),
        (RimType::TABLE, RimType::options()),
        (Surface::TABLE, Surface::options()),
        (WheelPosition::TABLE, WheelPosition::options()),
        (WheelDiameter::TABLE, WheelDiameter::options()),
    ]
}
