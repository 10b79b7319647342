use crate::error::{TireError, TireResult};

/// Narrowest tire the rim table knows about (mm).
pub const MIN_TIRE_WIDTH: f64 = 18.0;
/// Largest width reported back to the user as valid (mm).
pub const MAX_TIRE_WIDTH: f64 = 132.0;

/// Each mm of rim deviation from the reference rim changes the effective tire width by this much.
pub const RIM_WIDTH_INFLUENCE: f64 = 0.4;

/// A step of the reference rim table: tires narrower than `max_tire_width`
/// are measured on a rim with this `inner_rim_width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RimWidthTier {
    pub max_tire_width: f64,
    pub inner_rim_width: f64,
}

const fn tier(max_tire_width: f64, inner_rim_width: f64) -> RimWidthTier {
    RimWidthTier {
        max_tire_width,
        inner_rim_width,
    }
}

/// Ascending by `max_tire_width`. The last tier closes the valid range at 133mm.
pub const RIM_WIDTH_TIERS: [RimWidthTier; 12] = [
    tier(22.0, 15.0),
    tier(25.0, 17.0),
    tier(29.0, 19.0),
    tier(35.0, 21.0),
    tier(47.0, 23.0),
    tier(58.0, 25.0),
    tier(66.0, 30.0),
    tier(72.0, 35.0),
    tier(84.0, 45.0),
    tier(96.0, 55.0),
    tier(113.0, 76.0),
    tier(133.0, 94.0),
];

fn invalid_width(width: f64) -> TireError {
    TireError::InvalidInput {
        width,
        min: MIN_TIRE_WIDTH,
        max: MAX_TIRE_WIDTH,
    }
}

/// Reference inner rim width for a nominal tire width.
pub fn inner_rim_width_for(tire_width: f64) -> TireResult<f64> {
    // NaN passes this guard but matches no tier.
    if tire_width < MIN_TIRE_WIDTH {
        return Err(invalid_width(tire_width));
    }

    RIM_WIDTH_TIERS
        .iter()
        .find(|t| tire_width < t.max_tire_width)
        .map(|t| t.inner_rim_width)
        .ok_or_else(|| invalid_width(tire_width))
}

/// Corrects a nominal tire width for the rim it is actually mounted on.
pub fn adjust_tire_width(tire_width: f64, inner_rim_width: f64) -> TireResult<f64> {
    let reference = inner_rim_width_for(tire_width)?;
    Ok(tire_width + RIM_WIDTH_INFLUENCE * (inner_rim_width - reference))
}
