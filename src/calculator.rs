use crate::error::TireResult;
use crate::multipliers::{Multiplier, WheelPosition};
use crate::rim::adjust_tire_width;
use crate::units::WeightUnit;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;
use typed_builder::TypedBuilder;

// Calibrated against the published pressure guide; keep the literal precision.
pub const SCALE_FACTOR_EXP10: f64 = 8.684670773;
pub const EXPONENT: f64 = -1.304556655;

/// Rider + bike weight (lb) at which the load term is neutral.
pub const REFERENCE_WEIGHT_LB: f64 = 180.0;
/// Pressure change per lb away from the reference weight.
pub const WEIGHT_SLOPE: f64 = 0.0025;

pub fn scale_factor() -> f64 {
    10f64.powf(SCALE_FACTOR_EXP10)
}

/// Everything one pressure figure depends on.
///
/// The multiplier fields are open-ended: the presets in [`crate::multipliers`]
/// are the documented values, but any factor is accepted and scales the result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    pub system_weight: f64,
    pub wheel_diameter: f64,
    pub tire_width: f64,
    pub inner_rim_width: f64,
    pub tire_casing: f64,
    pub rim_type: f64,
    pub ride_style: f64,
    pub surface: f64,
    pub wheel_position: f64,
    #[builder(default = true)]
    pub adjust_tire_width: bool,
    #[builder(default)]
    pub weight_unit: WeightUnit,
}

/// Torus-shaped stand-in for the tire's air volume (mm based, not calibrated).
pub fn air_volume_proxy(wheel_diameter: f64, tire_width: f64) -> f64 {
    let major_radius = wheel_diameter / 2.0 + tire_width / 2.0;
    let minor_radius = tire_width / 2.0;
    4.0 * PI.powi(2) * major_radius * minor_radius
}

/// Recommended pressure in PSI, unrounded.
///
/// Fails only when the rim-width correction is enabled and the tire width is
/// outside the rim table.
pub fn calculate_tire_pressure(input: &CalculationInput) -> TireResult<f64> {
    let tire_width = if input.adjust_tire_width {
        adjust_tire_width(input.tire_width, input.inner_rim_width)?
    } else {
        input.tire_width
    };
    let weight_lb = input.weight_unit.to_pounds(input.system_weight);

    let volume = air_volume_proxy(input.wheel_diameter, tire_width);
    let load = 1.0 + (weight_lb - REFERENCE_WEIGHT_LB) * WEIGHT_SLOPE;

    let pressure = scale_factor()
        * volume.powf(EXPONENT)
        * load
        * input.wheel_position
        * input.rim_type
        * input.ride_style
        * input.surface
        * input.tire_casing;

    debug!(
        tire_width,
        weight_lb,
        volume,
        load,
        pressure,
        "calculated tire pressure"
    );
    Ok(pressure)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressurePair {
    pub front: f64,
    pub rear: f64,
}

/// Evaluates the same setup at both wheel positions.
pub fn calculate_pair(base: &CalculationInput) -> TireResult<PressurePair> {
    let at = |position: WheelPosition| CalculationInput {
        wheel_position: position.factor(),
        ..*base
    };
    Ok(PressurePair {
        front: calculate_tire_pressure(&at(WheelPosition::Front))?,
        rear: calculate_tire_pressure(&at(WheelPosition::Rear))?,
    })
}

pub fn format_psi(pressure: f64) -> String {
    format!("{:.1} PSI", pressure)
}
