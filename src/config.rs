use crate::calculator::{calculate_pair, CalculationInput, PressurePair};
use crate::error::TireResult;
use crate::multipliers::{
    parse_factor, parse_finite, Multiplier, RideStyle, RimType, Surface, TireCasing,
    WheelDiameter, WheelPosition,
};
use crate::units::WeightUnit;
use clap::{parser::ValueSource, ArgAction, ArgMatches, Args};
use serde::{Deserialize, Serialize};

/// The pressure form: every input the user picks, persisted between runs.
///
/// Missing keys in stored state fall back to the defaults field by field.
#[derive(Args, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    // === CONDITIONS ===
    #[arg(long, default_value = "ROAD", value_parser = parse_factor::<RideStyle>)]
    pub ride_style: f64,
    #[arg(long, default_value = "STANDARD", value_parser = parse_factor::<TireCasing>)]
    pub tire_casing: f64,
    #[arg(long, default_value = "TUBELESS_CROCHET", value_parser = parse_factor::<RimType>)]
    pub rim_type: f64,
    #[arg(long, default_value = "DRY", value_parser = parse_factor::<Surface>)]
    pub surface: f64,

    // === SYSTEM ===
    #[arg(long, default_value = "34", value_parser = parse_finite)]
    pub tire_width: f64,
    #[arg(long, default_value = "23", value_parser = parse_finite)]
    pub inner_rim_width: f64,
    #[arg(long, default_value = "700C", value_parser = parse_factor::<WheelDiameter>)]
    pub wheel_diameter: f64,
    #[arg(long, default_value = "97.5", value_parser = parse_finite)]
    pub system_weight: f64,
    #[arg(long, value_enum, default_value_t = WeightUnit::Kg)]
    pub weight_unit: WeightUnit,

    /// Use the nominal tire width as-is, without the rim correction
    #[arg(long = "no-adjust-tire-width", action = ArgAction::SetFalse)]
    pub adjust_tire_width: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            ride_style: RideStyle::Road.factor(),
            tire_casing: TireCasing::Standard.factor(),
            rim_type: RimType::TubelessCrochet.factor(),
            surface: Surface::Dry.factor(),
            tire_width: 34.0,
            inner_rim_width: 23.0,
            wheel_diameter: WheelDiameter::Iso622.factor(),
            system_weight: 97.5,
            weight_unit: WeightUnit::Kg,
            adjust_tire_width: true,
        }
    }
}

impl FormState {
    pub fn input_for(&self, position: WheelPosition) -> CalculationInput {
        CalculationInput::builder()
            .system_weight(self.system_weight)
            .wheel_diameter(self.wheel_diameter)
            .tire_width(self.tire_width)
            .inner_rim_width(self.inner_rim_width)
            .tire_casing(self.tire_casing)
            .rim_type(self.rim_type)
            .ride_style(self.ride_style)
            .surface(self.surface)
            .wheel_position(position.factor())
            .adjust_tire_width(self.adjust_tire_width)
            .weight_unit(self.weight_unit)
            .build()
    }

    pub fn pressures(&self) -> TireResult<PressurePair> {
        calculate_pair(&self.input_for(WheelPosition::Rear))
    }

    /// Copies over only the fields the user actually typed on the command line.
    pub fn merge_from_cli(&mut self, cli_state: &FormState, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli_state.$field;
                }
            };
        }

        update_if_present!(ride_style);
        update_if_present!(tire_casing);
        update_if_present!(rim_type);
        update_if_present!(surface);

        update_if_present!(tire_width);
        update_if_present!(inner_rim_width);
        update_if_present!(wheel_diameter);
        update_if_present!(system_weight);
        update_if_present!(weight_unit);
        update_if_present!(adjust_tire_width);
    }
}
