pub mod calculator;
pub mod config;
pub mod error;
pub mod multipliers;
pub mod rim;
pub mod store;
pub mod units;

pub use calculator::{calculate_tire_pressure, CalculationInput, PressurePair};
pub use error::{TireError, TireResult};
// cmd and reports are modules of the binary crate (main.rs).
