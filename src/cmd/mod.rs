pub mod calc;
pub mod options;
pub mod state;
