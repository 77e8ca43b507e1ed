//! Analytical blade aerodynamics and the conventional/tubercled comparison.
//!
//! The aerodynamic model is a linear-lift, quadratic-drag polar with no stall.
//! A tubercled leading edge scales lift up and drag down in proportion to the
//! tubercle depth. Power follows a cube law in wind speed, scaled by the
//! blade's lift-to-drag ratio.
//!
//! None of this is calibrated against real turbines. It ignores rotor radius,
//! tip-speed ratio, and the Betz limit.

mod aero;
mod comparison;
mod config;
mod inputs;
mod power;
mod summary;
mod sweep;

pub use aero::{AeroCoefficients, BladeDesign, coefficients};
pub use comparison::{PowerComparison, compare_power};
pub use config::ComparisonConfig;
pub use inputs::{
    BLADE_ANGLE_RANGE, InputError, SimulationInputs, TUBERCLE_DEPTH_RANGE, WIND_SPEED_RANGE,
};
pub use power::{DRAG_EPSILON, EFFICIENCY_SCALE, PowerConfig, power};
pub use summary::Summary;
pub use sweep::{AngleSweep, SweepConfig, SweepSample, sweep_angles};

/// Everything the front end needs to draw one frame of the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Lift and drag curves for both designs.
    pub sweep: AngleSweep,

    /// Power of both designs at the operating point.
    pub power: PowerComparison,
}

impl Evaluation {
    /// Formats the power comparison for display.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::new(&self.power)
    }
}

/// Evaluates the comparison for a single set of inputs.
///
/// The sweep uses the inputs' tubercle depth; blade angle and wind speed only
/// affect the power comparison.
#[must_use]
pub fn evaluate(inputs: &SimulationInputs, config: &ComparisonConfig) -> Evaluation {
    Evaluation {
        sweep: sweep_angles(&config.sweep, inputs.tubercle_depth()),
        power: compare_power(inputs, &config.power),
    }
}
