//! Conventional versus tubercled blade comparison.
//!
//! This module provides the [`twine_core::Model`] implementation for the
//! blade comparison. The computational core is in the internal [`core`] module.

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    AeroCoefficients, AngleSweep, BLADE_ANGLE_RANGE, BladeDesign, ComparisonConfig, DRAG_EPSILON,
    EFFICIENCY_SCALE, Evaluation, InputError, PowerComparison, PowerConfig, SimulationInputs,
    Summary, SweepConfig, SweepSample, TUBERCLE_DEPTH_RANGE, WIND_SPEED_RANGE, coefficients,
    compare_power, evaluate, power, sweep_angles,
};

/// Compares a conventional blade against a tubercled blade.
///
/// Each call sweeps the angle of attack to build lift curves for both designs
/// and estimates the power of each design at the input blade angle and wind
/// speed.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_wind::models::wind::{BladeComparison, SimulationInputs};
///
/// let model = BladeComparison::default();
/// let evaluation = model.call(&SimulationInputs::default()).unwrap();
///
/// assert_eq!(evaluation.sweep.len(), 100);
/// assert!(evaluation.power.tubercled > evaluation.power.conventional);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BladeComparison {
    config: ComparisonConfig,
}

impl BladeComparison {
    /// Creates a comparison model with the given configuration.
    #[must_use]
    pub fn new(config: ComparisonConfig) -> Self {
        Self { config }
    }

    /// Returns the model configuration.
    #[must_use]
    pub fn config(&self) -> &ComparisonConfig {
        &self.config
    }
}

impl Model for BladeComparison {
    type Input = SimulationInputs;
    type Output = Evaluation;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(evaluate(input, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        f64::{Angle, Area, Power, Ratio, Velocity},
        power::watt,
        ratio::ratio,
        velocity::meter_per_second,
    };

    fn inputs(wind: f64, angle: f64, depth: f64) -> SimulationInputs {
        SimulationInputs::new(
            Velocity::new::<meter_per_second>(wind),
            Angle::new::<uom::si::angle::degree>(angle),
            Ratio::new::<ratio>(depth),
        )
        .expect("inputs should be valid")
    }

    #[test]
    fn adapter_matches_core() {
        let model = BladeComparison::default();
        let input = inputs(12.0, 7.5, 0.3);

        let from_model = model.call(&input).unwrap();
        let from_core = evaluate(&input, &ComparisonConfig::default());

        assert_eq!(from_model, from_core);
    }

    #[test]
    fn larger_blade_area_scales_power() {
        let mut config = ComparisonConfig::default();
        config.power.blade_area = Area::new::<square_meter>(20.0);
        let model = BladeComparison::new(config);

        let input = inputs(10.0, 10.0, 0.5);
        let doubled = model.call(&input).unwrap();
        let baseline = BladeComparison::default().call(&input).unwrap();

        assert_relative_eq!(
            doubled.power.conventional.get::<watt>(),
            2.0 * baseline.power.conventional.get::<watt>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            doubled.power.tubercled.get::<watt>(),
            2.0 * baseline.power.tubercled.get::<watt>(),
            max_relative = 1e-12
        );

        // Efficiency gain is independent of blade area.
        assert_relative_eq!(
            doubled.power.efficiency_gain().unwrap().get::<ratio>(),
            baseline.power.efficiency_gain().unwrap().get::<ratio>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn zero_angle_has_no_power_and_no_gain() {
        let model = BladeComparison::default();
        let evaluation = model.call(&inputs(10.0, 0.0, 0.5)).unwrap();

        assert_eq!(evaluation.power.conventional, Power::new::<watt>(0.0));
        assert_eq!(evaluation.power.tubercled, Power::new::<watt>(0.0));
        assert!(evaluation.power.efficiency_gain().is_none());
        assert_eq!(evaluation.summary().efficiency_gain, "n/a");
    }
}
