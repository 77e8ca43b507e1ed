//! Power of both blade designs at a single operating point.

use uom::{
    ConstZero,
    si::{
        f64::{Power, Ratio},
        ratio::ratio,
    },
};

use super::{BladeDesign, PowerConfig, SimulationInputs, coefficients, power};

/// Estimated power of the conventional and tubercled blades.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerComparison {
    /// Power of the conventional blade.
    pub conventional: Power,

    /// Power of the tubercled blade.
    pub tubercled: Power,
}

impl PowerComparison {
    /// Returns the tubercled blade's power gain relative to the conventional
    /// blade, `tubercled / conventional - 1`.
    ///
    /// Returns `None` when the conventional blade produces no power, which
    /// happens at zero angle of attack.
    #[must_use]
    pub fn efficiency_gain(&self) -> Option<Ratio> {
        if self.conventional == Power::ZERO {
            return None;
        }
        Some(self.tubercled / self.conventional - Ratio::new::<ratio>(1.0))
    }
}

/// Estimates the power of both blade designs at the inputs' operating point.
#[must_use]
pub fn compare_power(inputs: &SimulationInputs, config: &PowerConfig) -> PowerComparison {
    let angle = inputs.blade_angle();
    let wind_speed = inputs.wind_speed();

    let conventional = coefficients(angle, BladeDesign::Conventional);
    let tubercled = coefficients(
        angle,
        BladeDesign::Tubercled {
            depth: inputs.tubercle_depth(),
        },
    );

    PowerComparison {
        conventional: power(conventional, wind_speed, config),
        tubercled: power(tubercled, wind_speed, config),
    }
}
