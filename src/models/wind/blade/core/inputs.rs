//! Validated inputs for a blade comparison.

use std::ops::RangeInclusive;

use thiserror::Error;
use uom::si::{
    angle::degree,
    f64::{Angle, Ratio, Velocity},
    ratio::ratio,
    velocity::meter_per_second,
};

use crate::support::constraint::{
    Constrained, ConstraintError, NonNegative, StrictlyPositive, UnitInterval,
};

/// Wind speed control range, in m/s.
pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 2.0..=20.0;

/// Blade angle of attack control range, in degrees.
pub const BLADE_ANGLE_RANGE: RangeInclusive<f64> = 0.0..=20.0;

/// Tubercle depth control range, dimensionless.
pub const TUBERCLE_DEPTH_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Errors from building [`SimulationInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Wind speed is not strictly positive.
    #[error("invalid wind speed")]
    WindSpeed(#[source] ConstraintError),

    /// Blade angle is negative or not a number.
    #[error("invalid blade angle")]
    BladeAngle(#[source] ConstraintError),

    /// Tubercle depth is outside `[0, 1]`.
    #[error("invalid tubercle depth")]
    TubercleDepth(#[source] ConstraintError),
}

/// Operating point and blade geometry for one comparison.
///
/// Wind speed is strictly positive, blade angle is non-negative,
/// and tubercle depth lies in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationInputs {
    wind_speed: Velocity,
    blade_angle: Angle,
    tubercle_depth: Ratio,
}

impl SimulationInputs {
    /// Constructs validated inputs.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] identifying the first input that fails
    /// validation.
    pub fn new(
        wind_speed: Velocity,
        blade_angle: Angle,
        tubercle_depth: Ratio,
    ) -> Result<Self, InputError> {
        let wind_speed =
            Constrained::<Velocity, StrictlyPositive>::new(wind_speed).map_err(InputError::WindSpeed)?;
        let blade_angle =
            Constrained::<Angle, NonNegative>::new(blade_angle).map_err(InputError::BladeAngle)?;
        let tubercle_depth = UnitInterval::new(tubercle_depth).map_err(InputError::TubercleDepth)?;

        Ok(Self::from_constrained(wind_speed, blade_angle, tubercle_depth))
    }

    /// Constructs inputs from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        wind_speed: Constrained<Velocity, StrictlyPositive>,
        blade_angle: Constrained<Angle, NonNegative>,
        tubercle_depth: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        Self {
            wind_speed: wind_speed.into_inner(),
            blade_angle: blade_angle.into_inner(),
            tubercle_depth: tubercle_depth.into_inner(),
        }
    }

    /// Constructs inputs from raw control values, clamping each into its
    /// control range.
    ///
    /// Values are in m/s, degrees, and the unitless depth.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if any value is NaN.
    ///
    /// # Example
    ///
    /// ```
    /// use twine_wind::models::wind::SimulationInputs;
    /// use uom::si::{angle::degree, velocity::meter_per_second};
    ///
    /// let inputs = SimulationInputs::clamped(35.0, -4.0, 0.25).unwrap();
    ///
    /// assert_eq!(inputs.wind_speed().get::<meter_per_second>(), 20.0);
    /// assert_eq!(inputs.blade_angle().get::<degree>(), 0.0);
    ///
    /// assert!(SimulationInputs::clamped(f64::NAN, 10.0, 0.5).is_err());
    /// ```
    pub fn clamped(wind_speed: f64, blade_angle: f64, tubercle_depth: f64) -> Result<Self, InputError> {
        Self::new(
            Velocity::new::<meter_per_second>(clamp_to(wind_speed, &WIND_SPEED_RANGE)),
            Angle::new::<degree>(clamp_to(blade_angle, &BLADE_ANGLE_RANGE)),
            Ratio::new::<ratio>(clamp_to(tubercle_depth, &TUBERCLE_DEPTH_RANGE)),
        )
    }

    /// Returns the free-stream wind speed.
    #[must_use]
    pub fn wind_speed(&self) -> Velocity {
        self.wind_speed
    }

    /// Returns the blade angle of attack.
    #[must_use]
    pub fn blade_angle(&self) -> Angle {
        self.blade_angle
    }

    /// Returns the relative tubercle depth of the bio-inspired blade.
    #[must_use]
    pub fn tubercle_depth(&self) -> Ratio {
        self.tubercle_depth
    }
}

impl Default for SimulationInputs {
    /// 10 m/s wind, 10° blade angle, and half-depth tubercles.
    fn default() -> Self {
        Self {
            wind_speed: Velocity::new::<meter_per_second>(10.0),
            blade_angle: Angle::new::<degree>(10.0),
            tubercle_depth: Ratio::new::<ratio>(0.5),
        }
    }
}

/// Clamps into the range, passing NaN through for validation to reject.
fn clamp_to(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}
