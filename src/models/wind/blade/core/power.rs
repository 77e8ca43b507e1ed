//! Simplified blade power estimate.

use uom::si::{
    area::square_meter,
    f64::{Area, MassDensity, Power, Velocity},
    mass_density::kilogram_per_cubic_meter,
};

use super::AeroCoefficients;

/// Added to the drag coefficient before dividing lift by drag.
pub const DRAG_EPSILON: f64 = 1e-6;

/// Divisor applied to the lift-to-drag ratio to form a power fraction.
pub const EFFICIENCY_SCALE: f64 = 100.0;

/// Air and blade properties for the power estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerConfig {
    /// Density of the incoming air.
    pub air_density: MassDensity,

    /// Blade reference area.
    pub blade_area: Area,
}

impl Default for PowerConfig {
    /// Sea-level air and a 10 m² blade.
    fn default() -> Self {
        Self {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(1.225),
            blade_area: Area::new::<square_meter>(10.0),
        }
    }
}

/// Estimates the power captured by a blade.
///
/// Computes `½·ρ·A·v³·(L/D) / 100`, where `L/D` is
/// [`AeroCoefficients::lift_to_drag`].
/// The lift-to-drag scaling stands in for a power coefficient and is not
/// capped at the Betz limit.
///
/// # Example
///
/// ```
/// use twine_wind::models::wind::{AeroCoefficients, PowerConfig, power};
/// use uom::si::{f64::Velocity, power::watt, velocity::meter_per_second};
///
/// let still = AeroCoefficients { lift: 0.0, drag: 0.0 };
/// let p = power(still, Velocity::new::<meter_per_second>(10.0), &PowerConfig::default());
///
/// assert_eq!(p.get::<watt>(), 0.0);
/// ```
#[must_use]
pub fn power(coefficients: AeroCoefficients, wind_speed: Velocity, config: &PowerConfig) -> Power {
    let fraction = 0.5 * coefficients.lift_to_drag() / EFFICIENCY_SCALE;
    config.air_density * config.blade_area * wind_speed * wind_speed * wind_speed * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, velocity::meter_per_second};

    fn wind(v: f64) -> Velocity {
        Velocity::new::<meter_per_second>(v)
    }

    #[test]
    fn unit_lift_to_drag() {
        let c = AeroCoefficients {
            lift: 1.0,
            drag: 1.0,
        };
        let p = power(c, wind(10.0), &PowerConfig::default());

        // 0.5 * 1.225 * 10 * 1000 / 100
        assert_relative_eq!(p.get::<watt>(), 61.25 / (1.0 + DRAG_EPSILON), max_relative = 1e-12);
    }

    #[test]
    fn cube_law_in_wind_speed() {
        let c = AeroCoefficients {
            lift: 1.3,
            drag: 0.4,
        };
        let config = PowerConfig::default();

        let slow = power(c, wind(4.0), &config).get::<watt>();
        let fast = power(c, wind(8.0), &config).get::<watt>();

        assert_relative_eq!(fast, 8.0 * slow, max_relative = 1e-12);
    }

    #[test]
    fn zero_lift_and_drag_gives_zero_power() {
        let c = AeroCoefficients {
            lift: 0.0,
            drag: 0.0,
        };
        let p = power(c, wind(10.0), &PowerConfig::default());
        assert_eq!(p.get::<watt>(), 0.0);
    }

    #[test]
    fn zero_drag_stays_finite() {
        let c = AeroCoefficients {
            lift: 0.5,
            drag: 0.0,
        };
        let p = power(c, wind(20.0), &PowerConfig::default()).get::<watt>();

        assert!(p.is_finite());
        assert_relative_eq!(p, 0.5 * 1.225 * 10.0 * 8000.0 * 5e5 / 100.0, max_relative = 1e-12);
    }

    #[test]
    fn thinner_air_gives_less_power() {
        let c = AeroCoefficients {
            lift: 1.0,
            drag: 0.5,
        };
        let sea_level = PowerConfig::default();
        let altitude = PowerConfig {
            air_density: MassDensity::new::<kilogram_per_cubic_meter>(0.9),
            ..sea_level
        };

        assert!(power(c, wind(10.0), &altitude) < power(c, wind(10.0), &sea_level));
    }
}
