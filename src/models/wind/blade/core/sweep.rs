//! Angle-of-attack sweeps for lift and drag curves.

use uom::si::{angle::degree, f64::Angle, f64::Ratio};

use super::{AeroCoefficients, BladeDesign, coefficients};

/// Range and resolution of an angle-of-attack sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepConfig {
    /// Number of samples, including both endpoints.
    pub count: usize,

    /// First angle of the sweep.
    pub min: Angle,

    /// Last angle of the sweep.
    pub max: Angle,
}

impl Default for SweepConfig {
    /// 100 samples from 0° to 20°.
    fn default() -> Self {
        Self {
            count: 100,
            min: Angle::new::<degree>(0.0),
            max: Angle::new::<degree>(20.0),
        }
    }
}

/// Coefficients of both blade designs at one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSample {
    pub angle: Angle,
    pub conventional: AeroCoefficients,
    pub tubercled: AeroCoefficients,
}

/// Coefficients of both blade designs over evenly spaced angles.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleSweep {
    samples: Vec<SweepSample>,
}

impl AngleSweep {
    /// Returns the samples in increasing angle order.
    #[must_use]
    pub fn samples(&self) -> &[SweepSample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the sweep has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the sampled angles.
    pub fn angles(&self) -> impl Iterator<Item = Angle> + '_ {
        self.samples.iter().map(|s| s.angle)
    }

    /// Returns the conventional blade's lift curve.
    pub fn conventional_lift(&self) -> impl Iterator<Item = (Angle, f64)> + '_ {
        self.samples.iter().map(|s| (s.angle, s.conventional.lift))
    }

    /// Returns the tubercled blade's lift curve.
    pub fn tubercled_lift(&self) -> impl Iterator<Item = (Angle, f64)> + '_ {
        self.samples.iter().map(|s| (s.angle, s.tubercled.lift))
    }

    /// Returns the conventional blade's drag curve.
    pub fn conventional_drag(&self) -> impl Iterator<Item = (Angle, f64)> + '_ {
        self.samples.iter().map(|s| (s.angle, s.conventional.drag))
    }

    /// Returns the tubercled blade's drag curve.
    pub fn tubercled_drag(&self) -> impl Iterator<Item = (Angle, f64)> + '_ {
        self.samples.iter().map(|s| (s.angle, s.tubercled.drag))
    }
}

/// Evaluates both blade designs over an evenly spaced range of angles.
///
/// Angles run from `config.min` to `config.max` inclusive.
/// A count of one yields only `config.min`; a count of zero yields an empty
/// sweep.
#[must_use]
pub fn sweep_angles(config: &SweepConfig, tubercle_depth: Ratio) -> AngleSweep {
    let tubercled = BladeDesign::Tubercled {
        depth: tubercle_depth,
    };

    let samples = linspace(config.min, config.max, config.count)
        .map(|angle| SweepSample {
            angle,
            conventional: coefficients(angle, BladeDesign::Conventional),
            tubercled: coefficients(angle, tubercled),
        })
        .collect();

    AngleSweep { samples }
}

/// Evenly spaced angles with the last one pinned to `end`.
fn linspace(start: Angle, end: Angle, count: usize) -> impl Iterator<Item = Angle> {
    let start_deg = start.get::<degree>();
    let end_deg = end.get::<degree>();
    let step = if count > 1 {
        (end_deg - start_deg) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count).map(move |i| {
        if count > 1 && i == count - 1 {
            end
        } else {
            Angle::new::<degree>(start_deg + step * i as f64)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::ratio;

    fn depth(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    #[test]
    fn default_sweep_spans_zero_to_twenty() {
        let sweep = sweep_angles(&SweepConfig::default(), depth(0.5));
        let angles: Vec<f64> = sweep.angles().map(|a| a.get::<degree>()).collect();

        assert_eq!(angles.len(), 100);
        assert_eq!(angles[0], 0.0);
        assert_relative_eq!(angles[99], 20.0, epsilon = 1e-12);

        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], 20.0 / 99.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn curves_follow_the_model() {
        let sweep = sweep_angles(&SweepConfig::default(), depth(0.7));
        let design = BladeDesign::Tubercled { depth: depth(0.7) };

        for ((angle, lift), sample) in sweep.tubercled_lift().zip(sweep.samples()) {
            assert_eq!(lift, coefficients(angle, design).lift);
            assert_eq!(sample.conventional, coefficients(angle, BladeDesign::Conventional));
        }

        let conventional: Vec<_> = sweep.conventional_drag().collect();
        let tubercled: Vec<_> = sweep.tubercled_drag().collect();
        for ((_, normal), (_, bio)) in conventional.iter().zip(&tubercled) {
            assert!(bio <= normal);
        }
    }

    #[test]
    fn lift_curves_coincide_without_tubercles() {
        let sweep = sweep_angles(&SweepConfig::default(), depth(0.0));
        assert!(
            sweep
                .conventional_lift()
                .zip(sweep.tubercled_lift())
                .all(|(normal, bio)| normal == bio)
        );
    }

    #[test]
    fn custom_range() {
        let config = SweepConfig {
            count: 5,
            min: Angle::new::<degree>(-4.0),
            max: Angle::new::<degree>(4.0),
        };
        let angles: Vec<f64> = sweep_angles(&config, depth(0.5))
            .angles()
            .map(|a| a.get::<degree>())
            .collect();

        let expected = [-4.0, -2.0, 0.0, 2.0, 4.0];
        for (actual, expected) in angles.iter().zip(expected) {
            assert_relative_eq!(*actual, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn degenerate_counts() {
        let single = SweepConfig {
            count: 1,
            ..SweepConfig::default()
        };
        let sweep = sweep_angles(&single, depth(0.5));
        assert_eq!(sweep.len(), 1);
        assert_eq!(sweep.samples()[0].angle, single.min);

        let empty = SweepConfig {
            count: 0,
            ..SweepConfig::default()
        };
        assert!(sweep_angles(&empty, depth(0.5)).is_empty());
    }
}
