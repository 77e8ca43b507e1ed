//! Lift and drag coefficients for conventional and tubercled blades.

use uom::si::{angle::degree, f64::Angle, f64::Ratio, ratio::ratio};

use super::power::DRAG_EPSILON;

/// Lift coefficient per degree of angle of attack.
const LIFT_SLOPE: f64 = 0.1;

/// Drag coefficient per squared degree of angle of attack.
const DRAG_FACTOR: f64 = 0.01;

/// Fractional lift increase at full tubercle depth.
const TUBERCLE_LIFT_GAIN: f64 = 0.2;

/// Fractional drag reduction at full tubercle depth.
const TUBERCLE_DRAG_REDUCTION: f64 = 0.3;

/// Leading-edge design of a blade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BladeDesign {
    /// Straight leading edge.
    Conventional,

    /// Leading edge with tubercles of the given relative depth.
    ///
    /// Depths are expected in `[0, 1]` but are not checked here.
    Tubercled { depth: Ratio },
}

/// Dimensionless lift and drag coefficients of a blade section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AeroCoefficients {
    /// Lift coefficient.
    pub lift: f64,

    /// Drag coefficient.
    pub drag: f64,
}

impl AeroCoefficients {
    /// Returns the lift-to-drag ratio used for power estimation.
    ///
    /// [`DRAG_EPSILON`] is added to the drag so the ratio stays finite when
    /// drag is exactly zero (at zero angle of attack).
    #[must_use]
    pub fn lift_to_drag(&self) -> f64 {
        self.lift / (self.drag + DRAG_EPSILON)
    }
}

/// Computes lift and drag coefficients at an angle of attack.
///
/// The conventional polar is `lift = 0.1·α` and `drag = 0.01·α²` with `α` in
/// degrees. Tubercles scale lift by `1 + 0.2·depth` and drag by
/// `1 - 0.3·depth`.
///
/// No inputs are clamped. A tubercle depth above `1 / 0.3` produces a
/// negative drag coefficient, which is unphysical; use
/// [`SimulationInputs`](super::SimulationInputs) to keep depth in `[0, 1]`.
///
/// # Example
///
/// ```
/// use twine_wind::models::wind::{BladeDesign, coefficients};
/// use uom::si::{angle::degree, f64::{Angle, Ratio}, ratio::ratio};
///
/// let angle = Angle::new::<degree>(10.0);
/// let conventional = coefficients(angle, BladeDesign::Conventional);
/// let tubercled = coefficients(
///     angle,
///     BladeDesign::Tubercled { depth: Ratio::new::<ratio>(1.0) },
/// );
///
/// assert!(tubercled.lift > conventional.lift);
/// assert!(tubercled.drag < conventional.drag);
/// ```
#[must_use]
pub fn coefficients(angle: Angle, design: BladeDesign) -> AeroCoefficients {
    let alpha = angle.get::<degree>();
    let base = AeroCoefficients {
        lift: LIFT_SLOPE * alpha,
        drag: DRAG_FACTOR * alpha.powi(2),
    };

    match design {
        BladeDesign::Conventional => base,
        BladeDesign::Tubercled { depth } => {
            let depth = depth.get::<ratio>();
            AeroCoefficients {
                lift: base.lift * (1.0 + TUBERCLE_LIFT_GAIN * depth),
                drag: base.drag * (1.0 - TUBERCLE_DRAG_REDUCTION * depth),
            }
        }
    }
}
