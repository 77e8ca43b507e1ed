//! Wind energy models.

mod blade;

pub use blade::{
    AeroCoefficients, AngleSweep, BLADE_ANGLE_RANGE, BladeComparison, BladeDesign,
    ComparisonConfig, DRAG_EPSILON, EFFICIENCY_SCALE, Evaluation, InputError, PowerComparison,
    PowerConfig, SimulationInputs, Summary, SweepConfig, SweepSample, TUBERCLE_DEPTH_RANGE,
    WIND_SPEED_RANGE, coefficients, compare_power, evaluate, power, sweep_angles,
};
