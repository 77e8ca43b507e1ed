use super::{PowerConfig, SweepConfig};

/// Configuration for a blade comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComparisonConfig {
    /// Angle range and resolution of the lift curves.
    pub sweep: SweepConfig,

    /// Air and blade properties for the power estimate.
    pub power: PowerConfig,
}
