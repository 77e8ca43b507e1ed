use std::fmt;

use uom::si::{power::watt, ratio::percent};

use super::PowerComparison;

/// Display text for a power comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Conventional blade power in watts, two decimal places.
    pub conventional_power: String,

    /// Tubercled blade power in watts, two decimal places.
    pub tubercled_power: String,

    /// Efficiency gain in percent, one decimal place, or `n/a` if undefined.
    pub efficiency_gain: String,
}

impl Summary {
    #[must_use]
    pub fn new(comparison: &PowerComparison) -> Self {
        let efficiency_gain = match comparison.efficiency_gain() {
            Some(gain) => format!("{:.1}%", gain.get::<percent>()),
            None => "n/a".to_owned(),
        };

        Self {
            conventional_power: format!("{:.2} W", comparison.conventional.get::<watt>()),
            tubercled_power: format!("{:.2} W", comparison.tubercled.get::<watt>()),
            efficiency_gain,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Normal Turbine Power: {}", self.conventional_power)?;
        writeln!(f, "Bio-Inspired Turbine Power: {}", self.tubercled_power)?;
        write!(f, "Efficiency Gain: {}", self.efficiency_gain)
    }
}
