//! Prints the blade comparison for the default inputs.
//!
//! Run with `cargo run --example comparison`.

use twine_core::Model;
use twine_wind::models::wind::{BladeComparison, SimulationInputs};
use uom::si::angle::degree;

fn main() {
    let model = BladeComparison::default();
    let Ok(evaluation) = model.call(&SimulationInputs::default());

    println!("{:>8} {:>12} {:>12}", "angle", "normal CL", "bio CL");
    for sample in evaluation.sweep.samples().iter().step_by(11) {
        println!(
            "{:>8.2} {:>12.3} {:>12.3}",
            sample.angle.get::<degree>(),
            sample.conventional.lift,
            sample.tubercled.lift,
        );
    }

    println!();
    println!("{}", evaluation.summary());
}
