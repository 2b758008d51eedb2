use std::path::Path;

use kinematics_lab::chart::{export_all, plot_oscillations};
use kinematics_lab::core::units::millisecond;
use kinematics_lab::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let experiment = OscillatorExperiment::damped_spring();
    let runs = experiment.run()?;

    for run in &runs {
        if let (Some(y), Some(v)) = (run.position.last(), run.velocity.last()) {
            println!(
                "{:?} dt = {:.1} ms: y = {y:.4} m, v = {v:.4} m/s",
                run.scheme,
                run.time_step.get::<millisecond>()
            );
        }
    }

    let mut chart = MemoryChart::new();
    plot_oscillations(&mut chart, &runs)?;
    export_all(
        &mut chart,
        Path::new("results"),
        &experiment.file_stem(),
        &[ExportFormat::Jpeg, ExportFormat::Svg],
    )?;
    for (path, _) in &chart.exports {
        println!("{}", path.display());
    }
    Ok(())
}
