use std::path::Path;

use kinematics_lab::chart::{export_all, plot_trajectories};
use kinematics_lab::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let experiment = ProjectileExperiment::golf_ball();
    let runs = experiment.run_parallel()?;

    for run in &runs {
        if let Some(apex) = run.apex() {
            println!(
                "{:<48} apex ({:.2} m, {:.2} m)",
                run.legend_label(),
                apex.x,
                apex.y
            );
        }
    }

    let mut chart = MemoryChart::new();
    plot_trajectories(&mut chart, &runs)?;
    export_all(
        &mut chart,
        Path::new("results"),
        &experiment.name,
        &[ExportFormat::Svg, ExportFormat::Jpeg],
    )?;
    println!("{} series ready for {} exports", chart.series.len(), chart.exports.len());
    Ok(())
}
