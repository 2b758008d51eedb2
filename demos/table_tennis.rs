use kinematics_lab::chart::plot_trajectories;
use kinematics_lab::utils::max_abs_difference;
use kinematics_lab::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let experiment = ProjectileExperiment::table_tennis();
    let runs = experiment.run()?;

    // Euler and Euler-Cromer runs sit next to each other for every force model.
    for pair in runs.chunks(2) {
        if let [euler, cromer] = pair {
            println!(
                "{:<40} scheme gap {:.4} m",
                euler.legend_label(),
                max_abs_difference(&euler.y, &cromer.y)
            );
        }
    }

    let mut chart = MemoryChart::new();
    plot_trajectories(&mut chart, &runs)?;
    println!("{:?}", chart.legend);
    Ok(())
}
