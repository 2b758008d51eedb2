//! Hands completed runs to a [`ChartSink`].

use std::path::Path;

use super::{
    AxisLabels, ChartSink, ExportFormat, SeriesStyle, OSCILLATOR_PALETTE, TRAJECTORY_PALETTE,
};
use crate::experiment::{OscillatorSeries, TrajectorySeries};

/// Plots every trajectory as y over x, labelled with its mode and time step.
pub fn plot_trajectories<S: ChartSink>(
    sink: &mut S,
    runs: &[TrajectorySeries],
) -> Result<(), S::Error> {
    sink.set_axis_labels(&AxisLabels {
        x: "X-position [m]".into(),
        y: "Y-position [m]".into(),
        secondary_y: None,
    })?;
    sink.set_color_order(&TRAJECTORY_PALETTE)?;

    let style = SeriesStyle::default();
    for run in runs {
        sink.emit_series(&run.x, &run.y, &style)?;
    }

    let legend: Vec<String> = runs.iter().map(TrajectorySeries::legend_label).collect();
    sink.set_legend(&legend)
}

/// Plots position and velocity over time; acceleration on the secondary axis.
pub fn plot_oscillations<S: ChartSink>(
    sink: &mut S,
    runs: &[OscillatorSeries],
) -> Result<(), S::Error> {
    sink.set_axis_labels(&AxisLabels {
        x: "time [s]".into(),
        y: "position [m] and velocity [m/s]".into(),
        secondary_y: Some("acceleration [m/s^2]".into()),
    })?;
    sink.set_color_order(&OSCILLATOR_PALETTE)?;

    let primary = SeriesStyle::default();
    let secondary = SeriesStyle::secondary();
    let mut legend = Vec::with_capacity(runs.len() * 3);
    for run in runs {
        sink.emit_series(&run.time, &run.position, &primary)?;
        sink.emit_series(&run.time, &run.velocity, &primary)?;
        sink.emit_series(&run.time, &run.acceleration, &secondary)?;
        legend.extend(run.legend_labels());
    }

    sink.set_legend(&legend)
}

/// Exports the chart as `<dir>/<stem>.<ext>` once per format.
pub fn export_all<S: ChartSink>(
    sink: &mut S,
    dir: &Path,
    stem: &str,
    formats: &[ExportFormat],
) -> Result<(), S::Error> {
    for &format in formats {
        let path = dir.join(format!("{stem}.{}", format.extension()));
        sink.export(&path, format)?;
    }
    Ok(())
}
