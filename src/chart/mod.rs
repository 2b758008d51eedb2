//! Chart boundary: the sink trait the experiments plot into.
//!
//! Rendering, colour cycling and file export belong to the sink. The
//! experiment side only hands over equal-length sample sequences, style
//! hints and legend labels, and returns sink errors to the caller unchanged.

pub mod assembly;
pub mod memory;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_LINE_WIDTH;

pub use assembly::{export_all, plot_oscillations, plot_trajectories};
pub use memory::{MemoryChart, RecordedSeries};

/// Opaque reference to an emitted series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesHandle(pub usize);

/// Presentation hints attached to one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_width: f32,
    /// Plot against the secondary (right-hand) y axis.
    pub secondary_axis: bool,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_width: DEFAULT_LINE_WIDTH,
            secondary_axis: false,
        }
    }
}

impl SeriesStyle {
    pub fn secondary() -> Self {
        Self {
            secondary_axis: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExportFormat {
    Svg,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Jpeg => "jpeg",
        }
    }
}

/// Axis titles; `secondary_y` is only set for charts with a right-hand axis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x: String,
    pub y: String,
    pub secondary_y: Option<String>,
}

/// RGB colours, each channel in `0.0..=1.0`.
pub type Rgb = [f32; 3];

/// Light/dark pairs: one hue per force model, dark for the semi-implicit run.
pub const TRAJECTORY_PALETTE: [Rgb; 6] = [
    [1.0, 0.4, 0.4],
    [0.4, 0.0, 0.0],
    [0.4, 1.0, 0.4],
    [0.0, 0.4, 0.0],
    [0.4, 0.4, 1.0],
    [0.0, 0.0, 0.4],
];

/// Light hues for the explicit run's three curves, dark for the semi-implicit run.
pub const OSCILLATOR_PALETTE: [Rgb; 6] = [
    [1.0, 0.4, 0.4],
    [0.4, 1.0, 0.4],
    [0.4, 0.4, 1.0],
    [0.4, 0.0, 0.0],
    [0.0, 0.4, 0.0],
    [0.0, 0.0, 0.4],
];

/// Plotting collaborator.
pub trait ChartSink {
    type Error;

    fn set_axis_labels(&mut self, labels: &AxisLabels) -> Result<(), Self::Error>;

    /// Colour cycle for subsequent series. Sinks without colour control may ignore it.
    fn set_color_order(&mut self, _colors: &[Rgb]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn emit_series(
        &mut self,
        x: &[f64],
        y: &[f64],
        style: &SeriesStyle,
    ) -> Result<SeriesHandle, Self::Error>;

    /// Labels in emission order.
    fn set_legend(&mut self, labels: &[String]) -> Result<(), Self::Error>;

    fn export(&mut self, path: &Path, format: ExportFormat) -> Result<(), Self::Error>;
}
