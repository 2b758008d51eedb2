use std::path::{Path, PathBuf};

use log::debug;

use super::{AxisLabels, ChartSink, ExportFormat, Rgb, SeriesHandle, SeriesStyle};
use crate::error::ChartError;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedSeries {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub style: SeriesStyle,
}

/// Sink that keeps everything it is given. `export` records the request only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryChart {
    pub axis_labels: AxisLabels,
    pub color_order: Vec<Rgb>,
    pub series: Vec<RecordedSeries>,
    pub legend: Vec<String>,
    pub exports: Vec<(PathBuf, ExportFormat)>,
}

impl MemoryChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn series_for(&self, handle: SeriesHandle) -> Option<&RecordedSeries> {
        self.series.get(handle.0)
    }
}

impl ChartSink for MemoryChart {
    type Error = ChartError;

    fn set_axis_labels(&mut self, labels: &AxisLabels) -> Result<(), ChartError> {
        self.axis_labels = labels.clone();
        Ok(())
    }

    fn set_color_order(&mut self, colors: &[Rgb]) -> Result<(), ChartError> {
        self.color_order = colors.to_vec();
        Ok(())
    }

    fn emit_series(
        &mut self,
        x: &[f64],
        y: &[f64],
        style: &SeriesStyle,
    ) -> Result<SeriesHandle, ChartError> {
        if x.len() != y.len() {
            return Err(ChartError::LengthMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        self.series.push(RecordedSeries {
            x: x.to_vec(),
            y: y.to_vec(),
            style: *style,
        });
        Ok(SeriesHandle(self.series.len() - 1))
    }

    fn set_legend(&mut self, labels: &[String]) -> Result<(), ChartError> {
        if labels.len() > self.series.len() {
            return Err(ChartError::LegendOverflow {
                labels: labels.len(),
                series: self.series.len(),
            });
        }
        self.legend = labels.to_vec();
        Ok(())
    }

    fn export(&mut self, path: &Path, format: ExportFormat) -> Result<(), ChartError> {
        debug!("recording export of {} series to {}", self.series.len(), path.display());
        self.exports.push((path.to_path_buf(), format));
        Ok(())
    }
}
