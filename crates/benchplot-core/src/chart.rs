//! Chart model handed to renderers.

use serde::Serialize;

use crate::constants::{MATRIX_SIZES, X_AXIS_TITLE, Y_AXIS_TITLE};
use crate::error::PlotError;

/// One labeled y-series aligned with the matrix-size axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSeries {
    pub label: String,
    pub values: Vec<f64>,
}

impl LabeledSeries {
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    /// `(matrix size, value)` pairs; stops at the shorter of axis and values.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        MATRIX_SIZES
            .iter()
            .zip(&self.values)
            .map(|(&x, &y)| (f64::from(x), y))
    }
}

/// A log-log line chart of timings against matrix size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub x_axis: [u32; 9],
    pub series: Vec<LabeledSeries>,
}

impl ChartSpec {
    #[must_use]
    pub fn new(title: impl Into<String>, series: Vec<LabeledSeries>) -> Self {
        Self {
            title: title.into(),
            x_title: X_AXIS_TITLE,
            y_title: Y_AXIS_TITLE,
            x_axis: MATRIX_SIZES,
            series,
        }
    }

    /// Smallest and largest positive plotted value, if any.
    ///
    /// Non-positive values have no place on a log axis and are skipped.
    #[must_use]
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(LabeledSeries::points)
            .map(|(_, y)| y)
            .filter(|y| y.is_finite() && *y > 0.0)
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
            })
    }
}

/// Something that displays charts.
pub trait ChartRenderer {
    /// Display one chart. Interactive renderers block until dismissed.
    fn render(&mut self, chart: &ChartSpec) -> Result<(), PlotError>;
}

/// Renderer that keeps the charts it is given.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub charts: Vec<ChartSpec>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&mut self, chart: &ChartSpec) -> Result<(), PlotError> {
        self.charts.push(chart.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_align_with_axis() {
        let s = LabeledSeries::new("a", vec![1.0, 2.0, 3.0]);
        let pts: Vec<_> = s.points().collect();
        assert_eq!(pts, vec![(16.0, 1.0), (32.0, 2.0), (64.0, 3.0)]);
    }

    #[test]
    fn points_truncate_long_series() {
        let s = LabeledSeries::new("a", vec![1.0; 12]);
        assert_eq!(s.points().count(), 9);
    }

    #[test]
    fn chart_carries_axis_titles() {
        let chart = ChartSpec::new("checkSym Sequential", vec![]);
        assert_eq!(chart.x_title, "Matrix Size (n)");
        assert_eq!(chart.y_title, "Elaboration Time (s)");
        assert_eq!(chart.x_axis[0], 16);
        assert!(chart.y_bounds().is_none());
    }

    #[test]
    fn y_bounds_skip_non_positive() {
        let chart = ChartSpec::new(
            "t",
            vec![
                LabeledSeries::new("a", vec![0.5, 0.0, 4.0]),
                LabeledSeries::new("b", vec![-1.0, 0.25]),
            ],
        );
        assert_eq!(chart.y_bounds(), Some((0.25, 4.0)));
    }

    #[test]
    fn recording_renderer_keeps_charts() {
        let mut r = RecordingRenderer::default();
        r.render(&ChartSpec::new("one", vec![])).unwrap();
        r.render(&ChartSpec::new("two", vec![])).unwrap();
        assert_eq!(r.charts.len(), 2);
        assert_eq!(r.charts[1].title, "two");
    }
}
