//! Text formatting of timings and chart tables.

use std::fmt::Write as _;

use benchplot_core::ChartSpec;

/// Format a time in seconds with a unit suited to its magnitude.
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    if !secs.is_finite() {
        return format!("{secs}");
    }
    let abs = secs.abs();
    if abs == 0.0 {
        "0s".to_string()
    } else if abs < 1e-6 {
        format!("{:.2}ns", secs * 1e9)
    } else if abs < 1e-3 {
        format!("{:.2}µs", secs * 1e6)
    } else if abs < 1.0 {
        format!("{:.2}ms", secs * 1e3)
    } else {
        format!("{secs:.3}s")
    }
}

/// Render a chart as a table: one row per matrix size, one column per series.
#[must_use]
pub fn format_table(chart: &ChartSpec) -> String {
    const SIZE_WIDTH: usize = 6;
    let widths: Vec<usize> = chart
        .series
        .iter()
        .map(|s| s.label.chars().count().max(10))
        .collect();

    let mut out = String::new();
    let _ = write!(out, "{:>SIZE_WIDTH$}", "n");
    for (series, &width) in chart.series.iter().zip(&widths) {
        let _ = write!(out, "  {:>width$}", series.label);
    }
    out.push('\n');

    for (row, size) in chart.x_axis.iter().enumerate() {
        let _ = write!(out, "{size:>SIZE_WIDTH$}");
        for (series, &width) in chart.series.iter().zip(&widths) {
            let cell = series
                .values
                .get(row)
                .map_or_else(|| "-".to_string(), |v| format_seconds(*v));
            let _ = write!(out, "  {cell:>width$}");
        }
        out.push('\n');
    }
    out
}
