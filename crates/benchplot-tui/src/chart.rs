//! Log-log chart widget.
//!
//! Ratatui axes are linear, so points are plotted as `(log2 n, log10 t)`
//! and the axis labels carry the original values. Matrix sizes double at
//! each step and labels are evenly spaced, so one label per size lines up
//! with the data.

use ratatui::layout::{Constraint, Rect};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition};
use ratatui::Frame;

use benchplot_core::ChartSpec;

use crate::styles::{axis_style, series_style, title_style};

/// A chart with its points already mapped onto log axes.
#[derive(Debug, Clone, PartialEq)]
pub struct LogPlot {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// `(label, points)` per series; non-positive values are left out.
    pub series: Vec<(String, Vec<(f64, f64)>)>,
    pub x_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_bounds: [f64; 2],
    pub y_labels: Vec<String>,
}

impl LogPlot {
    #[must_use]
    pub fn from_spec(spec: &ChartSpec) -> Self {
        let series = spec
            .series
            .iter()
            .map(|s| {
                let points = s
                    .points()
                    .filter(|(_, y)| y.is_finite() && *y > 0.0)
                    .map(|(x, y)| (x.log2(), y.log10()))
                    .collect();
                (s.label.clone(), points)
            })
            .collect();

        let first = f64::from(spec.x_axis[0]);
        let last = f64::from(spec.x_axis[spec.x_axis.len() - 1]);

        let (y_bounds, y_labels) = match spec.y_bounds() {
            Some((lo, hi)) => decade_axis(lo, hi),
            None => ([0.0, 1.0], Vec::new()),
        };

        Self {
            title: spec.title.clone(),
            x_title: spec.x_title.to_string(),
            y_title: spec.y_title.to_string(),
            series,
            x_bounds: [first.log2(), last.log2()],
            x_labels: spec.x_axis.iter().map(ToString::to_string).collect(),
            y_bounds,
            y_labels,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|(_, pts)| pts.is_empty())
    }
}

/// Whole-decade bounds around `[lo, hi]` with one label per decade.
#[allow(clippy::cast_possible_truncation)]
fn decade_axis(lo: f64, hi: f64) -> ([f64; 2], Vec<String>) {
    let low = lo.log10().floor();
    let mut high = hi.log10().ceil();
    if high <= low {
        high = low + 1.0;
    }
    let labels = (low as i32..=high as i32)
        .map(|exp| format!("1e{exp}"))
        .collect();
    ([low, high], labels)
}

/// Render `plot` into `area`.
pub fn render_log_plot(frame: &mut Frame, area: Rect, plot: &LogPlot, show_legend: bool) {
    let mut datasets = Vec::with_capacity(plot.series.len() * 2);
    for (i, (label, points)) in plot.series.iter().enumerate() {
        datasets.push(
            Dataset::default()
                .name(label.as_str())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(series_style(i))
                .data(points),
        );
        // Unnamed, so it stays out of the legend.
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(series_style(i))
                .data(points),
        );
    }

    let x_axis = Axis::default()
        .title(Span::styled(plot.x_title.as_str(), axis_style()))
        .style(axis_style())
        .bounds(plot.x_bounds)
        .labels(plot.x_labels.iter().map(String::as_str));
    let y_axis = Axis::default()
        .title(Span::styled(plot.y_title.as_str(), axis_style()))
        .style(axis_style())
        .bounds(plot.y_bounds)
        .labels(plot.y_labels.iter().map(String::as_str));

    let legend = show_legend.then_some(LegendPosition::TopLeft);
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(format!(" {} ", plot.title), title_style())),
        )
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(legend)
        .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

    frame.render_widget(chart, area);
}
