//! # benchplot-tui
//!
//! Terminal viewer drawing benchmark timings as log-log line charts.

pub mod chart;
pub mod footer;
pub mod keymap;
pub mod styles;
pub mod viewer;

pub use chart::LogPlot;
pub use viewer::ChartViewer;
