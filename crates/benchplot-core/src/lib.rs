//! # benchplot-core
//!
//! Turns the flat timing dump of the matrix symmetry-check and transpose
//! benchmarks into per-size averages, regrouped by execution mode.
//!
//! The pipeline is [`samples::read_samples`] → [`ChunkAverager::average`] →
//! [`ModeRegrouper::regroup`] → [`Regrouped::charts`], whose output is handed
//! to a [`ChartRenderer`].

pub mod averager;
pub mod chart;
pub mod constants;
pub mod error;
pub mod layout;
pub mod mode;
pub mod regroup;
pub mod samples;

pub use averager::{ChunkAverage, ChunkAverager};
pub use chart::{ChartRenderer, ChartSpec, LabeledSeries, RecordingRenderer};
pub use error::PlotError;
pub use layout::{Cell, ExperimentLayout, ShapeWarning};
pub use mode::ExecutionMode;
pub use regroup::{ModeRegrouper, Regrouped};
