//! # benchplot-cli
//!
//! Console output, text tables, interactive prompts, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod prompt;
pub mod ui;

pub use presenter::TextChartRenderer;
