//! Error type shared by the pipeline.

use std::path::PathBuf;

/// Error type for reading, aggregating, and rendering benchmark timings.
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    /// A line of the input could not be parsed as a floating-point number.
    #[error("line {line}: cannot parse {text:?} as a number")]
    Parse { line: usize, text: String },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The mode selector was not 1, 2, or 3.
    #[error("Invalid mode {0:?}. Please enter 1, 2, or 3.")]
    InvalidMode(String),

    /// The input file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chart could not be rendered.
    #[error("render error: {0}")]
    Render(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_line() {
        let err = PlotError::Parse {
            line: 12,
            text: "x1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("line 12"));
        assert!(msg.contains("x1"));
    }

    #[test]
    fn invalid_mode_message() {
        let msg = PlotError::InvalidMode("5".into()).to_string();
        assert!(msg.contains("Please enter 1, 2, or 3."));
    }
}
