//! Reading raw timing samples, one literal per line.

use std::io::{BufRead, ErrorKind};
use std::path::Path;

use crate::error::PlotError;

/// Parse one sample per line.
///
/// Blank lines before the first and after the last sample are ignored; a
/// blank line between samples is a parse error. Each line is trimmed before
/// parsing.
pub fn parse_samples<R: BufRead>(reader: R) -> Result<Vec<f64>, PlotError> {
    let mut samples = Vec::new();
    let mut blank_run: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| match source.kind() {
            ErrorKind::InvalidData => PlotError::Parse {
                line: line_no,
                text: "<invalid UTF-8>".into(),
            },
            _ => PlotError::Io {
                path: "<input>".into(),
                source,
            },
        })?;
        let text = line.trim();

        if text.is_empty() {
            blank_run.get_or_insert(line_no);
            continue;
        }
        if let Some(blank) = blank_run.take() {
            if !samples.is_empty() {
                return Err(PlotError::Parse {
                    line: blank,
                    text: String::new(),
                });
            }
        }

        let value = text.parse::<f64>().map_err(|_| PlotError::Parse {
            line: line_no,
            text: text.to_string(),
        })?;
        samples.push(value);
    }

    tracing::debug!(count = samples.len(), "parsed samples");
    Ok(samples)
}

/// Read every sample from a file.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, PlotError> {
    let file = std::fs::File::open(path).map_err(|source| PlotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_samples(std::io::BufReader::new(file)).map_err(|err| match err {
        PlotError::Io { source, .. } => PlotError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
