//! Mapping from chunk position to experiment coordinates.
//!
//! Chunk `i` belongs to group `i / 9` (one parallelism level) and to matrix
//! size `MATRIX_SIZES[i % 9]`. The layout states that mapping explicitly and
//! checks a chunk count against it before any regrouping happens.

use std::fmt;

use serde::Serialize;

use crate::constants::{GROUP_SIZE, MATRIX_SIZES, PARALLELISM_LEVELS};
use crate::mode::ExecutionMode;

/// Coordinates of one chunk average in the experiment design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    /// Group index (parallelism level position).
    pub group: usize,
    /// Position within the group (matrix size position).
    pub position: usize,
    pub matrix_size: u32,
    /// Thread or process count; `None` for sequential runs.
    pub parallelism: Option<u32>,
}

/// A chunk count that does not fit the experiment design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ShapeWarning {
    /// The total count differs from the design.
    CountMismatch {
        mode: ExecutionMode,
        expected: usize,
        found: usize,
    },
    /// The final group holds fewer than nine chunks and is dropped.
    PartialGroup { group: usize, filled: usize },
    /// Chunks past the last parallelism group are dropped.
    ExtraChunks { dropped: usize },
}

impl fmt::Display for ShapeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountMismatch {
                mode,
                expected,
                found,
            } => write!(
                f,
                "For {mode} mode, expected {expected} data blocks. Found: {found}"
            ),
            Self::PartialGroup { group, filled } => write!(
                f,
                "group {group} has {filled} of {GROUP_SIZE} data blocks and is dropped"
            ),
            Self::ExtraChunks { dropped } => {
                write!(f, "{dropped} data blocks past the last group are dropped")
            }
        }
    }
}

/// Experiment design for one execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentLayout {
    mode: ExecutionMode,
}

impl ExperimentLayout {
    #[must_use]
    pub fn for_mode(mode: ExecutionMode) -> Self {
        Self { mode }
    }

    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Locate the chunk at `index`, or `None` if it lies outside the design.
    #[must_use]
    pub fn locate(&self, index: usize) -> Option<Cell> {
        if index >= self.mode.expected_chunks() {
            return None;
        }
        let group = index / GROUP_SIZE;
        let position = index % GROUP_SIZE;
        Some(Cell {
            group,
            position,
            matrix_size: MATRIX_SIZES[position],
            parallelism: self
                .mode
                .is_parallel()
                .then(|| PARALLELISM_LEVELS[group]),
        })
    }

    /// Check a chunk count against the design.
    ///
    /// Sequential runs only report a count mismatch. Parallel runs also
    /// report the chunks the truncating regroup will drop.
    #[must_use]
    pub fn check(&self, count: usize) -> Vec<ShapeWarning> {
        let expected = self.mode.expected_chunks();
        let mut warnings = Vec::new();
        if count != expected {
            warnings.push(ShapeWarning::CountMismatch {
                mode: self.mode,
                expected,
                found: count,
            });
        }
        if !self.mode.is_parallel() {
            return warnings;
        }

        if count > expected {
            warnings.push(ShapeWarning::ExtraChunks {
                dropped: count - expected,
            });
        } else if count % GROUP_SIZE != 0 {
            warnings.push(ShapeWarning::PartialGroup {
                group: count / GROUP_SIZE,
                filled: count % GROUP_SIZE,
            });
        }
        warnings
    }

    /// Number of complete groups kept out of `count` chunks.
    #[must_use]
    pub fn complete_groups(&self, count: usize) -> usize {
        (count / GROUP_SIZE).min(self.mode.group_count())
    }
}
