//! Regrouping chunk averages by execution mode.

use serde::Serialize;

use crate::averager::ChunkAverage;
use crate::chart::{ChartSpec, LabeledSeries};
use crate::constants::{GROUP_SIZE, PARALLELISM_LEVELS};
use crate::layout::{ExperimentLayout, ShapeWarning};
use crate::mode::ExecutionMode;

/// Chunk averages reshaped for one execution mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regrouped {
    /// One value per matrix size, in chunk order.
    Sequential {
        checksym: Vec<f64>,
        transpose: Vec<f64>,
        warnings: Vec<ShapeWarning>,
    },
    /// Values indexed `[group][matrix size position]`, one group per parallelism level.
    Parallel {
        mode: ExecutionMode,
        checksym: Vec<Vec<f64>>,
        transpose: Vec<Vec<f64>>,
        warnings: Vec<ShapeWarning>,
    },
}

impl Regrouped {
    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        match self {
            Self::Sequential { .. } => ExecutionMode::Sequential,
            Self::Parallel { mode, .. } => *mode,
        }
    }

    #[must_use]
    pub fn warnings(&self) -> &[ShapeWarning] {
        match self {
            Self::Sequential { warnings, .. } | Self::Parallel { warnings, .. } => warnings,
        }
    }

    /// The symmetry-check chart followed by the transpose chart.
    #[must_use]
    pub fn charts(&self) -> [ChartSpec; 2] {
        match self {
            Self::Sequential {
                checksym,
                transpose,
                ..
            } => {
                let sym_title = "checkSym Sequential";
                let tr_title = "matTranspose Sequential";
                [
                    ChartSpec::new(sym_title, vec![LabeledSeries::new(sym_title, checksym.clone())]),
                    ChartSpec::new(tr_title, vec![LabeledSeries::new(tr_title, transpose.clone())]),
                ]
            }
            Self::Parallel {
                mode,
                checksym,
                transpose,
                ..
            } => {
                let prefix = mode.label_prefix().unwrap_or_default();
                let labeled = |groups: &[Vec<f64>]| {
                    groups
                        .iter()
                        .zip(PARALLELISM_LEVELS)
                        .map(|(values, level)| {
                            LabeledSeries::new(format!("{prefix}{level}"), values.clone())
                        })
                        .collect::<Vec<_>>()
                };
                [
                    ChartSpec::new(format!("checkSym {mode}"), labeled(checksym.as_slice())),
                    ChartSpec::new(format!("matTranspose {mode}"), labeled(transpose.as_slice())),
                ]
            }
        }
    }
}

/// Reshapes chunk averages according to an execution mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeRegrouper {
    layout: ExperimentLayout,
}

impl ModeRegrouper {
    #[must_use]
    pub fn new(mode: ExecutionMode) -> Self {
        Self {
            layout: ExperimentLayout::for_mode(mode),
        }
    }

    /// Regroup `averages`.
    ///
    /// The count is checked against the layout first; every mismatch is
    /// logged and kept on the result. Parallel modes keep only complete
    /// groups of nine, up to one group per parallelism level.
    #[must_use]
    pub fn regroup(&self, averages: &[ChunkAverage]) -> Regrouped {
        let warnings = self.layout.check(averages.len());
        for warning in &warnings {
            tracing::warn!(mode = %self.layout.mode(), "{warning}");
        }

        let mode = self.layout.mode();
        if !mode.is_parallel() {
            return Regrouped::Sequential {
                checksym: averages.iter().map(ChunkAverage::checksym).collect(),
                transpose: averages.iter().map(ChunkAverage::transpose).collect(),
                warnings,
            };
        }

        let groups = self.layout.complete_groups(averages.len());
        let mut checksym = vec![Vec::with_capacity(GROUP_SIZE); groups];
        let mut transpose = vec![Vec::with_capacity(GROUP_SIZE); groups];
        for (index, avg) in averages.iter().enumerate() {
            let Some(cell) = self.layout.locate(index) else {
                break;
            };
            if cell.group >= groups {
                break;
            }
            checksym[cell.group].push(avg.checksym());
            transpose[cell.group].push(avg.transpose());
        }

        tracing::debug!(%mode, groups, "regrouped chunk averages");
        Regrouped::Parallel {
            mode,
            checksym,
            transpose,
            warnings,
        }
    }
}
