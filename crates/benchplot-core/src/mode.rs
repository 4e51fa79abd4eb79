//! Execution modes of the benchmark runs.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constants::{GROUP_SIZE, PARALLELISM_LEVELS};
use crate::error::PlotError;

/// How the benchmark producing the timings was executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExecutionMode {
    /// Single-threaded run, one series.
    Sequential,
    /// OpenMP run, one series per thread count.
    SharedMemory,
    /// MPI run, one series per process count.
    Distributed,
}

impl ExecutionMode {
    /// All modes in selector order.
    pub const ALL: [Self; 3] = [Self::Sequential, Self::SharedMemory, Self::Distributed];

    /// Prompt selector (1, 2, or 3).
    #[must_use]
    pub fn selector(self) -> u32 {
        match self {
            Self::Sequential => 1,
            Self::SharedMemory => 2,
            Self::Distributed => 3,
        }
    }

    /// Short name used in chart titles.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sequential => "Sequential",
            Self::SharedMemory => "OMP",
            Self::Distributed => "MPI",
        }
    }

    #[must_use]
    pub fn is_parallel(self) -> bool {
        !matches!(self, Self::Sequential)
    }

    /// Number of parallelism groups in the experiment design.
    #[must_use]
    pub fn group_count(self) -> usize {
        if self.is_parallel() {
            PARALLELISM_LEVELS.len()
        } else {
            1
        }
    }

    /// Number of chunk averages a complete run produces.
    #[must_use]
    pub fn expected_chunks(self) -> usize {
        self.group_count() * GROUP_SIZE
    }

    /// Prefix of per-level series labels, `None` for sequential runs.
    #[must_use]
    pub fn label_prefix(self) -> Option<&'static str> {
        match self {
            Self::Sequential => None,
            Self::SharedMemory => Some("# Threads : "),
            Self::Distributed => Some("# Processes : "),
        }
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ExecutionMode {
    type Error = PlotError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|m| m.selector() == value)
            .ok_or_else(|| PlotError::InvalidMode(value.to_string()))
    }
}

impl FromStr for ExecutionMode {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: u32 = s
            .parse()
            .map_err(|_| PlotError::InvalidMode(s.to_string()))?;
        Self::try_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_round_trip() {
        for mode in ExecutionMode::ALL {
            assert_eq!(ExecutionMode::try_from(mode.selector()).unwrap(), mode);
        }
    }

    #[test]
    fn expected_counts() {
        assert_eq!(ExecutionMode::Sequential.expected_chunks(), 9);
        assert_eq!(ExecutionMode::SharedMemory.expected_chunks(), 54);
        assert_eq!(ExecutionMode::Distributed.expected_chunks(), 54);
    }

    #[test]
    fn parses_prompt_text() {
        assert_eq!(" 2 \n".parse::<ExecutionMode>().unwrap(), ExecutionMode::SharedMemory);
        assert_eq!("3".parse::<ExecutionMode>().unwrap(), ExecutionMode::Distributed);
    }

    #[test]
    fn rejects_unknown_selector() {
        assert!(matches!(
            "5".parse::<ExecutionMode>(),
            Err(PlotError::InvalidMode(s)) if s == "5"
        ));
        assert!(matches!(
            "omp".parse::<ExecutionMode>(),
            Err(PlotError::InvalidMode(_))
        ));
        assert!(ExecutionMode::try_from(0).is_err());
    }

    #[test]
    fn label_prefixes() {
        assert_eq!(ExecutionMode::Sequential.label_prefix(), None);
        assert_eq!(ExecutionMode::SharedMemory.label_prefix(), Some("# Threads : "));
        assert_eq!(ExecutionMode::Distributed.label_prefix(), Some("# Processes : "));
    }
}
