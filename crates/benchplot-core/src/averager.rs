//! Chunk averaging.
//!
//! The input is a flat list of timings. Every benchmark run prints two
//! values, the symmetry check first and the transpose second, so a chunk of
//! `chunk_size` samples holds `chunk_size / 2` runs with the two series
//! interleaved.

use serde::Serialize;

use crate::constants::DEFAULT_CHUNK_SIZE;
use crate::error::PlotError;

/// Mean of the two interleaved series of one chunk.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChunkAverage {
    /// Mean of the samples at 0-based even positions (1st, 3rd, 5th, ...).
    pub odd: f64,
    /// Mean of the samples at 0-based odd positions (2nd, 4th, 6th, ...).
    pub even: f64,
}

impl ChunkAverage {
    /// Average symmetry-check time.
    #[must_use]
    pub fn checksym(&self) -> f64 {
        self.odd
    }

    /// Average transpose time.
    #[must_use]
    pub fn transpose(&self) -> f64 {
        self.even
    }
}

/// Splits samples into fixed-size chunks and averages each interleaved series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkAverager {
    chunk_size: usize,
}

impl Default for ChunkAverager {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl ChunkAverager {
    /// Create an averager. The chunk size must be positive and even.
    pub fn new(chunk_size: usize) -> Result<Self, PlotError> {
        if chunk_size == 0 {
            return Err(PlotError::Config("chunk size must be positive".into()));
        }
        if chunk_size % 2 != 0 {
            return Err(PlotError::Config(format!(
                "chunk size must be even, got {chunk_size}"
            )));
        }
        Ok(Self { chunk_size })
    }

    /// Samples per chunk.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Benchmark runs represented by one chunk.
    #[must_use]
    pub fn trials_per_chunk(&self) -> usize {
        self.chunk_size / 2
    }

    /// Average every complete chunk, in input order.
    ///
    /// Samples past the last complete chunk are dropped.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self, samples: &[f64]) -> Vec<ChunkAverage> {
        let remainder = samples.len() % self.chunk_size;
        if remainder != 0 {
            tracing::debug!(
                discarded = remainder,
                chunk_size = self.chunk_size,
                "dropping trailing partial chunk"
            );
        }

        let half = self.trials_per_chunk() as f64;
        samples
            .chunks_exact(self.chunk_size)
            .map(|chunk| {
                let (odd_sum, even_sum) = chunk
                    .chunks_exact(2)
                    .fold((0.0, 0.0), |(o, e), pair| (o + pair[0], e + pair[1]));
                ChunkAverage {
                    odd: odd_sum / half,
                    even: even_sum / half,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_chunk() {
        assert!(matches!(ChunkAverager::new(0), Err(PlotError::Config(_))));
    }

    #[test]
    fn rejects_odd_chunk() {
        assert!(matches!(ChunkAverager::new(7), Err(PlotError::Config(_))));
    }

    #[test]
    fn default_is_two_hundred() {
        let averager = ChunkAverager::default();
        assert_eq!(averager.chunk_size(), 200);
        assert_eq!(averager.trials_per_chunk(), 100);
    }

    #[test]
    fn splits_interleaved_series() {
        let averager = ChunkAverager::new(4).unwrap();
        let out = averager.average(&[1.0, 10.0, 3.0, 20.0]);
        assert_eq!(
            out,
            vec![ChunkAverage {
                odd: 2.0,
                even: 15.0
            }]
        );
        assert!((out[0].checksym() - 2.0).abs() < f64::EPSILON);
        assert!((out[0].transpose() - 15.0).abs() < f64::EPSILON);
    }

    #[test]
    fn preserves_chunk_order() {
        let averager = ChunkAverager::new(2).unwrap();
        let out = averager.average(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let odds: Vec<f64> = out.iter().map(|c| c.odd).collect();
        assert_eq!(odds, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn drops_trailing_partial_chunk() {
        let averager = ChunkAverager::new(4).unwrap();
        let out = averager.average(&[1.0, 1.0, 1.0, 1.0, 99.0, 99.0]);
        assert_eq!(out.len(), 1);
        assert!((out[0].odd - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn short_input_yields_nothing() {
        let averager = ChunkAverager::default();
        assert!(averager.average(&[1.0; 199]).is_empty());
        assert!(averager.average(&[]).is_empty());
    }
}
