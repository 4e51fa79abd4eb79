//! Experiment design constants and exit codes.

/// Samples per chunk: 100 benchmark runs, each emitting two timings.
pub const DEFAULT_CHUNK_SIZE: usize = 200;

/// Matrix dimensions benchmarked, one chunk each, in file order.
pub const MATRIX_SIZES: [u32; 9] = [16, 32, 64, 128, 256, 512, 1024, 2048, 4096];

/// Thread or process counts used by the parallel runs, one group each, in file order.
pub const PARALLELISM_LEVELS: [u32; 6] = [1, 2, 4, 8, 16, 32];

/// Chunks in one group (one per matrix size).
pub const GROUP_SIZE: usize = MATRIX_SIZES.len();

/// X-axis title shared by every chart.
pub const X_AXIS_TITLE: &str = "Matrix Size (n)";

/// Y-axis title shared by every chart.
pub const Y_AXIS_TITLE: &str = "Elaboration Time (s)";

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, parse, rendering).
    pub const ERROR_GENERIC: i32 = 1;
    /// Invalid configuration (chunk size or mode selector).
    pub const ERROR_CONFIG: i32 = 4;
}
