/// Defines the tolerance below which the gap is considered closed
pub const GAP_TOLERANCE: f64 = 1e-6;

/// Defines the directory where the output files (history, figures) are saved
pub const DEFAULT_OUT_DIR: &str = "/tmp/gapsim/results";

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/gapsim/test";
