//! Constants shared across the crate.

/// Default field delimiter of a table file.
pub const DEFAULT_DELIMITER:     char = ',';

/// Rényi orders grown by the command line driver.
pub const DEFAULT_ALPHAS:   [f64; 6] = [0.0, 0.5, 1.0, 2.0, 99.0, f64::INFINITY];

/// Column width of the console reports.
pub const PRINT_WIDTH:          usize = 8;
/// Width of the report headers.
pub const FULL_WIDTH:           usize = 60;
