// Constants for the pass-by demo

/// Name the driver reports for its cell
pub const VARIABLE_NAME: &str = "count";

/// Starting value of the cell
pub const INITIAL_VALUE: i32 = 10;

/// Text used for the string layout section
pub const SAMPLE_TEXT: &str = "hello, memory";

/// Byte range of [`SAMPLE_TEXT`] borrowed as a `&str` slice
pub const SAMPLE_SLICE: std::ops::Range<usize> = 7..13;
