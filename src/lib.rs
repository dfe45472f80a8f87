//! # Introduction
//!
//! passby shows the difference between passing an integer by mutable
//! reference and passing it by value. A driver owns one `i32` cell, hands it
//! to two increment functions, and reports the cell's address and value
//! after each call.
//!
//! ## Execution pipeline
//!
//! ```text
//! Driver → Mutators → Terminal (recorded lines) → stdout
//!        ↘ Report (checkpoints) → summary table
//! ```
//!
//! 1. [`driver`] — owns the cell and runs the fixed sequence.
//! 2. [`mutator`] — `increment_value(&mut i32)` and `increment_value_no_ptr(i32)`.
//! 3. [`terminal`] — buffered output lines, flushed to stdout with
//!    [crossterm](https://docs.rs/crossterm) styling when stdout is a TTY.
//! 4. [`report`] — checkpoint history and address identity checks.
//! 5. [`memory`] — address capture and the layout of primitive and string
//!    values.
//!
//! Tables are drawn with [ratatui](https://docs.rs/ratatui) widgets into an
//! off-screen buffer and printed as plain text.

pub mod constants;
pub mod driver;
pub mod errors;
pub mod memory;
pub mod mutator;
mod render;
pub mod report;
pub mod terminal;
pub mod theme;
