//! Demo driver
//!
//! Owns one `i32` cell, passes it to [`increment_value`] by reference and to
//! [`increment_value_no_ptr`] by value, and records the cell's address and
//! value after each step:
//!
//! ```text
//! Initial state                                        value v
//! After increment_value (pointer version)              value v + 1
//! After increment_value_no_ptr (no pointer version)    value v + 1
//! ```
//!
//! The address is the same at every checkpoint.

use crate::constants::{INITIAL_VALUE, VARIABLE_NAME};
use crate::memory::address_of;
use crate::mutator::{increment_value, increment_value_no_ptr};
use crate::report::{Checkpoint, Report};
use crate::terminal::Terminal;

pub const INITIAL_CHECKPOINT: &str = "Initial state";
pub const AFTER_REFERENCE_CHECKPOINT: &str = "After increment_value (pointer version)";
pub const AFTER_COPY_CHECKPOINT: &str = "After increment_value_no_ptr (no pointer version)";

/// Settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoConfig {
    pub variable_name: &'static str,
    pub initial_value: i32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            variable_name: VARIABLE_NAME,
            initial_value: INITIAL_VALUE,
        }
    }
}

pub struct Driver {
    config: DemoConfig,
    terminal: Terminal,
}

impl Driver {
    pub fn new(config: DemoConfig) -> Self {
        Driver {
            config,
            terminal: Terminal::new(),
        }
    }

    /// Run the sequence once and return its checkpoints
    pub fn run(&mut self) -> Report {
        let name = self.config.variable_name;
        let mut report = Report::new(name);

        let mut cell = self.config.initial_value;

        self.terminal.heading(format!("{}:", INITIAL_CHECKPOINT));
        self.terminal.field("Variable name", name);
        self.record(&mut report, INITIAL_CHECKPOINT, &cell, "");

        increment_value(&mut cell, &mut self.terminal);

        self.terminal
            .heading(format!("{}:", AFTER_REFERENCE_CHECKPOINT));
        self.record(
            &mut report,
            AFTER_REFERENCE_CHECKPOINT,
            &cell,
            " (after increment_value)",
        );

        increment_value_no_ptr(cell, &mut self.terminal);

        self.terminal.heading(format!("{}:", AFTER_COPY_CHECKPOINT));
        self.record(
            &mut report,
            AFTER_COPY_CHECKPOINT,
            &cell,
            " (after increment_value_no_ptr)",
        );

        report
    }

    fn record(&mut self, report: &mut Report, label: &'static str, cell: &i32, suffix: &str) {
        let name = self.config.variable_name;
        let checkpoint = Checkpoint {
            label,
            address: address_of(cell),
            value: *cell,
        };

        self.terminal.address(
            format!("Address of {} in memory{}", name, suffix),
            checkpoint.address,
        );
        self.terminal
            .field(format!("Value of {}{}", name, suffix), checkpoint.value);
        report.push(checkpoint);
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Output recorded so far
    pub fn terminal(&self) -> &Terminal {
        &self.terminal
    }

    pub fn into_terminal(self) -> Terminal {
        self.terminal
    }
}
