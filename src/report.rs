//! Checkpoints recorded by the driver

use crate::memory::{format_address, Address};
use crate::render::render_table;
use rustc_hash::FxHashSet;

/// Identity and value of the driver's cell at one point of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pub label: &'static str,
    pub address: Address,
    pub value: i32,
}

/// All checkpoints of one run, in order
#[derive(Debug, Clone)]
pub struct Report {
    variable_name: &'static str,
    checkpoints: Vec<Checkpoint>,
}

impl Report {
    pub fn new(variable_name: &'static str) -> Self {
        Report {
            variable_name,
            checkpoints: Vec::new(),
        }
    }

    pub fn push(&mut self, checkpoint: Checkpoint) {
        self.checkpoints.push(checkpoint);
    }

    pub fn variable_name(&self) -> &'static str {
        self.variable_name
    }

    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    pub fn initial(&self) -> Option<&Checkpoint> {
        self.checkpoints.first()
    }

    pub fn final_value(&self) -> Option<i32> {
        self.checkpoints.last().map(|c| c.value)
    }

    /// True when every checkpoint saw the cell at the same address
    pub fn address_stable(&self) -> bool {
        let addresses: FxHashSet<Address> = self.checkpoints.iter().map(|c| c.address).collect();
        addresses.len() == 1
    }

    /// Render the checkpoints as a table
    pub fn render_summary(&self) -> Vec<String> {
        let rows: Vec<Vec<String>> = self
            .checkpoints
            .iter()
            .map(|c| {
                vec![
                    c.label.to_string(),
                    format_address(c.address),
                    c.value.to_string(),
                ]
            })
            .collect();

        render_table(
            &format!(" {} ", self.variable_name),
            &["Checkpoint", "Address", "Value"],
            &rows,
        )
    }
}
