//! Recorded program output
//!
//! The driver and the mutators write into a [`Terminal`] instead of stdout.
//! The recorded lines are inspected directly in tests and written out once,
//! styled or plain, by [`Terminal::flush_stdout`].

use crate::errors::OutputError;
use crate::memory::{format_address, Address};
use crate::theme::DEFAULT_THEME;
use crossterm::{
    queue,
    style::{Print, PrintStyledContent, Stylize},
    tty::IsTty,
};
use std::fmt::Display;
use std::io::{self, Write};

/// A line of output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalLine {
    Blank,
    Heading(String),
    Field { label: String, value: String },
    Address { label: String, address: Address },
    Raw(String),
}

impl TerminalLine {
    /// Plain text of the line
    pub fn text(&self) -> String {
        match self {
            TerminalLine::Blank => String::new(),
            TerminalLine::Heading(text) | TerminalLine::Raw(text) => text.clone(),
            TerminalLine::Field { label, value } => format!("{}: {}", label, value),
            TerminalLine::Address { label, address } => {
                format!("{}: {}", label, format_address(*address))
            }
        }
    }
}

/// Buffer of output lines
#[derive(Debug, Clone, Default)]
pub struct Terminal {
    lines: Vec<TerminalLine>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal { lines: Vec::new() }
    }

    /// Start a section; sections after the first are separated by a blank line
    pub fn heading(&mut self, text: impl Into<String>) {
        if !self.lines.is_empty() {
            self.lines.push(TerminalLine::Blank);
        }
        self.lines.push(TerminalLine::Heading(text.into()));
    }

    pub fn field(&mut self, label: impl Into<String>, value: impl Display) {
        self.lines.push(TerminalLine::Field {
            label: label.into(),
            value: value.to_string(),
        });
    }

    pub fn address(&mut self, label: impl Into<String>, address: Address) {
        self.lines.push(TerminalLine::Address {
            label: label.into(),
            address,
        });
    }

    pub fn raw(&mut self, text: impl Into<String>) {
        self.lines.push(TerminalLine::Raw(text.into()));
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    /// Get all lines as plain strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(TerminalLine::text).collect()
    }

    /// First address recorded under a label starting with `prefix`
    pub fn find_address(&self, prefix: &str) -> Option<Address> {
        self.lines.iter().find_map(|line| match line {
            TerminalLine::Address { label, address } if label.starts_with(prefix) => {
                Some(*address)
            }
            _ => None,
        })
    }

    /// Values of every field whose label starts with `prefix`, in order
    pub fn find_values(&self, prefix: &str) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                TerminalLine::Field { label, value } if label.starts_with(prefix) => {
                    Some(value.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Write all lines to `writer`, with colours when `styled` is set
    pub fn write_to<W: Write>(&self, writer: &mut W, styled: bool) -> Result<(), OutputError> {
        for line in &self.lines {
            if styled {
                write_styled(writer, line)?;
            } else {
                queue!(writer, Print(line.text()))?;
            }
            queue!(writer, Print("\n"))?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write all lines to stdout, styled only when stdout is a terminal
    pub fn flush_stdout(&self) -> Result<(), OutputError> {
        let mut stdout = io::stdout();
        let styled = stdout.is_tty();
        self.write_to(&mut stdout, styled)
    }
}

fn write_styled<W: Write>(writer: &mut W, line: &TerminalLine) -> io::Result<()> {
    match line {
        TerminalLine::Blank => Ok(()),
        TerminalLine::Heading(text) => queue!(
            writer,
            PrintStyledContent(text.as_str().with(DEFAULT_THEME.primary).bold())
        ),
        TerminalLine::Field { label, value } => queue!(
            writer,
            Print(format!("{}: ", label)),
            PrintStyledContent(value.as_str().with(DEFAULT_THEME.number))
        ),
        TerminalLine::Address { label, address } => queue!(
            writer,
            Print(format!("{}: ", label)),
            PrintStyledContent(format_address(*address).with(DEFAULT_THEME.secondary))
        ),
        TerminalLine::Raw(text) => queue!(
            writer,
            PrintStyledContent(text.as_str().with(DEFAULT_THEME.comment))
        ),
    }
}
