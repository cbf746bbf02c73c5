//! Console harness around [`MinMaxHeap`]
//!
//! Reads line-oriented commands and drives a heap of string payloads:
//!
//! - `min` removes the smallest entry, `max` the largest; the removed payload
//!   is printed (an empty line when the heap was empty) followed by the heap;
//! - `p` starts a priority sub-loop: every following line that parses as an
//!   integer is inserted and the heap printed, the first line that does not
//!   ends the sub-loop;
//! - anything else is ignored.
//!
//! The session ends at end of input.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::{InvariantViolation, MinMaxHeap};

pub const MENU_PROMPT: &str = "Delete Min (min), Delete Max (max), or Add Priority (p)";
pub const PRIORITY_PROMPT: &str = "Enter priority: ";

/// One line of console input, interpreted at the top level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Min,
    Max,
    Priorities,
    Unknown,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        match line.trim() {
            "min" => Command::Min,
            "max" => Command::Max,
            "p" => Command::Priorities,
            _ => Command::Unknown,
        }
    }
}

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("heap invariant broken: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// Knobs for a [`Session`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Print the menu and priority prompts
    pub prompts: bool,
    /// Print the heap after every mutation
    pub dump: bool,
    /// Verify the heap after every mutation and abort on the first violation
    pub check: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            prompts: true,
            dump: true,
            check: false,
        }
    }
}

/// A console session owning its heap
pub struct Session<R, W> {
    input: R,
    output: W,
    heap: MinMaxHeap<String>,
    options: SessionOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, options: SessionOptions) -> Self {
        Self {
            input,
            output,
            heap: MinMaxHeap::new(),
            options,
        }
    }

    pub fn heap(&self) -> &MinMaxHeap<String> {
        &self.heap
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs commands until the input is exhausted.
    pub fn run(&mut self) -> Result<(), ReplError> {
        loop {
            self.prompt(MENU_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            match Command::parse(&line) {
                Command::Min => {
                    let removed = self.heap.remove_min();
                    self.report(removed)?;
                }
                Command::Max => {
                    let removed = self.heap.remove_max();
                    self.report(removed)?;
                }
                Command::Priorities => self.read_priorities()?,
                Command::Unknown => {}
            }
        }
    }

    fn read_priorities(&mut self) -> Result<(), ReplError> {
        loop {
            self.prompt(PRIORITY_PROMPT)?;
            let Some(line) = self.read_line()? else {
                return Ok(());
            };
            let Ok(priority) = line.trim().parse::<i32>() else {
                return Ok(());
            };

            self.heap.insert(String::new(), priority);
            writeln!(self.output)?;
            self.after_mutation()?;
        }
    }

    fn report(&mut self, removed: Option<(i32, String)>) -> Result<(), ReplError> {
        let payload = removed.map(|(_, item)| item).unwrap_or_default();
        writeln!(self.output, "{}", payload)?;
        writeln!(self.output)?;
        self.after_mutation()
    }

    fn after_mutation(&mut self) -> Result<(), ReplError> {
        if self.options.check {
            self.heap.check_invariants()?;
        }
        if self.options.dump {
            self.heap.dump(&mut self.output)?;
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        if self.options.prompts {
            writeln!(self.output, "{}", text)?;
        }
        Ok(())
    }
}
