//! Terminal status printer.
//!
//! Prints one line per reported segment:
//!
//! ```text
//! Spotify segment turned ON.
//! Aws -> ON.
//! Battery -> OFF.
//! ```
//!
//! With color enabled, `ON` is green and `OFF` is red.

use std::io::{IsTerminal, Write};

use colored::Colorize;
use promptline_core::SegmentType;

use crate::application::ports::StatusSink;

/// Upper-cases the first character of `name`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether ANSI colors should be used on stdout.
pub fn stdout_supports_color(no_color: bool) -> bool {
    !no_color && std::io::stdout().is_terminal()
}

/// [`StatusSink`] writing human-readable lines to `out`.
pub struct TerminalStatus<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalStatus<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn state(&self, enabled: bool) -> String {
        match (enabled, self.color) {
            (true, true) => "ON".green().to_string(),
            (false, true) => "OFF".red().to_string(),
            (true, false) => "ON".to_string(),
            (false, false) => "OFF".to_string(),
        }
    }
}

impl<W: Write> StatusSink for TerminalStatus<W> {
    fn segment_status(
        &mut self,
        segment_type: SegmentType,
        enabled: bool,
        message: &str,
    ) -> std::io::Result<()> {
        let state = self.state(enabled);
        writeln!(
            self.out,
            "{} {} {}.",
            capitalize(segment_type.as_str()),
            message,
            state
        )
    }

    fn detail(&mut self, name: &str, value: &str) -> std::io::Result<()> {
        let value = if value.is_empty() { "-" } else { value };
        writeln!(self.out, "  {name}: {value}")
    }
}
