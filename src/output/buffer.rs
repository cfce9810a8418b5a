//! In-memory output
//!
//! `LineBuffer` records every line as plain text, without colors.

use std::io;

use super::line::{TreeLine, TreeOutput};

/// Plain-text sink that keeps each emitted line.
#[derive(Debug, Default, Clone)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined with `\n`, with a trailing newline when non-empty.
    pub fn contents(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

impl TreeOutput for LineBuffer {
    fn line(&mut self, line: &TreeLine) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }
}
