//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each line to stdout
//! as soon as the renderer produces it.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::config::OutputConfig;
use super::line::{Node, TreeLine, TreeOutput};
use crate::size::format_size;

/// Stdout formatter. With color disabled the bytes written are exactly the
/// plain `TreeLine` text.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
        }
    }

    fn write_colored(&mut self, text: &str, spec: &ColorSpec) -> io::Result<()> {
        self.stdout.set_color(spec)?;
        write!(self.stdout, "{}", text)?;
        self.stdout.reset()
    }

    fn write_size(&mut self, bytes: u64) -> io::Result<()> {
        self.write_colored(
            &format_size(bytes),
            ColorSpec::new().set_fg(Some(Color::Green)),
        )
    }

    fn write_node(&mut self, node: &Node) -> io::Result<()> {
        let dir = ColorSpec::new()
            .set_fg(Some(Color::Blue))
            .set_bold(true)
            .clone();

        match node {
            Node::Dir { name, size } => {
                self.write_colored(&format!("[{}]", name), &dir)?;
                write!(self.stdout, " (dir) - ")?;
                self.write_size(*size)
            }
            Node::Subdir { name, size } => {
                self.write_colored(&format!("[{}]", name), &dir)?;
                write!(self.stdout, " - ")?;
                self.write_size(*size)
            }
            Node::File { name, size } => {
                write!(self.stdout, "{} - ", name)?;
                self.write_size(*size)
            }
            Node::LargeFile { name, size } => {
                write!(self.stdout, "→ {} - ", name)?;
                self.write_size(*size)
            }
            Node::Inaccessible { name } => {
                write!(self.stdout, "{} ", name)?;
                self.write_colored(
                    "[error al acceder]",
                    ColorSpec::new().set_fg(Some(Color::Red)),
                )
            }
            Node::PathComponent { .. } | Node::RootGroup => {
                self.write_colored(&node.to_string(), &dir)
            }
        }
    }
}

impl TreeOutput for StreamingFormatter {
    fn line(&mut self, line: &TreeLine) -> io::Result<()> {
        write!(self.stdout, "{}", line.prefix())?;
        self.write_node(&line.node)?;
        writeln!(self.stdout)
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.stdout, "{}", text)
    }
}
