//! Output mode and writer.

use std::io::{self, Write};

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also explain why each missing dependency was rejected.
    Verbose,
    /// Standard report.
    #[default]
    Normal,
}

impl OutputMode {
    /// Check if this mode shows why a probe failed.
    pub fn shows_reasons(&self) -> bool {
        matches!(self, Self::Verbose)
    }
}

/// Line writer for report output.
#[derive(Debug)]
pub struct Output<W: Write> {
    mode: OutputMode,
    writer: W,
}

impl Output<io::Stdout> {
    /// Create a writer on standard output.
    pub fn stdout(mode: OutputMode) -> Self {
        Self::new(mode, io::stdout())
    }
}

impl<W: Write> Output<W> {
    /// Create a writer over any sink.
    pub fn new(mode: OutputMode, writer: W) -> Self {
        Self { mode, writer }
    }

    /// Get the output mode.
    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Write a single line.
    pub fn println(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", msg)
    }

    /// Write every line, then flush.
    pub fn write_lines<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.println(line.as_ref())?;
        }
        self.writer.flush()
    }

    /// Consume the output and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
