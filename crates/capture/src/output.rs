// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Intercepted standard output that records every line written.

use crate::buffer::LineBuffer;
use std::io::{self, Write};

/// Recording replacement for the process standard output.
///
/// Writes without a trailing `\n` are held back and joined with later writes,
/// so `print!("Hello")` followed by `println!("World")` captures the single
/// line `HelloWorld`. When forwarding is enabled every write is also copied to
/// the real process stdout. `\r\n` terminators are captured as plain line
/// ends.
#[derive(Debug, Clone)]
pub struct InterceptedOutput {
    captured: LineBuffer,
    forward: bool,
}

impl InterceptedOutput {
    /// Create an interceptor; `forward` also echoes writes to the real stdout
    pub fn new(forward: bool) -> Self {
        Self {
            captured: LineBuffer::crlf_normalizing(),
            forward,
        }
    }

    /// Lines written so far
    pub fn captured_lines(&self) -> Vec<String> {
        self.captured.lines()
    }

    /// Whether writes are echoed to the real stdout
    pub fn forwards(&self) -> bool {
        self.forward
    }

    pub(crate) fn write(&self, buf: &[u8]) -> io::Result<usize> {
        self.captured.push_bytes(buf);
        if self.forward {
            io::stdout().lock().write_all(buf)?;
        }
        Ok(buf.len())
    }

    pub(crate) fn flush(&self) -> io::Result<()> {
        if self.forward {
            io::stdout().lock().flush()?;
        }
        Ok(())
    }
}

impl Default for InterceptedOutput {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
