// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated standard input backed by a fixed script of lines.

use crate::buffer::LineBuffer;
use parking_lot::Mutex;
use std::io::{self, BufRead, Cursor, Read};
use std::sync::Arc;

/// Scripted replacement for the process standard input.
///
/// The script is presented to readers as `\n`-terminated lines. Every byte
/// handed out is recorded, so [`SimulatedInput::captured_lines`] reports what
/// was actually consumed. A buffering reader such as [`std::io::BufReader`]
/// pulls as much as its buffer holds, so lines it has not yet returned to the
/// caller still show up as captured.
///
/// Clones share the same script position and capture.
#[derive(Debug, Clone)]
pub struct SimulatedInput {
    source: Arc<Mutex<Cursor<Vec<u8>>>>,
    captured: LineBuffer,
}

impl SimulatedInput {
    /// Create a simulator yielding `lines` in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut script = Vec::new();
        for line in lines {
            script.extend_from_slice(line.as_ref().as_bytes());
            script.push(b'\n');
        }
        Self {
            source: Arc::new(Mutex::new(Cursor::new(script))),
            captured: LineBuffer::new(),
        }
    }

    /// Lines consumed from the script so far
    pub fn captured_lines(&self) -> Vec<String> {
        self.captured.lines()
    }

    /// Whether every scripted byte has been handed out
    pub fn is_exhausted(&self) -> bool {
        let source = self.source.lock();
        source.position() >= source.get_ref().len() as u64
    }

    /// Hand out up to `buf.len()` bytes of the script
    pub(crate) fn read(&self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.source.lock().read(buf)?;
        self.captured.push_bytes(&buf[..n]);
        Ok(n)
    }

    /// Consume exactly one line, terminator included
    pub(crate) fn read_line(&self, line: &mut String) -> io::Result<usize> {
        let mut raw = Vec::new();
        let n = self.source.lock().read_until(b'\n', &mut raw)?;
        self.captured.push_bytes(&raw);
        match std::str::from_utf8(&raw) {
            Ok(text) => line.push_str(text),
            Err(_) => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "stream did not contain valid UTF-8",
                ))
            }
        }
        Ok(n)
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
