// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only line buffer shared between a capture handle and its stream.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct LineState {
    lines: Vec<String>,
    /// Bytes written since the last line terminator
    pending: Vec<u8>,
    /// Treat `\r\n` as the terminator
    strip_cr: bool,
}

/// Ordered, append-only sequence of captured text lines.
///
/// Bytes are fed in with [`LineBuffer::push_bytes`]; each `\n` closes the
/// current line. Text without a terminator is held back and merged with
/// whatever is written next. Lines are kept byte-for-byte unless the buffer
/// was built with [`LineBuffer::crlf_normalizing`]. Clones share the same
/// underlying storage.
#[derive(Debug, Default)]
pub struct LineBuffer {
    state: Arc<Mutex<LineState>>,
}

impl LineBuffer {
    /// Create an empty buffer that keeps every byte before `\n`
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer that also drops a `\r` before each `\n`
    pub fn crlf_normalizing() -> Self {
        Self {
            state: Arc::new(Mutex::new(LineState {
                strip_cr: true,
                ..LineState::default()
            })),
        }
    }

    /// Append raw bytes, closing a line at every `\n`
    pub fn push_bytes(&self, bytes: &[u8]) {
        let mut state = self.state.lock();
        let mut rest = bytes;
        while let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            state.pending.extend_from_slice(&rest[..pos]);
            let raw = std::mem::take(&mut state.pending);
            let line = decode_line(&raw, state.strip_cr);
            state.lines.push(line);
            rest = &rest[pos + 1..];
        }
        state.pending.extend_from_slice(rest);
    }

    /// Append a complete line, flushing any pending text into it first
    pub fn push_line(&self, line: &str) {
        let mut state = self.state.lock();
        let mut raw = std::mem::take(&mut state.pending);
        raw.extend_from_slice(line.as_bytes());
        let line = decode_line(&raw, state.strip_cr);
        state.lines.push(line);
    }

    /// Snapshot of the captured lines.
    ///
    /// Text still waiting for a terminator is reported as the last element.
    pub fn lines(&self) -> Vec<String> {
        let state = self.state.lock();
        let mut lines = state.lines.clone();
        if !state.pending.is_empty() {
            lines.push(decode_line(&state.pending, state.strip_cr));
        }
        lines
    }

    /// Snapshot of the last N captured lines
    pub fn last(&self, n: usize) -> Vec<String> {
        let all = self.lines();
        let skip = all.len().saturating_sub(n);
        all.into_iter().skip(skip).collect()
    }

    /// Whether unterminated text is waiting for a line terminator
    pub fn has_pending(&self) -> bool {
        !self.state.lock().pending.is_empty()
    }

    /// Number of lines a snapshot would contain
    pub fn len(&self) -> usize {
        let state = self.state.lock();
        state.lines.len() + usize::from(!state.pending.is_empty())
    }

    /// Check if nothing has been captured
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Clone for LineBuffer {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

fn decode_line(raw: &[u8], strip_cr: bool) -> String {
    let raw = if strip_cr {
        raw.strip_suffix(b"\r").unwrap_or(raw)
    } else {
        raw
    };
    String::from_utf8_lossy(raw).into_owned()
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
