// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! All environment variables read by stdio-capture are defined here.
//! Use these accessors instead of calling `std::env::var()` directly.

use std::time::Duration;

/// Default for forwarding intercepted output to the real stdout.
pub const STDIO_CAPTURE_FORWARD: &str = "STDIO_CAPTURE_FORWARD";

/// Milliseconds to wait on the stdio lock before logging a warning.
pub const STDIO_CAPTURE_LOCK_WARN_MS: &str = "STDIO_CAPTURE_LOCK_WARN_MS";

const DEFAULT_LOCK_WARN: Duration = Duration::from_millis(5000);

/// `STDIO_CAPTURE_FORWARD`: Echo intercepted output by default.
pub fn forward_output() -> Option<bool> {
    let value = std::env::var(STDIO_CAPTURE_FORWARD).ok()?;
    let parsed = parse_flag(&value);
    if parsed.is_none() {
        log::warn!("ignoring {}={:?}: expected a boolean", STDIO_CAPTURE_FORWARD, value);
    }
    parsed
}

/// `STDIO_CAPTURE_LOCK_WARN_MS`: Slow lock acquisition threshold. Default 5000.
pub fn lock_warn_after() -> Duration {
    var_u64(STDIO_CAPTURE_LOCK_WARN_MS)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_LOCK_WARN)
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn var_u64(name: &str) -> Option<u64> {
    let value = std::env::var(name).ok()?;
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(_) => {
            log::warn!("ignoring {}={:?}: expected milliseconds", name, value);
            None
        }
    }
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
