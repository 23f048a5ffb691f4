// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors reported before a test body runs.

use thiserror::Error;

/// A test's stdio configuration cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A `SimulatedInput` parameter was requested without an input script
    #[error(
        "stdio configuration error: a SimulatedInput parameter needs input lines, \
         e.g. #[stdio_test(input = [\"...\"])]; an empty list simulates empty stdin"
    )]
    InputWithoutScript,

    /// A parameter asked for a handle the driver did not install
    #[error("stdio configuration error: no {parameter} was installed for this test")]
    Unresolvable { parameter: &'static str },
}
