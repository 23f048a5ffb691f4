// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated stdin and captured stdout for tests.
//!
//! Code under test reads through [`stdin()`] and writes through [`stdout()`]
//! or this crate's [`print!`]/[`println!`]. Outside a stdio test these behave
//! like their `std::io` counterparts. Inside one they are substituted:
//!
//! ```ignore
//! use stdio_capture::{stdio_test, InterceptedOutput, SimulatedInput};
//!
//! #[stdio_test(input = ["Ada", "Grace"])]
//! fn greets_everyone(input: SimulatedInput, output: InterceptedOutput) {
//!     greet_all();
//!     assert_eq!(input.captured_lines(), vec!["Ada", "Grace"]);
//!     assert_eq!(output.captured_lines(), vec!["Hello, Ada", "Hello, Grace"]);
//! }
//! ```
//!
//! Every stdio test runs inside one process-wide mutual-exclusion group (see
//! [`lock`]). Tests that touch the handles without substituting them join the
//! group with `#[reads_stdio]` or `#[writes_stdio]`.

extern crate self as stdio_capture;

mod buffer;
mod driver;
mod error;
mod input;
mod output;

pub mod env;
pub mod handle;
pub mod lock;

pub use buffer::LineBuffer;
pub use driver::{Configuration, Installed, ParamRequest, StdIoConfig, StdIoParams};
pub use error::ConfigError;
pub use handle::{stdin, stdout, Lines, Stdin, Stdout};
pub use input::SimulatedInput;
pub use lock::{Access, StdIoLock};
pub use output::InterceptedOutput;
pub use stdio_capture_macros::{reads_stdio, stdio_test, writes_stdio};
