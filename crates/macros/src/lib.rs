// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test attributes for stdio-capture.
//!
//! - [`macro@stdio_test`] - a test with simulated stdin and/or intercepted stdout
//! - [`macro@reads_stdio`] / [`macro@writes_stdio`] - join the stdio lock group
//!   without substituting anything
//!
//! Use these through the `stdio_capture` re-exports; the generated code
//! refers to `::stdio_capture`.

use proc_macro::TokenStream;

mod marker;
mod parse;

/// Turn a function into a test that runs with substituted stdio.
///
/// Replaces `#[test]`. The function may take up to two parameters,
/// `SimulatedInput` and/or `InterceptedOutput`, in either order.
///
/// ## Options
///
/// - `"line", ...` or `input = ["line", ...]` - simulate stdin with these
///   lines. `input = []` simulates an empty stdin. Without either, stdin is
///   left alone and a `SimulatedInput` parameter is a configuration error.
/// - `capture_output` - intercept stdout even without an `InterceptedOutput`
///   parameter
/// - `forward_output` / `forward_output = false` - echo intercepted output to
///   the real stdout (default from `STDIO_CAPTURE_FORWARD`)
///
/// ## Examples
///
/// ```ignore
/// #[stdio_test("Hello")]
/// fn echoes(input: SimulatedInput, output: InterceptedOutput) {
///     echo_one_line();
///     assert_eq!(input.captured_lines(), vec!["Hello"]);
///     assert_eq!(output.captured_lines(), vec!["Hello"]);
/// }
/// ```
#[proc_macro_attribute]
pub fn stdio_test(attr: TokenStream, item: TokenStream) -> TokenStream {
    stdio_test::stdio_test_impl(attr.into(), item.into()).into()
}

/// Hold the stdio lock for the whole function, declaring read access.
///
/// For tests that inspect the global handles without substituting them.
#[proc_macro_attribute]
pub fn reads_stdio(attr: TokenStream, item: TokenStream) -> TokenStream {
    marker::marker_impl(attr.into(), item.into(), marker::Marker::Reads).into()
}

/// Hold the stdio lock for the whole function, declaring write access.
///
/// For tests whose code writes to or replaces the global handles on its own.
#[proc_macro_attribute]
pub fn writes_stdio(attr: TokenStream, item: TokenStream) -> TokenStream {
    marker::marker_impl(attr.into(), item.into(), marker::Marker::Writes).into()
}
