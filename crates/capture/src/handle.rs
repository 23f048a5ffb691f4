// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide stdin/stdout handles that tests can substitute.
//!
//! Code under test reads through [`stdin()`] and writes through [`stdout()`]
//! (or the crate's `print!`/`println!`). With nothing substituted these reach
//! the real process streams. While a substitution guard is alive they reach
//! the installed [`SimulatedInput`] or [`InterceptedOutput`] instead.

use crate::input::SimulatedInput;
use crate::output::InterceptedOutput;
use parking_lot::{const_mutex, Mutex};
use std::fmt;
use std::io::{self, Read, Write};

static INPUT: Mutex<Option<SimulatedInput>> = const_mutex(None);
static OUTPUT: Mutex<Option<InterceptedOutput>> = const_mutex(None);

/// Handle to the process standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdin {
    _priv: (),
}

/// Handle to the process standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Stdout {
    _priv: (),
}

/// Handle to the current standard input
pub fn stdin() -> Stdin {
    Stdin::default()
}

/// Handle to the current standard output
pub fn stdout() -> Stdout {
    Stdout::default()
}

impl Stdin {
    /// Whether reads currently go to a simulated script
    pub fn is_simulated(&self) -> bool {
        INPUT.lock().is_some()
    }

    /// Read one line, terminator included, appending it to `buf`.
    ///
    /// Returns 0 at end of input. Exactly one line is consumed from a
    /// simulated script.
    pub fn read_line(&self, buf: &mut String) -> io::Result<usize> {
        // release the slot before a possibly blocking read
        let installed = INPUT.lock().clone();
        match installed {
            Some(input) => input.read_line(buf),
            None => io::stdin().read_line(buf),
        }
    }

    /// Iterate over the remaining lines, terminators stripped
    pub fn lines(self) -> Lines {
        Lines { stdin: self }
    }
}

impl Read for Stdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let installed = INPUT.lock().clone();
        match installed {
            Some(input) => input.read(buf),
            None => io::stdin().read(buf),
        }
    }
}

/// Iterator over the lines of [`Stdin`]
#[derive(Debug)]
pub struct Lines {
    stdin: Stdin,
}

impl Iterator for Lines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        match self.stdin.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                if line.ends_with('\n') {
                    line.pop();
                    if line.ends_with('\r') {
                        line.pop();
                    }
                }
                Some(Ok(line))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl Stdout {
    /// Whether writes currently go to an interceptor
    pub fn is_intercepted(&self) -> bool {
        OUTPUT.lock().is_some()
    }
}

impl Write for Stdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let installed = OUTPUT.lock().clone();
        match installed {
            Some(output) => output.write(buf),
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let installed = OUTPUT.lock().clone();
        match installed {
            Some(output) => output.flush(),
            None => io::stdout().flush(),
        }
    }
}

/// Backend of the crate's `print!` and `println!`.
#[doc(hidden)]
#[allow(clippy::panic)]
pub fn _print(args: fmt::Arguments<'_>) {
    let installed = OUTPUT.lock().clone();
    match installed {
        Some(output) => {
            if let Err(e) = output.write(fmt::format(args).as_bytes()) {
                panic!("failed printing to stdout: {}", e);
            }
        }
        // std's print! keeps the test harness's output capture working
        None => std::print!("{}", args),
    }
}

/// Replaces a global handle until dropped, then puts back the previous value.
#[must_use = "the handle is restored as soon as the guard is dropped"]
pub(crate) struct Substitution<T: Clone + Send + 'static> {
    slot: &'static Mutex<Option<T>>,
    previous: Option<T>,
    name: &'static str,
}

impl<T: Clone + Send + 'static> Substitution<T> {
    fn install(slot: &'static Mutex<Option<T>>, value: T, name: &'static str) -> Self {
        let previous = slot.lock().replace(value);
        if previous.is_some() {
            log::debug!("{} substituted over an existing substitution", name);
        } else {
            log::debug!("{} substituted", name);
        }
        Self {
            slot,
            previous,
            name,
        }
    }
}

impl<T: Clone + Send + 'static> fmt::Debug for Substitution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Substitution")
            .field("handle", &self.name)
            .field("nested", &self.previous.is_some())
            .finish()
    }
}

impl<T: Clone + Send + 'static> Drop for Substitution<T> {
    fn drop(&mut self) {
        *self.slot.lock() = self.previous.take();
        log::debug!("{} restored", self.name);
    }
}

/// Route [`stdin()`] to `input` while the guard lives
pub(crate) fn substitute_input(input: SimulatedInput) -> Substitution<SimulatedInput> {
    Substitution::install(&INPUT, input, "stdin")
}

/// Route [`stdout()`] to `output` while the guard lives
pub(crate) fn substitute_output(output: InterceptedOutput) -> Substitution<InterceptedOutput> {
    Substitution::install(&OUTPUT, output, "stdout")
}

/// Print to the current [`stdout()`], substituted or not.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {
        $crate::handle::_print(::std::format_args!($($arg)*))
    };
}

/// Print a line to the current [`stdout()`], substituted or not.
#[macro_export]
macro_rules! println {
    () => {
        $crate::handle::_print(::std::format_args!("\n"))
    };
    ($($arg:tt)*) => {
        $crate::handle::_print(::std::format_args!("{}\n", ::std::format_args!($($arg)*)))
    };
}

#[cfg(test)]
#[path = "handle_tests.rs"]
mod tests;
