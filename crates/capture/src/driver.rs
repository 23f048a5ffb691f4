// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test driver: decides what to substitute, injects capture handles, restores.

use crate::env;
use crate::error::ConfigError;
use crate::handle::{substitute_input, substitute_output};
use crate::input::SimulatedInput;
use crate::lock::{self, Access};
use crate::output::InterceptedOutput;

/// Captures a test body's parameters ask for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParamRequest {
    pub input: bool,
    pub output: bool,
}

/// Valid combinations of input script and requested parameters.
///
/// The only invalid combination, an input parameter without a script, is
/// reported as [`ConfigError::InputWithoutScript`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Configuration {
    /// No script, no parameters
    NoConfig,
    /// Script installed, consumption not inspected
    ScriptOnly,
    /// Script installed and injected as `SimulatedInput`
    ScriptWithInput,
    /// Only stdout intercepted
    OutputOnly,
    /// Script installed, stdout intercepted
    ScriptWithOutput,
    /// Script installed and injected, stdout intercepted
    ScriptWithInputAndOutput,
}

impl Configuration {
    /// Resolve the state for a script presence and parameter request
    pub fn resolve(script: bool, request: ParamRequest) -> Result<Self, ConfigError> {
        match (script, request.input, request.output) {
            (false, false, false) => Ok(Configuration::NoConfig),
            (false, false, true) => Ok(Configuration::OutputOnly),
            (false, true, _) => Err(ConfigError::InputWithoutScript),
            (true, false, false) => Ok(Configuration::ScriptOnly),
            (true, true, false) => Ok(Configuration::ScriptWithInput),
            (true, false, true) => Ok(Configuration::ScriptWithOutput),
            (true, true, true) => Ok(Configuration::ScriptWithInputAndOutput),
        }
    }

    /// Whether stdin is substituted
    pub fn simulates_input(self) -> bool {
        !matches!(self, Configuration::NoConfig | Configuration::OutputOnly)
    }

    /// Whether stdout is intercepted
    pub fn intercepts_output(self) -> bool {
        matches!(
            self,
            Configuration::OutputOnly
                | Configuration::ScriptWithOutput
                | Configuration::ScriptWithInputAndOutput
        )
    }
}

/// Handles installed for one test run
#[derive(Debug, Default)]
pub struct Installed {
    pub input: Option<SimulatedInput>,
    pub output: Option<InterceptedOutput>,
}

impl Installed {
    fn input(&self) -> Result<SimulatedInput, ConfigError> {
        self.input.clone().ok_or(ConfigError::Unresolvable {
            parameter: "SimulatedInput",
        })
    }

    fn output(&self) -> Result<InterceptedOutput, ConfigError> {
        self.output.clone().ok_or(ConfigError::Unresolvable {
            parameter: "InterceptedOutput",
        })
    }
}

/// A parameter list a stdio test body can take.
///
/// Implemented for `()`, the two capture handles, and tuples of them.
pub trait StdIoParams: Sized {
    /// Which captures this parameter list asks for
    const REQUEST: ParamRequest;

    /// Build the parameters from the installed handles
    fn resolve(installed: &Installed) -> Result<Self, ConfigError>;
}

impl StdIoParams for () {
    const REQUEST: ParamRequest = ParamRequest {
        input: false,
        output: false,
    };

    fn resolve(_: &Installed) -> Result<Self, ConfigError> {
        Ok(())
    }
}

impl StdIoParams for SimulatedInput {
    const REQUEST: ParamRequest = ParamRequest {
        input: true,
        output: false,
    };

    fn resolve(installed: &Installed) -> Result<Self, ConfigError> {
        installed.input()
    }
}

impl StdIoParams for InterceptedOutput {
    const REQUEST: ParamRequest = ParamRequest {
        input: false,
        output: true,
    };

    fn resolve(installed: &Installed) -> Result<Self, ConfigError> {
        installed.output()
    }
}

impl<A: StdIoParams> StdIoParams for (A,) {
    const REQUEST: ParamRequest = A::REQUEST;

    fn resolve(installed: &Installed) -> Result<Self, ConfigError> {
        Ok((A::resolve(installed)?,))
    }
}

impl StdIoParams for (SimulatedInput, InterceptedOutput) {
    const REQUEST: ParamRequest = ParamRequest {
        input: true,
        output: true,
    };

    fn resolve(installed: &Installed) -> Result<Self, ConfigError> {
        Ok((installed.input()?, installed.output()?))
    }
}

impl StdIoParams for (InterceptedOutput, SimulatedInput) {
    const REQUEST: ParamRequest = ParamRequest {
        input: true,
        output: true,
    };

    fn resolve(installed: &Installed) -> Result<Self, ConfigError> {
        Ok((installed.output()?, installed.input()?))
    }
}

/// Per-test stdio configuration.
///
/// An absent script leaves stdin alone; an empty script substitutes a stdin
/// that is immediately at end of input.
#[derive(Clone, Debug)]
pub struct StdIoConfig {
    input: Option<Vec<String>>,
    capture_output: bool,
    forward_output: bool,
}

impl Default for StdIoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StdIoConfig {
    /// No script, no output capture, forwarding from `STDIO_CAPTURE_FORWARD`
    pub fn new() -> Self {
        Self {
            input: None,
            capture_output: false,
            forward_output: env::forward_output().unwrap_or(false),
        }
    }

    /// Simulate stdin with these lines
    pub fn input<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    /// Intercept stdout even when no `InterceptedOutput` parameter is taken
    pub fn capture_output(mut self) -> Self {
        self.capture_output = true;
        self
    }

    /// Also echo intercepted output to the real stdout
    pub fn forward_output(mut self, forward: bool) -> Self {
        self.forward_output = forward;
        self
    }

    /// Configured input script, if any
    pub fn script(&self) -> Option<&[String]> {
        self.input.as_deref()
    }

    /// Resolve the configuration state for parameter list `P`.
    ///
    /// `capture_output` counts as an output request, so the state reflects
    /// what [`StdIoConfig::run`] installs.
    pub fn validate<P: StdIoParams>(&self) -> Result<Configuration, ConfigError> {
        let request = ParamRequest {
            output: P::REQUEST.output || self.capture_output,
            ..P::REQUEST
        };
        Configuration::resolve(self.input.is_some(), request)
    }

    /// Run `body` with stdio substituted as configured.
    ///
    /// The configuration is validated first; an invalid one returns the error
    /// without running the body or touching any handle. Otherwise the stdio
    /// lock is held for the whole run and both handles are restored before
    /// it is released, including when `body` panics.
    pub fn run<P, F, R>(self, body: F) -> Result<R, ConfigError>
    where
        P: StdIoParams,
        F: FnOnce(P) -> R,
    {
        let configuration = self.validate::<P>()?;
        log::debug!("stdio configuration resolved: {:?}", configuration);

        let _lock = lock::acquire(Access::Write);

        let installed = Installed {
            input: self.input.map(SimulatedInput::new),
            output: configuration
                .intercepts_output()
                .then(|| InterceptedOutput::new(self.forward_output)),
        };
        let _input_guard = installed.input.clone().map(substitute_input);
        let _output_guard = installed.output.clone().map(substitute_output);

        let params = P::resolve(&installed)?;
        Ok(body(params))
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
