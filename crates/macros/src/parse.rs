// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing of `#[stdio_test(...)]` options.

use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Error, Ident, LitBool, LitStr, Result, Token,
};

/// Parsed `#[stdio_test(...)]` options.
#[derive(Debug, Default)]
pub struct StdioArgs {
    /// Script lines; `None` leaves stdin alone
    pub input: Option<Vec<LitStr>>,
    pub capture_output: bool,
    /// `None` defers to the environment default
    pub forward_output: Option<bool>,
}

impl Parse for StdioArgs {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut args = StdioArgs::default();
        let mut bare_lines: Vec<LitStr> = Vec::new();

        while !input.is_empty() {
            if input.peek(LitStr) {
                bare_lines.push(input.parse()?);
            } else {
                let ident: Ident = input.parse()?;
                args.parse_option(&ident, input)?;
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        if let Some(first) = bare_lines.first() {
            if args.input.is_some() {
                return Err(Error::new(
                    first.span(),
                    "give input lines either bare or as `input = [...]`, not both",
                ));
            }
            args.input = Some(bare_lines);
        }

        Ok(args)
    }
}

impl StdioArgs {
    fn parse_option(&mut self, ident: &Ident, input: ParseStream) -> Result<()> {
        match ident.to_string().as_str() {
            "input" => {
                if self.input.is_some() {
                    return Err(Error::new(ident.span(), "duplicate `input` option"));
                }
                input.parse::<Token![=]>()?;
                let content;
                bracketed!(content in input);
                let lines = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
                self.input = Some(lines.into_iter().collect());
            }
            "capture_output" => self.capture_output = true,
            "forward_output" => {
                let forward = if input.peek(Token![=]) {
                    input.parse::<Token![=]>()?;
                    input.parse::<LitBool>()?.value
                } else {
                    true
                };
                self.forward_output = Some(forward);
            }
            other => {
                return Err(Error::new(
                    ident.span(),
                    format!(
                        "unknown stdio_test option: `{}`. Expected one of: input, capture_output, forward_output",
                        other
                    ),
                ))
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
