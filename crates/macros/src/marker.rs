// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `#[reads_stdio]` and `#[writes_stdio]` markers.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, parse_quote, Error, ItemFn, Result};

/// Which marker was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Reads,
    Writes,
}

impl Marker {
    fn name(self) -> &'static str {
        match self {
            Marker::Reads => "reads_stdio",
            Marker::Writes => "writes_stdio",
        }
    }

    fn access(self) -> TokenStream {
        match self {
            Marker::Reads => quote! { ::stdio_capture::lock::Access::Read },
            Marker::Writes => quote! { ::stdio_capture::lock::Access::Write },
        }
    }
}

/// Main implementation for both marker attributes.
pub fn marker_impl(attr: TokenStream, item: TokenStream, marker: Marker) -> TokenStream {
    match marker_inner(attr, item, marker) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn marker_inner(attr: TokenStream, item: TokenStream, marker: Marker) -> Result<TokenStream> {
    if !attr.is_empty() {
        return Err(Error::new_spanned(
            attr,
            format!("#[{}] takes no arguments", marker.name()),
        ));
    }
    let func: ItemFn = parse2(item)?;
    wrap(func, marker)
}

/// Hold the lock around the original body; the signature is untouched.
pub(crate) fn wrap(mut func: ItemFn, marker: Marker) -> Result<TokenStream> {
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(Error::new_spanned(
            asyncness,
            format!("#[{}] does not support async functions", marker.name()),
        ));
    }
    let access = marker.access();
    let block = func.block.clone();
    func.block = Box::new(parse_quote! {{
        let __stdio_lock = ::stdio_capture::lock::acquire(#access);
        #block
    }});
    Ok(quote! { #func })
}

#[cfg(test)]
#[path = "marker_tests.rs"]
mod tests;
