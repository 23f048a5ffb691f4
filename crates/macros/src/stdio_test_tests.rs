// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
use super::*;
use quote::quote;
use syn::Stmt;

fn expand_fn(attr: TokenStream, item: TokenStream) -> Result<ItemFn> {
    let args: StdioArgs = parse2(attr)?;
    let func: ItemFn = parse2(item)?;
    parse2(expand(&args, &func)?)
}

fn count_test_attrs(func: &ItemFn) -> usize {
    func.attrs.iter().filter(|a| a.path().is_ident("test")).count()
}

#[test]
fn test_wrapper_takes_no_parameters() {
    let wrapper = expand_fn(
        quote! { "a" },
        quote! {
            fn reads(input: SimulatedInput, output: InterceptedOutput) {
                let _ = (input, output);
            }
        },
    )
    .unwrap();

    assert_eq!(wrapper.sig.ident, "reads");
    assert!(wrapper.sig.inputs.is_empty());
    assert_eq!(count_test_attrs(&wrapper), 1);
    assert!(matches!(wrapper.block.stmts.first(), Some(Stmt::Item(_))));
}

#[test]
fn test_existing_test_attribute_is_not_duplicated() {
    let wrapper = expand_fn(
        quote! {},
        quote! {
            #[test]
            #[should_panic]
            fn already_marked() {}
        },
    )
    .unwrap();

    assert_eq!(count_test_attrs(&wrapper), 1);
    assert!(wrapper
        .attrs
        .iter()
        .any(|a| a.path().is_ident("should_panic")));
}

#[test]
fn test_return_type_is_kept() {
    let wrapper = expand_fn(
        quote! { capture_output },
        quote! {
            fn fallible() -> Result<(), String> { Ok(()) }
        },
    )
    .unwrap();

    let output = &wrapper.sig.output;
    assert_eq!(
        quote!(#output).to_string(),
        quote!(-> Result<(), String>).to_string()
    );
}

#[test]
fn test_config_tokens_follow_options() {
    let args: StdioArgs = parse2(quote! { input = ["a", "b"], capture_output, forward_output = false }).unwrap();
    let tokens = config_tokens(&args).to_string().replace(' ', "");

    assert!(tokens.contains(r#"input::<[&str;2usize],&str>(["a","b"])"#));
    assert!(tokens.contains("capture_output()"));
    assert!(tokens.contains("forward_output(false)"));
}

#[test]
fn test_config_tokens_without_script() {
    let args: StdioArgs = parse2(quote! {}).unwrap();
    let tokens = config_tokens(&args).to_string();

    assert!(!tokens.contains("input"));
    assert!(!tokens.contains("forward_output"));
}

#[test]
fn test_rejects_async() {
    let err = expand_fn(quote! {}, quote! { async fn later() {} }).unwrap_err();
    assert!(err.to_string().contains("async"));
}

#[test]
fn test_rejects_three_parameters() {
    let err = expand_fn(
        quote! { "a" },
        quote! { fn many(a: SimulatedInput, b: InterceptedOutput, c: SimulatedInput) {} },
    )
    .unwrap_err();
    assert!(err.to_string().contains("at most two parameters"));
}

#[test]
fn test_rejects_generics() {
    let err = expand_fn(quote! {}, quote! { fn generic<T>() {} }).unwrap_err();
    assert!(err.to_string().contains("generic"));
}
