//! Attribute helpers for conditional bindings of `pdate`.
//!
//! Both attributes exist because `cfg_attr` cannot add keywords to a function signature and PyO3
//! misbehaves when its block attributes are conditional. See [`fn_attr()`] and [`py_attr()`].

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Abi, Attribute, ImplItem, ImplItemFn, ItemFn, ItemImpl, Meta, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// A qualifier [`fn_attr()`] knows how to put on a signature.
enum Qualifier {
    Const(Token![const]),
    Abi(Abi),
}

impl Parse for Qualifier {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(Token![const]) {
            Ok(Self::Const(input.parse()?))
        } else if input.peek(Token![extern]) {
            Ok(Self::Abi(input.parse()?))
        } else {
            Err(input.error("expected `const` or `extern \"ABI\"`"))
        }
    }
}

/// Add a qualifier to the signature of the function this is attached to.
///
/// Accepts `const` or an ABI such as `extern "C"`. Meant to be used with `cfg_attr` so the same
/// definition can be `const` for Rust callers and `extern "C"` for the C build:
///
/// ```rust,ignore
/// #[cfg_attr(feature = "c", unsafe(no_mangle), fn_attr(extern "C"))]
/// #[cfg_attr(not(feature = "wasm"), fn_attr(const))]
/// pub fn is_gregorian_leap(year: Year) -> bool { todo!() }
/// ```
///
/// Methods in `impl` blocks parse the same way as free functions.
#[proc_macro_attribute]
pub fn fn_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let qualifier = parse_macro_input!(args as Qualifier);
    let mut item = parse_macro_input!(tokens as ItemFn);

    match qualifier {
        Qualifier::Const(token) => item.sig.constness = Some(token),
        Qualifier::Abi(abi) => item.sig.abi = Some(abi),
    }

    quote!(#item).into()
}

/// Create bindgens for conditional pyo3.
///
/// PyO3 generally does not support attributes under conditional clauses
/// (<https://github.com/PyO3/pyo3/issues/780>). Simply, when the header macro of a block like
/// `pymethods` is conditional (via `cfg_attr`), the nested macros (like `new`) will misbehave.
///
/// As of now, this only supports usage for `impl` blocks and only with `pymethods` input:
///
/// ```rust,ignore
/// #[pymethods]
/// impl X {
///     #[new]
///     pub fn new() -> Self { todo!() }
/// }
///
/// // can be conditionally written like so all the functions will have the given attribute:
///
/// #[cfg_attr(feature = "py", py_attr(pymethods, new))]
/// impl X {
///     pub fn new() -> Self { todo!() }
/// }
/// ```
#[proc_macro_attribute]
pub fn py_attr(args: TokenStream, tokens: TokenStream) -> TokenStream {
    let arg_parser = |input: ParseStream| {
        let parent = input.parse::<Meta>()?;
        input.parse::<Token![,]>()?;
        let meta = input.parse::<Meta>()?;
        Ok((parent, meta))
    };

    let (parent, meta) = parse_macro_input!(args with arg_parser);

    if !parent.path().is_ident("pymethods") {
        return syn::Error::new_spanned(parent, "unsupported parent value, expected `pymethods`")
            .to_compile_error()
            .into();
    }

    let mut item_impl = parse_macro_input!(tokens as ItemImpl);
    for i in item_impl.items.iter_mut() {
        if let ImplItem::Fn(ImplItemFn { attrs, .. }) = i {
            attrs.push(Attribute {
                pound_token: Default::default(),
                style: syn::AttrStyle::Outer,
                bracket_token: syn::token::Bracket::default(),
                meta: meta.clone(),
            });
        }
    }

    quote! {
        #[#parent]
        #item_impl
    }
    .into()
}
