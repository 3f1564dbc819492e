//! Procedural macros for the mapmesh workspace.
//!
//! [`macro@context`] wraps the body of a function returning `anyhow::Result` so that any
//! error leaving the function carries an additional, formatted context line:
//!
//! ```ignore
//! #[context("Failed to read polygon file {}", path.display())]
//! fn read(path: &Path) -> Result<PolygonFile> { ... }
//! ```

mod args;

use crate::args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::{ReturnType, parse_macro_input};

#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs {
		move_token,
		format_args,
	} = parse_macro_input!(args as ContextArgs);
	let mut function = parse_macro_input!(input as syn::ItemFn);

	if function.sig.asyncness.is_some() {
		return syn::Error::new_spanned(&function.sig, "#[context] supports synchronous functions only")
			.to_compile_error()
			.into();
	}
	if matches!(function.sig.output, ReturnType::Default) {
		return syn::Error::new_spanned(&function.sig, "#[context] requires a function returning Result")
			.to_compile_error()
			.into();
	}

	let body = &function.block;
	let return_type = &function.sig.output;
	let err = Ident::new("err", Span::mixed_site());
	let once = Ident::new("force_fn_once", Span::mixed_site());

	let new_body = quote! {
		// A moved non-Copy value pins the closure to FnOnce.
		let #once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#once);
			#body
		})()
		.map_err(|#err| #err.context(format!(#format_args)).into())
	};
	function.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	function.into_token_stream().into()
}
