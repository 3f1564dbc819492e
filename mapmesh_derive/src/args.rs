use proc_macro2::TokenStream as TokenStream2;
use syn::Token;
use syn::parse::{self, Parse, ParseStream};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
#[derive(Debug)]
pub struct ContextArgs {
	pub move_token: Option<Token![move]>,
	pub format_args: TokenStream2,
}

impl Parse for ContextArgs {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		let format_args: TokenStream2 = input.parse()?;
		if format_args.is_empty() {
			return Err(input.error("expected a context message"));
		}
		Ok(Self { move_token, format_args })
	}
}

#[cfg(test)]
mod tests {
	use super::ContextArgs;
	use syn::parse_str;

	#[test]
	fn message_only() {
		let args: ContextArgs = parse_str(r#""loading {}", path"#).unwrap();
		assert!(args.move_token.is_none());
		assert_eq!(args.format_args.to_string(), r#""loading {}" , path"#);
	}

	#[test]
	fn leading_move() {
		let args: ContextArgs = parse_str(r#"move, "clipping {key}""#).unwrap();
		assert!(args.move_token.is_some());
		assert_eq!(args.format_args.to_string(), r#""clipping {key}""#);
	}

	#[test]
	fn move_without_comma_is_rejected() {
		let err = parse_str::<ContextArgs>(r#"move "x""#).unwrap_err();
		assert!(err.to_string().contains(','), "unexpected error: {err}");
	}

	#[test]
	fn empty_message_is_rejected() {
		assert!(parse_str::<ContextArgs>("").is_err());
	}
}
