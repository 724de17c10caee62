//! Proc macros for ganui-tokens.
//!
//! # Macros
//!
//! - [`StyleToken`] - Derive the label table, parsing, formatting and serde
//!   impls for a closed, fieldless enum of style tokens.
//!
//! # Example
//!
//! ```rust,ignore
//! use ganui_tokens::StyleToken;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StyleToken)]
//! #[token(concern = Button)]
//! pub enum ButtonSize {
//!     #[default]
//!     Sm,
//!     Md,
//!     Lg,
//! }
//!
//! assert_eq!(ButtonSize::Lg.as_str(), "lg");
//! assert_eq!("md".parse::<ButtonSize>().unwrap(), ButtonSize::Md);
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod token;

/// Derives `ganui_tokens::StyleToken` for a fieldless enum.
///
/// # Generated items
///
/// - Inherent `ALL` and `LABELS` constants, plus `const fn as_str`
/// - `StyleToken` impl (family name, concern, ordinal)
/// - `Display` writing the canonical label
/// - `FromStr` with `ganui_tokens::ParseTokenError` as the error type
/// - `serde::Serialize` / `serde::Deserialize` using the canonical label
///
/// # Attributes
///
/// Container (`#[token(...)]` on the enum):
/// - `concern = Ident` (required): the `ganui_tokens::Concern` member the family belongs to
/// - `family = "name"`: overrides the kebab-case family name derived from the type name
///
/// Variant:
/// - `#[token(rename = "label")]`: overrides the kebab-case label derived from the variant name
///
/// # Compile-Time Errors
///
/// - Applied to a struct or union
/// - Any variant carries fields
/// - Missing `concern`
/// - Two variants resolving to the same label
#[proc_macro_derive(StyleToken, attributes(token))]
pub fn style_token_derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    token::style_token_derive_impl(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
