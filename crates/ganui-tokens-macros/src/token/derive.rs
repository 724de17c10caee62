//! Implementation of the `#[derive(StyleToken)]` macro.
//!
//! Generates the label table and the `StyleToken`, `Display`, `FromStr`
//! and serde impls for a fieldless enum.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{parse_container_attrs, parse_variant_attrs};

/// Information about one enum variant.
struct VariantInfo {
    ident: syn::Ident,
    /// Canonical label (kebab-case unless renamed).
    label: String,
    /// Declared name, accepted when parsing.
    name: String,
}

/// Main implementation of the StyleToken derive macro.
pub fn style_token_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let enum_name = &input.ident;

    let data = match &input.data {
        Data::Enum(data) => data,
        _ => {
            return Err(Error::new(
                input.span(),
                "StyleToken can only be derived for enums",
            ))
        }
    };

    if data.variants.is_empty() {
        return Err(Error::new(
            input.span(),
            "StyleToken requires at least one variant",
        ));
    }

    let container = parse_container_attrs(&input.attrs)?;
    let concern = container.concern.ok_or_else(|| {
        Error::new(
            input.span(),
            "missing #[token(concern = ...)] on StyleToken enum",
        )
    })?;
    let family = container
        .family
        .unwrap_or_else(|| to_kebab_case(&enum_name.to_string()));

    let mut variants: Vec<VariantInfo> = Vec::with_capacity(data.variants.len());

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(Error::new(
                variant.span(),
                "StyleToken variants cannot carry fields",
            ));
        }

        let attrs = parse_variant_attrs(&variant.attrs)?;
        let name = variant.ident.to_string();
        let label = match attrs.rename {
            Some(rename) => {
                let canonical = normalize_label(&rename);
                if canonical != rename {
                    return Err(Error::new(
                        variant.span(),
                        format!(
                            "token label '{}' is not canonical, use '{}'",
                            rename, canonical
                        ),
                    ));
                }
                rename
            }
            None => to_kebab_case(&name),
        };

        variants.push(VariantInfo {
            ident: variant.ident.clone(),
            label,
            name,
        });
    }

    check_unambiguous(&variants, &family)?;

    let idents: Vec<&syn::Ident> = variants.iter().map(|v| &v.ident).collect();
    let labels: Vec<&str> = variants.iter().map(|v| v.label.as_str()).collect();
    let names: Vec<&str> = variants.iter().map(|v| v.name.as_str()).collect();
    let ordinals: Vec<usize> = (0..variants.len()).collect();

    let expanded = quote! {
        impl #enum_name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[#(Self::#idents),*];

            /// Canonical labels, in declaration order.
            pub const LABELS: &'static [&'static str] = &[#(#labels),*];

            /// Returns the canonical label of this member.
            pub const fn as_str(self) -> &'static str {
                match self {
                    #(Self::#idents => #labels,)*
                }
            }
        }

        impl ::ganui_tokens::StyleToken for #enum_name {
            const FAMILY: &'static str = #family;
            const CONCERN: ::ganui_tokens::Concern = ::ganui_tokens::Concern::#concern;

            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn labels() -> &'static [&'static str] {
                Self::LABELS
            }

            fn names() -> &'static [&'static str] {
                &[#(#names),*]
            }

            fn label(self) -> &'static str {
                self.as_str()
            }

            fn ordinal(self) -> usize {
                match self {
                    #(Self::#idents => #ordinals,)*
                }
            }
        }

        impl ::core::fmt::Display for #enum_name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for #enum_name {
            type Err = ::ganui_tokens::ParseTokenError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                <Self as ::ganui_tokens::StyleToken>::from_label(s)
            }
        }

        impl ::ganui_tokens::__private::serde::Serialize for #enum_name {
            fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
            where
                __S: ::ganui_tokens::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::ganui_tokens::__private::serde::Deserialize<'de> for #enum_name {
            fn deserialize<__D>(deserializer: __D) -> ::core::result::Result<Self, __D::Error>
            where
                __D: ::ganui_tokens::__private::serde::Deserializer<'de>,
            {
                ::ganui_tokens::__private::deserialize_token::<Self, __D>(deserializer)
            }
        }
    };

    Ok(expanded)
}

/// Normalizes a label the way `ganui_tokens` normalizes parser input.
fn normalize_label(s: &str) -> String {
    s.trim().replace('_', "-").to_ascii_lowercase()
}

/// Rejects labels that the case-insensitive parser could not tell apart,
/// either from each other or from another variant's declared name.
fn check_unambiguous(variants: &[VariantInfo], family: &str) -> Result<()> {
    let mut seen_labels = HashSet::new();

    for (index, variant) in variants.iter().enumerate() {
        let label = normalize_label(&variant.label);

        if !seen_labels.insert(label.clone()) {
            return Err(Error::new(
                variant.ident.span(),
                format!("duplicate token label '{}' in {}", variant.label, family),
            ));
        }

        let shadowed = variants
            .iter()
            .enumerate()
            .find(|(other, v)| *other != index && normalize_label(&v.name) == label);
        if let Some((_, other)) = shadowed {
            return Err(Error::new(
                variant.ident.span(),
                format!(
                    "token label '{}' of {} collides with variant {} in {}",
                    variant.label, variant.name, other.name, family
                ),
            ));
        }
    }

    Ok(())
}

/// Convert a PascalCase identifier to kebab-case.
fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('-');
            }
            result.extend(c.to_lowercase());
            prev_was_lower = false;
        } else if c == '_' {
            result.push('-');
            prev_was_lower = false;
        } else {
            result.push(c);
            prev_was_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }

    result
}
