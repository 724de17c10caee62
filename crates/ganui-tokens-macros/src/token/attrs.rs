//! Parsing of `#[token(...)]` attributes.

use syn::{Attribute, Ident, LitStr, Result};

/// Attributes placed on the enum itself.
#[derive(Default)]
pub struct ContainerAttrs {
    /// Family name override.
    pub family: Option<String>,
    /// Member of `ganui_tokens::Concern`.
    pub concern: Option<Ident>,
}

/// Attributes placed on a single variant.
#[derive(Default)]
pub struct VariantAttrs {
    /// Label override.
    pub rename: Option<String>,
}

pub fn parse_container_attrs(attrs: &[Attribute]) -> Result<ContainerAttrs> {
    let mut result = ContainerAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("token")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("family") {
                let lit: LitStr = meta.value()?.parse()?;
                result.family = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("concern") {
                let ident: Ident = meta.value()?.parse()?;
                result.concern = Some(ident);
                Ok(())
            } else {
                Err(meta.error("expected `family` or `concern`"))
            }
        })?;
    }

    Ok(result)
}

pub fn parse_variant_attrs(attrs: &[Attribute]) -> Result<VariantAttrs> {
    let mut result = VariantAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident("token")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().trim().is_empty() {
                    return Err(meta.error("token label cannot be empty"));
                }
                result.rename = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("expected `rename`"))
            }
        })?;
    }

    Ok(result)
}
