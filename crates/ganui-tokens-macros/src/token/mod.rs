//! `#[derive(StyleToken)]` implementation.

mod attrs;
mod derive;

pub use derive::style_token_derive_impl;
