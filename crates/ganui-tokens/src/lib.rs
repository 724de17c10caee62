//! # ganui-tokens - Closed style-token vocabularies
//!
//! `ganui-tokens` defines the fixed sets of style labels that UI components
//! switch on: button variants and sizes, alert and badge severities, modal
//! sizes. Each set is a fieldless enum, so a value outside the set cannot be
//! constructed and referencing a member that does not exist fails to compile.
//!
//! ## Quick Start
//!
//! ```rust
//! use ganui_tokens::{ButtonSize, ButtonVariant, StyleToken};
//!
//! let size: ButtonSize = "lg".parse().unwrap();
//! assert_eq!(size, ButtonSize::Lg);
//! assert_eq!(size.to_string(), "lg");
//!
//! let json = serde_json::to_string(&ButtonVariant::Ghost).unwrap();
//! assert_eq!(json, r#""ghost""#);
//!
//! assert_eq!(ButtonVariant::ALL.len(), 5);
//! assert!(ButtonSize::contains_label("md"));
//! ```
//!
//! ## Concepts
//!
//! - [`StyleToken`]: trait shared by every token enum (family name, members,
//!   labels, parsing). Derived with `#[derive(StyleToken)]`.
//! - [`StyleTokenRegistry`]: the families known at runtime, queried by name.
//! - [`PresetSheet`]: named token selections per component, loaded from YAML
//!   or JSON.
//!
//! ## Labels
//!
//! Every member has one canonical kebab-case label (`ToastPosition::TopLeft`
//! is `top-left`). Parsing ignores ASCII case and surrounding whitespace and
//! also accepts the member name, so `"TopLeft"`, `"top_left"` and
//! `" TOP-LEFT "` all parse. Formatting and serialization always produce the
//! canonical label.
//!
//! ## Removed families
//!
//! The spinner, tab, avatar and toast families were dropped from the
//! component set. They are only compiled with the `legacy-tokens` feature;
//! without it, code naming them does not build:
//!
#![cfg_attr(
    not(feature = "legacy-tokens"),
    doc = "```compile_fail\nuse ganui_tokens::SpinnerSize;\n\nlet _ = SpinnerSize::Md;\n```"
)]
#![cfg_attr(
    feature = "legacy-tokens",
    doc = "```rust\nuse ganui_tokens::SpinnerSize;\n\nassert_eq!(SpinnerSize::Md.as_str(), \"md\");\n```"
)]

// Lets `#[derive(StyleToken)]` output name `::ganui_tokens` inside this crate.
extern crate self as ganui_tokens;

mod button;
mod error;
mod feedback;
#[cfg(feature = "legacy-tokens")]
mod legacy;
mod modal;
pub mod preset;
pub mod registry;
mod token;

pub use button::{ButtonAlign, ButtonSize, ButtonType, ButtonVariant};
pub use error::{ParseTokenError, RegistryError, TokenError};
pub use feedback::{AlertVariant, BadgeSize, BadgeVariant};
#[cfg(feature = "legacy-tokens")]
pub use legacy::{AvatarSize, SpinnerSize, TabVariant, ToastPosition, ToastVariant};
pub use modal::ModalSize;
pub use preset::{PresetError, PresetFormat, PresetSheet};
pub use registry::{StyleTokenRegistry, TokenFamily};
pub use token::{Concern, StyleToken};

pub use ganui_tokens_macros::StyleToken;

#[doc(hidden)]
pub use token::__private;
