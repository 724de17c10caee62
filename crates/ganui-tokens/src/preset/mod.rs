//! Named component presets loaded from YAML or JSON.
//!
//! A preset sheet maps preset names to token selections per component:
//!
//! ```yaml
//! button:
//!   confirm: { variant: default, size: lg, align: center, type: submit }
//!   cancel: { variant: ghost }
//! alert:
//!   save-failed: { variant: error }
//! ```
//!
//! - [`PresetSheet`]: the parsed sheet with lookup and merge helpers
//! - [`ButtonStyle`], [`AlertStyle`], [`BadgeStyle`], [`ModalStyle`]: per-component selections
//! - [`PresetError`]: loading failures
//!
//! Omitted fields take the token's default member. Unknown keys and unknown
//! labels reject the whole sheet.

mod error;
mod sheet;
mod style;

pub use error::PresetError;
pub use sheet::{PresetFormat, PresetSheet};
pub use style::{AlertStyle, BadgeStyle, ButtonStyle, ModalStyle};
#[cfg(feature = "legacy-tokens")]
pub use style::{AvatarStyle, SpinnerStyle, TabStyle, ToastStyle};
