//! Registry of token families.
//!
//! - [`TokenFamily`]: runtime description of one closed enumeration
//! - [`StyleTokenRegistry`]: ordered collection of families, queried by name
//!
//! [`StyleTokenRegistry::builtin`] holds every family compiled into this
//! crate. Custom registries are built with [`StyleTokenRegistry::register`].

mod family;

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub use family::TokenFamily;

use crate::error::{RegistryError, TokenError};
use crate::token::{Concern, StyleToken};

static BUILTIN: Lazy<StyleTokenRegistry> = Lazy::new(|| {
    let registry = StyleTokenRegistry::new()
        .register::<crate::ButtonVariant>()
        .register::<crate::ButtonSize>()
        .register::<crate::ButtonAlign>()
        .register::<crate::ButtonType>()
        .register::<crate::AlertVariant>()
        .register::<crate::BadgeVariant>()
        .register::<crate::BadgeSize>()
        .register::<crate::ModalSize>();

    #[cfg(feature = "legacy-tokens")]
    let registry = registry
        .register::<crate::SpinnerSize>()
        .register::<crate::TabVariant>()
        .register::<crate::AvatarSize>()
        .register::<crate::ToastVariant>()
        .register::<crate::ToastPosition>();

    registry
});

/// An ordered set of token families.
///
/// # Example
///
/// ```rust
/// use ganui_tokens::StyleTokenRegistry;
///
/// let registry = StyleTokenRegistry::builtin();
/// assert!(registry.contains("button-variant", "ghost"));
/// assert_eq!(registry.resolve("modal-size", "XL").unwrap(), "xl");
/// assert!(registry.resolve("modal-size", "huge").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleTokenRegistry {
    families: Vec<TokenFamily>,
}

impl StyleTokenRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            families: Vec::new(),
        }
    }

    /// The registry of every family compiled into this crate.
    pub fn builtin() -> &'static StyleTokenRegistry {
        &BUILTIN
    }

    /// Adds the family of `T`, returning the registry for chaining.
    ///
    /// Registering a family name twice is allowed here and reported by
    /// [`validate`](Self::validate).
    pub fn register<T: StyleToken>(mut self) -> Self {
        self.families.push(TokenFamily::of::<T>());
        self
    }

    /// Families in registration order.
    pub fn families(&self) -> &[TokenFamily] {
        &self.families
    }

    /// Looks up a family by name. The first registration wins.
    pub fn family(&self, name: &str) -> Option<&TokenFamily> {
        let name = name.trim();
        self.families
            .iter()
            .find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Families that style the given concern.
    pub fn by_concern(&self, concern: Concern) -> impl Iterator<Item = &TokenFamily> + '_ {
        self.families.iter().filter(move |f| f.concern() == concern)
    }

    /// Family names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.families.iter().map(|f| f.name())
    }

    /// Returns `true` if `family` exists and `label` is one of its members.
    pub fn contains(&self, family: &str, label: &str) -> bool {
        self.family(family).is_some_and(|f| f.contains(label))
    }

    /// Resolves `label` within `family` to its canonical label.
    pub fn resolve(&self, family: &str, label: &str) -> Result<&'static str, TokenError> {
        let found = self
            .family(family)
            .ok_or_else(|| TokenError::UnknownFamily {
                family: family.to_string(),
                available: self.names().collect(),
            })?;
        Ok(found.resolve(label)?)
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Checks that family names are unique and that no family repeats a label.
    pub fn validate(&self) -> Result<(), RegistryError> {
        let mut seen_families = HashSet::new();

        for family in &self.families {
            if !seen_families.insert(family.name()) {
                return Err(RegistryError::DuplicateFamily {
                    family: family.name(),
                });
            }

            let mut seen_labels = HashSet::new();
            for label in family.labels() {
                if !seen_labels.insert(*label) {
                    return Err(RegistryError::DuplicateLabel {
                        family: family.name(),
                        label: *label,
                    });
                }
            }
        }

        Ok(())
    }
}
