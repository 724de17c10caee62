//! Type-erased view of one token family.

use serde::Serialize;

use crate::error::ParseTokenError;
use crate::token::{match_label, Concern, StyleToken};

/// A token family described by its name, concern and labels.
///
/// Built from any [`StyleToken`] type with [`TokenFamily::of`], so families
/// can be listed and queried by name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenFamily {
    name: &'static str,
    concern: Concern,
    labels: &'static [&'static str],
    #[serde(skip)]
    names: &'static [&'static str],
}

impl TokenFamily {
    /// Describes the family of `T`.
    pub fn of<T: StyleToken>() -> Self {
        Self {
            name: T::FAMILY,
            concern: T::CONCERN,
            labels: T::labels(),
            names: T::names(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn concern(&self) -> Concern {
        self.concern
    }

    /// Canonical labels in declaration order.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Returns `true` if `label` names a member, using the same matching
    /// rules as [`StyleToken::from_label`].
    pub fn contains(&self, label: &str) -> bool {
        match_label(self.labels, self.names, label).is_some()
    }

    /// Resolves `label` to its canonical form.
    pub fn resolve(&self, label: &str) -> Result<&'static str, ParseTokenError> {
        match_label(self.labels, self.names, label)
            .map(|index| self.labels[index])
            .ok_or_else(|| ParseTokenError::new(self.name, label, self.labels))
    }
}
