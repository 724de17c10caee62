//! The [`StyleToken`] trait and the [`Concern`] grouping.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseTokenError;

/// A closed enumeration of style labels.
///
/// Implemented by `#[derive(StyleToken)]`; hand-written impls must keep
/// [`all`](StyleToken::all), [`labels`](StyleToken::labels) and
/// [`names`](StyleToken::names) the same length and in the same order.
///
/// # Example
///
/// ```rust
/// use ganui_tokens::{ButtonSize, StyleToken};
///
/// assert_eq!(ButtonSize::FAMILY, "button-size");
/// assert_eq!(ButtonSize::labels(), &["sm", "md", "lg"]);
/// assert_eq!(ButtonSize::from_label("LG").unwrap(), ButtonSize::Lg);
/// assert!(!ButtonSize::contains_label("xl"));
/// ```
pub trait StyleToken:
    Copy + Eq + Hash + Debug + Display + FromStr<Err = ParseTokenError> + Send + Sync + 'static
{
    /// Kebab-case family name, unique within a registry.
    const FAMILY: &'static str;

    /// The UI concern this family styles.
    const CONCERN: Concern;

    /// Every member, in declaration order.
    fn all() -> &'static [Self];

    /// Canonical labels, parallel to [`all`](StyleToken::all).
    fn labels() -> &'static [&'static str];

    /// Declared member names, parallel to [`all`](StyleToken::all).
    fn names() -> &'static [&'static str];

    /// The canonical label of this member.
    fn label(self) -> &'static str;

    /// Position of this member in [`all`](StyleToken::all).
    fn ordinal(self) -> usize;

    /// Parses a label into a member.
    ///
    /// Matching ignores ASCII case, surrounding whitespace, and treats `_`
    /// as `-`. The declared member name (`TopLeft`) is accepted as well as
    /// the canonical label (`top-left`).
    fn from_label(input: &str) -> Result<Self, ParseTokenError> {
        match_label(Self::labels(), Self::names(), input)
            .map(|index| Self::all()[index])
            .ok_or_else(|| ParseTokenError::new(Self::FAMILY, input, Self::labels()))
    }

    /// Returns `true` if `input` parses to a member of this family.
    fn contains_label(input: &str) -> bool {
        match_label(Self::labels(), Self::names(), input).is_some()
    }
}

/// Finds the index of `input` among `labels` (or `names`).
pub(crate) fn match_label(
    labels: &[&'static str],
    names: &[&'static str],
    input: &str,
) -> Option<usize> {
    let needle = input.trim().replace('_', "-");
    if needle.is_empty() {
        return None;
    }

    labels
        .iter()
        .position(|label| label.eq_ignore_ascii_case(&needle))
        .or_else(|| {
            names
                .iter()
                .position(|name| name.eq_ignore_ascii_case(&needle))
        })
}

/// The UI concern a token family belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Concern {
    Button,
    Alert,
    Badge,
    Modal,
    #[cfg(feature = "legacy-tokens")]
    Spinner,
    #[cfg(feature = "legacy-tokens")]
    Tab,
    #[cfg(feature = "legacy-tokens")]
    Avatar,
    #[cfg(feature = "legacy-tokens")]
    Toast,
}

impl Concern {
    /// Every concern, in declaration order.
    pub const ALL: &'static [Concern] = &[
        Concern::Button,
        Concern::Alert,
        Concern::Badge,
        Concern::Modal,
        #[cfg(feature = "legacy-tokens")]
        Concern::Spinner,
        #[cfg(feature = "legacy-tokens")]
        Concern::Tab,
        #[cfg(feature = "legacy-tokens")]
        Concern::Avatar,
        #[cfg(feature = "legacy-tokens")]
        Concern::Toast,
    ];

    const LABELS: &'static [&'static str] = &[
        "button",
        "alert",
        "badge",
        "modal",
        #[cfg(feature = "legacy-tokens")]
        "spinner",
        #[cfg(feature = "legacy-tokens")]
        "tab",
        #[cfg(feature = "legacy-tokens")]
        "avatar",
        #[cfg(feature = "legacy-tokens")]
        "toast",
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Concern::Button => "button",
            Concern::Alert => "alert",
            Concern::Badge => "badge",
            Concern::Modal => "modal",
            #[cfg(feature = "legacy-tokens")]
            Concern::Spinner => "spinner",
            #[cfg(feature = "legacy-tokens")]
            Concern::Tab => "tab",
            #[cfg(feature = "legacy-tokens")]
            Concern::Avatar => "avatar",
            #[cfg(feature = "legacy-tokens")]
            Concern::Toast => "toast",
        }
    }
}

impl Display for Concern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Concern {
    type Err = ParseTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_label(Self::LABELS, &[], s)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| ParseTokenError::new("concern", s, Self::LABELS))
    }
}

#[doc(hidden)]
pub mod __private {
    pub use serde;

    use std::fmt;
    use std::marker::PhantomData;

    use ::serde::de::{self, Deserializer, Visitor};

    use super::StyleToken;

    /// Deserializes a token from its label.
    pub fn deserialize_token<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: StyleToken,
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(LabelVisitor(PhantomData))
    }

    struct LabelVisitor<T>(PhantomData<T>);

    impl<'de, T: StyleToken> Visitor<'de> for LabelVisitor<T> {
        type Value = T;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a {} label ({})", T::FAMILY, T::labels().join(", "))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
            T::from_label(value).map_err(E::custom)
        }
    }
}
