//! Token parsing and registry errors.

use thiserror::Error;

/// Error returned when a label is not a member of a token family.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {family} '{input}', expected one of: {}", .expected.join(", "))]
pub struct ParseTokenError {
    family: &'static str,
    input: String,
    expected: &'static [&'static str],
}

impl ParseTokenError {
    pub(crate) fn new(family: &'static str, input: &str, expected: &'static [&'static str]) -> Self {
        Self {
            family,
            input: input.to_string(),
            expected,
        }
    }

    /// The family that rejected the label.
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// The label exactly as it was given.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The canonical labels the family accepts.
    pub fn expected(&self) -> &'static [&'static str] {
        self.expected
    }
}

/// Error returned by registry lookups keyed by family name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No family with this name is registered
    #[error("unknown token family '{family}'. Available: {}", .available.join(", "))]
    UnknownFamily {
        family: String,
        available: Vec<&'static str>,
    },
    /// The family exists but the label is not one of its members
    #[error(transparent)]
    Parse(#[from] ParseTokenError),
}

/// Error returned when a registry is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two families were registered under the same name
    #[error("token family '{family}' is registered more than once")]
    DuplicateFamily { family: &'static str },
    /// A family lists the same label twice
    #[error("token family '{family}' declares label '{label}' more than once")]
    DuplicateLabel {
        family: &'static str,
        label: &'static str,
    },
}
