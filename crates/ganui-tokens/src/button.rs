//! Button tokens.

use crate::StyleToken;

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Button)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
    Ghost,
    Danger,
    /// No library styling at all; the caller supplies every class.
    Unstyled,
}

/// Button sizing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Button)]
pub enum ButtonSize {
    #[default]
    Sm,
    Md,
    Lg,
}

/// Alignment of a button's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Button)]
pub enum ButtonAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Semantic form role, mirrored by the HTML `type` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Button)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}
