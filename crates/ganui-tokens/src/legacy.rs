//! Families dropped from the current component set.
//!
//! Only compiled with the `legacy-tokens` feature, for consumers still
//! built against the earlier spinner, tab, avatar and toast components.

use crate::StyleToken;

/// Spinner sizing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Spinner)]
pub enum SpinnerSize {
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
}

/// Tab strip styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Tab)]
pub enum TabVariant {
    #[default]
    Underline,
    Pills,
    Boxed,
}

/// Avatar sizing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Avatar)]
pub enum AvatarSize {
    #[default]
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

/// Toast severity styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Toast)]
pub enum ToastVariant {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

/// Screen edge or corner a toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Toast)]
pub enum ToastPosition {
    #[default]
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}
