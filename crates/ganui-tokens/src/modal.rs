//! Modal tokens.

use crate::StyleToken;

/// Modal sizing tier. `Full` covers the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Modal)]
pub enum ModalSize {
    #[default]
    Sm,
    Md,
    Lg,
    Xl,
    Full,
}
