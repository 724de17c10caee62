//! Per-component token selections.

use serde::{Deserialize, Serialize};

use crate::{
    AlertVariant, BadgeSize, BadgeVariant, ButtonAlign, ButtonSize, ButtonType, ButtonVariant,
    ModalSize,
};

/// Token selection for a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub align: ButtonAlign,
    #[serde(rename = "type")]
    pub kind: ButtonType,
}

impl ButtonStyle {
    pub fn new(variant: ButtonVariant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn align(mut self, align: ButtonAlign) -> Self {
        self.align = align;
        self
    }

    pub fn kind(mut self, kind: ButtonType) -> Self {
        self.kind = kind;
        self
    }
}

/// Token selection for an alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlertStyle {
    pub variant: AlertVariant,
}

/// Token selection for a badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeStyle {
    pub variant: BadgeVariant,
    pub size: BadgeSize,
}

/// Token selection for a modal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModalStyle {
    pub size: ModalSize,
}

#[cfg(feature = "legacy-tokens")]
mod legacy {
    use serde::{Deserialize, Serialize};

    use crate::{AvatarSize, SpinnerSize, TabVariant, ToastPosition, ToastVariant};

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct SpinnerStyle {
        pub size: SpinnerSize,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct TabStyle {
        pub variant: TabVariant,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct AvatarStyle {
        pub size: AvatarSize,
    }

    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(default, deny_unknown_fields)]
    pub struct ToastStyle {
        pub variant: ToastVariant,
        pub position: ToastPosition,
    }
}

#[cfg(feature = "legacy-tokens")]
pub use legacy::{AvatarStyle, SpinnerStyle, TabStyle, ToastStyle};
