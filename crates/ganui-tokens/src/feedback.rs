//! Alert and badge tokens.

use crate::StyleToken;

/// Severity styling of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Alert)]
pub enum AlertVariant {
    #[default]
    Success,
    Warning,
    Error,
    Info,
}

/// Badge styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Badge)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Info,
    Outline,
}

/// Badge sizing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, StyleToken)]
#[token(concern = Badge)]
pub enum BadgeSize {
    #[default]
    Sm,
    Md,
    Lg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_members() {
        assert_eq!(AlertVariant::LABELS, &["success", "warning", "error", "info"]);
        assert_eq!(AlertVariant::CONCERN, crate::Concern::Alert);
    }

    #[test]
    fn test_badge_members() {
        assert_eq!(
            BadgeVariant::LABELS,
            &["default", "primary", "success", "warning", "error", "info", "outline"]
        );
        assert_eq!(BadgeSize::LABELS, &["sm", "md", "lg"]);
    }

    #[test]
    fn test_shared_labels_stay_distinct_types() {
        // "success" exists in both families; each parses into its own type.
        let alert: AlertVariant = "success".parse().unwrap();
        let badge: BadgeVariant = "success".parse().unwrap();
        assert_eq!(alert, AlertVariant::Success);
        assert_eq!(badge, BadgeVariant::Success);
        assert_ne!(alert.ordinal(), badge.ordinal());
    }

    #[test]
    fn test_badge_rejects_alert_only_label() {
        assert!("outline".parse::<AlertVariant>().is_err());
    }
}
