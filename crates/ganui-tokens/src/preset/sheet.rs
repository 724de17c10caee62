//! Preset sheet parsing, lookup and layering.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::PresetError;
use super::style::{AlertStyle, BadgeStyle, ButtonStyle, ModalStyle};
#[cfg(feature = "legacy-tokens")]
use super::style::{AvatarStyle, SpinnerStyle, TabStyle, ToastStyle};
use crate::token::Concern;

/// Preset sheet file extensions and their formats, in priority order.
const EXTENSIONS: &[(&str, PresetFormat)] = &[
    ("yaml", PresetFormat::Yaml),
    ("yml", PresetFormat::Yaml),
    ("json", PresetFormat::Json),
];

/// Serialization format of a preset sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetFormat {
    Yaml,
    Json,
}

impl PresetFormat {
    /// Detects the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        EXTENSIONS
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(ext))
            .map(|(_, format)| *format)
    }
}

/// A set of named component presets.
///
/// # Example
///
/// ```rust
/// use ganui_tokens::{ButtonSize, ButtonVariant, PresetSheet};
///
/// let sheet = PresetSheet::from_yaml(
///     "button:\n  confirm: { variant: default, size: lg, type: submit }\n",
/// )
/// .unwrap();
///
/// let confirm = sheet.button("confirm").unwrap();
/// assert_eq!(confirm.variant, ButtonVariant::Default);
/// assert_eq!(confirm.size, ButtonSize::Lg);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetSheet {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    button: BTreeMap<String, ButtonStyle>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    alert: BTreeMap<String, AlertStyle>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    badge: BTreeMap<String, BadgeStyle>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    modal: BTreeMap<String, ModalStyle>,
    #[cfg(feature = "legacy-tokens")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    spinner: BTreeMap<String, SpinnerStyle>,
    #[cfg(feature = "legacy-tokens")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    tab: BTreeMap<String, TabStyle>,
    #[cfg(feature = "legacy-tokens")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    avatar: BTreeMap<String, AvatarStyle>,
    #[cfg(feature = "legacy-tokens")]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    toast: BTreeMap<String, ToastStyle>,
}

impl PresetSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a sheet from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, PresetError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a sheet from JSON.
    pub fn from_json(source: &str) -> Result<Self, PresetError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses a sheet in the given format.
    pub fn parse(source: &str, format: PresetFormat) -> Result<Self, PresetError> {
        match format {
            PresetFormat::Yaml => Self::from_yaml(source),
            PresetFormat::Json => Self::from_json(source),
        }
    }

    /// Reads a sheet from disk, picking the format from the file extension.
    ///
    /// # Errors
    ///
    /// - [`PresetError::UnsupportedFormat`] for extensions other than
    ///   `.yaml`, `.yml` and `.json`
    /// - [`PresetError::Io`] if the file cannot be read
    /// - [`PresetError::Yaml`] / [`PresetError::Json`] for malformed content
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PresetError> {
        let path = path.as_ref();
        let format =
            PresetFormat::from_path(path).ok_or_else(|| PresetError::UnsupportedFormat {
                path: path.to_path_buf(),
            })?;

        let source = std::fs::read_to_string(path).map_err(|source| PresetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let sheet = Self::parse(&source, format)?;
        debug!(
            path = %path.display(),
            ?format,
            presets = sheet.len(),
            "loaded preset sheet"
        );
        Ok(sheet)
    }

    /// Serializes the sheet to YAML with canonical labels.
    pub fn to_yaml(&self) -> Result<String, PresetError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the sheet to pretty-printed JSON with canonical labels.
    pub fn to_json(&self) -> Result<String, PresetError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn button(&self, name: &str) -> Option<&ButtonStyle> {
        self.button.get(name)
    }

    pub fn alert(&self, name: &str) -> Option<&AlertStyle> {
        self.alert.get(name)
    }

    pub fn badge(&self, name: &str) -> Option<&BadgeStyle> {
        self.badge.get(name)
    }

    pub fn modal(&self, name: &str) -> Option<&ModalStyle> {
        self.modal.get(name)
    }

    /// Adds or replaces a button preset, returning the sheet for chaining.
    pub fn with_button(mut self, name: &str, style: ButtonStyle) -> Self {
        self.button.insert(name.to_string(), style);
        self
    }

    pub fn with_alert(mut self, name: &str, style: AlertStyle) -> Self {
        self.alert.insert(name.to_string(), style);
        self
    }

    pub fn with_badge(mut self, name: &str, style: BadgeStyle) -> Self {
        self.badge.insert(name.to_string(), style);
        self
    }

    pub fn with_modal(mut self, name: &str, style: ModalStyle) -> Self {
        self.modal.insert(name.to_string(), style);
        self
    }

    /// Layers `other` on top of this sheet.
    ///
    /// Presets in `other` replace same-named presets of the same component;
    /// everything else is kept.
    pub fn merge(mut self, other: PresetSheet) -> Self {
        self.button.extend(other.button);
        self.alert.extend(other.alert);
        self.badge.extend(other.badge);
        self.modal.extend(other.modal);
        #[cfg(feature = "legacy-tokens")]
        {
            self.spinner.extend(other.spinner);
            self.tab.extend(other.tab);
            self.avatar.extend(other.avatar);
            self.toast.extend(other.toast);
        }
        self
    }

    /// Preset names with the concern they belong to, grouped by concern.
    pub fn names(&self) -> Vec<(Concern, &str)> {
        let mut names = Vec::with_capacity(self.len());
        names.extend(self.button.keys().map(|k| (Concern::Button, k.as_str())));
        names.extend(self.alert.keys().map(|k| (Concern::Alert, k.as_str())));
        names.extend(self.badge.keys().map(|k| (Concern::Badge, k.as_str())));
        names.extend(self.modal.keys().map(|k| (Concern::Modal, k.as_str())));
        #[cfg(feature = "legacy-tokens")]
        {
            names.extend(self.spinner.keys().map(|k| (Concern::Spinner, k.as_str())));
            names.extend(self.tab.keys().map(|k| (Concern::Tab, k.as_str())));
            names.extend(self.avatar.keys().map(|k| (Concern::Avatar, k.as_str())));
            names.extend(self.toast.keys().map(|k| (Concern::Toast, k.as_str())));
        }
        names
    }

    /// Total number of presets across all components.
    pub fn len(&self) -> usize {
        let len = self.button.len() + self.alert.len() + self.badge.len() + self.modal.len();
        #[cfg(feature = "legacy-tokens")]
        let len = len + self.spinner.len() + self.tab.len() + self.avatar.len() + self.toast.len();
        len
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(feature = "legacy-tokens")]
impl PresetSheet {
    pub fn spinner(&self, name: &str) -> Option<&SpinnerStyle> {
        self.spinner.get(name)
    }

    pub fn tab(&self, name: &str) -> Option<&TabStyle> {
        self.tab.get(name)
    }

    pub fn avatar(&self, name: &str) -> Option<&AvatarStyle> {
        self.avatar.get(name)
    }

    pub fn toast(&self, name: &str) -> Option<&ToastStyle> {
        self.toast.get(name)
    }

    pub fn with_spinner(mut self, name: &str, style: SpinnerStyle) -> Self {
        self.spinner.insert(name.to_string(), style);
        self
    }

    pub fn with_tab(mut self, name: &str, style: TabStyle) -> Self {
        self.tab.insert(name.to_string(), style);
        self
    }

    pub fn with_avatar(mut self, name: &str, style: AvatarStyle) -> Self {
        self.avatar.insert(name.to_string(), style);
        self
    }

    pub fn with_toast(mut self, name: &str, style: ToastStyle) -> Self {
        self.toast.insert(name.to_string(), style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AlertVariant, BadgeSize, BadgeVariant, ButtonAlign, ButtonSize, ButtonType, ButtonVariant,
        ModalSize,
    };

    const SAMPLE: &str = r#"
button:
  confirm: { variant: default, size: lg, align: center, type: submit }
  cancel: { variant: ghost }
alert:
  save-failed: { variant: error }
badge:
  new: { variant: primary, size: sm }
modal:
  wide: { size: xl }
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            PresetFormat::from_path(Path::new("a/b.yaml")),
            Some(PresetFormat::Yaml)
        );
        assert_eq!(
            PresetFormat::from_path(Path::new("b.YML")),
            Some(PresetFormat::Yaml)
        );
        assert_eq!(
            PresetFormat::from_path(Path::new("b.json")),
            Some(PresetFormat::Json)
        );
        assert_eq!(PresetFormat::from_path(Path::new("b.toml")), None);
        assert_eq!(PresetFormat::from_path(Path::new("presets")), None);
    }

    #[test]
    fn test_from_yaml() {
        let sheet = PresetSheet::from_yaml(SAMPLE).unwrap();
        assert_eq!(sheet.len(), 5);

        let confirm = sheet.button("confirm").unwrap();
        assert_eq!(
            *confirm,
            ButtonStyle::new(ButtonVariant::Default)
                .size(ButtonSize::Lg)
                .align(ButtonAlign::Center)
                .kind(ButtonType::Submit)
        );

        assert_eq!(
            sheet.button("cancel").unwrap(),
            &ButtonStyle::new(ButtonVariant::Ghost)
        );
        assert_eq!(sheet.alert("save-failed").unwrap().variant, AlertVariant::Error);
        assert_eq!(sheet.badge("new").unwrap().variant, BadgeVariant::Primary);
        assert_eq!(sheet.modal("wide").unwrap().size, ModalSize::Xl);
        assert!(sheet.modal("narrow").is_none());
    }

    #[test]
    fn test_from_json() {
        let sheet = PresetSheet::from_json(
            r#"{ "badge": { "count": { "variant": "info", "size": "md" } } }"#,
        )
        .unwrap();
        let count = sheet.badge("count").unwrap();
        assert_eq!(count.variant, BadgeVariant::Info);
        assert_eq!(count.size, BadgeSize::Md);
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = PresetSheet::from_yaml("{}").unwrap();
        assert!(sheet.is_empty());
        assert_eq!(sheet, PresetSheet::new());
    }

    #[test]
    fn test_unknown_component_rejected() {
        let err = PresetSheet::from_yaml("carousel:\n  main: {}\n").unwrap_err();
        assert!(matches!(err, PresetError::Yaml(_)));
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = PresetSheet::from_yaml("button:\n  x: { size: huge }\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unknown button-size 'huge'"));
        assert!(msg.contains("sm, md, lg"));
    }

    #[test]
    fn test_label_matching_is_lenient() {
        let sheet = PresetSheet::from_yaml("button:\n  x: { variant: Outline, size: MD }\n").unwrap();
        let x = sheet.button("x").unwrap();
        assert_eq!(x.variant, ButtonVariant::Outline);
        assert_eq!(x.size, ButtonSize::Md);
    }

    #[test]
    fn test_merge_overrides_same_name() {
        let base = PresetSheet::new()
            .with_button("primary", ButtonStyle::new(ButtonVariant::Default))
            .with_button("secondary", ButtonStyle::new(ButtonVariant::Outline));
        let overlay = PresetSheet::new()
            .with_button("primary", ButtonStyle::new(ButtonVariant::Danger))
            .with_modal("confirm", ModalStyle { size: ModalSize::Md });

        let merged = base.merge(overlay);
        assert_eq!(merged.len(), 3);
        assert_eq!(merged.button("primary").unwrap().variant, ButtonVariant::Danger);
        assert_eq!(
            merged.button("secondary").unwrap().variant,
            ButtonVariant::Outline
        );
        assert_eq!(merged.modal("confirm").unwrap().size, ModalSize::Md);
    }

    #[test]
    fn test_names_grouped_by_concern() {
        let sheet = PresetSheet::from_yaml(SAMPLE).unwrap();
        let names = sheet.names();
        assert_eq!(
            names,
            vec![
                (Concern::Button, "cancel"),
                (Concern::Button, "confirm"),
                (Concern::Alert, "save-failed"),
                (Concern::Badge, "new"),
                (Concern::Modal, "wide"),
            ]
        );
    }

    #[test]
    fn test_yaml_output_uses_canonical_labels() {
        let sheet = PresetSheet::from_yaml("alert:\n  oops: { variant: ERROR }\n").unwrap();
        let yaml = sheet.to_yaml().unwrap();
        assert!(yaml.contains("variant: error"));
        assert!(!yaml.contains("button"));
        assert_eq!(PresetSheet::from_yaml(&yaml).unwrap(), sheet);
    }

    #[test]
    fn test_json_output_reloads() {
        let sheet = PresetSheet::from_yaml(SAMPLE).unwrap();
        let json = sheet.to_json().unwrap();
        assert!(json.contains("\"type\": \"submit\""));
        assert_eq!(PresetSheet::from_json(&json).unwrap(), sheet);
    }
}
