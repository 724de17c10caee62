//! Loading preset sheets from disk.

use std::fs;

use ganui_tokens::{
    AlertVariant, ButtonSize, ButtonType, ButtonVariant, ModalSize, PresetError, PresetSheet,
};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_yaml_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "presets.yaml",
        "button:\n  save: { variant: default, size: md, type: submit }\nmodal:\n  sheet: { size: full }\n",
    );

    let sheet = PresetSheet::from_path(&path).unwrap();
    let save = sheet.button("save").unwrap();
    assert_eq!(save.variant, ButtonVariant::Default);
    assert_eq!(save.size, ButtonSize::Md);
    assert_eq!(save.kind, ButtonType::Submit);
    assert_eq!(sheet.modal("sheet").unwrap().size, ModalSize::Full);
}

#[test]
fn test_load_yml_and_json_files() {
    let dir = TempDir::new().unwrap();
    let yml = write(&dir, "a.yml", "alert:\n  warn: { variant: warning }\n");
    let json = write(
        &dir,
        "b.json",
        r#"{ "alert": { "warn": { "variant": "info" } } }"#,
    );

    let a = PresetSheet::from_path(&yml).unwrap();
    let b = PresetSheet::from_path(&json).unwrap();
    assert_eq!(a.alert("warn").unwrap().variant, AlertVariant::Warning);
    assert_eq!(b.alert("warn").unwrap().variant, AlertVariant::Info);

    // Later sheets win.
    let merged = a.merge(b);
    assert_eq!(merged.alert("warn").unwrap().variant, AlertVariant::Info);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "presets.toml", "[button]\n");

    let err = PresetSheet::from_path(&path).unwrap_err();
    assert!(matches!(err, PresetError::UnsupportedFormat { .. }));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = PresetSheet::from_path(dir.path().join("absent.yaml")).unwrap_err();
    match err {
        PresetError::Io { path, source } => {
            assert!(path.ends_with("absent.yaml"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_invalid_label_in_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "bad.json", r#"{ "modal": { "m": { "size": "tiny" } } }"#);

    let err = PresetSheet::from_path(&path).unwrap_err();
    assert!(matches!(err, PresetError::Json(_)));
    assert!(err.to_string().contains("unknown modal-size 'tiny'"));
}

#[cfg(not(feature = "legacy-tokens"))]
#[test]
fn test_removed_component_rejected() {
    let err = PresetSheet::from_yaml("spinner:\n  busy: { size: md }\n").unwrap_err();
    assert!(err.to_string().contains("spinner"));
}

#[cfg(feature = "legacy-tokens")]
#[test]
fn test_legacy_components_load() {
    use ganui_tokens::{SpinnerSize, ToastPosition, ToastVariant};

    let sheet = PresetSheet::from_yaml(
        "spinner:\n  busy: { size: xl }\ntoast:\n  saved: { variant: success, position: BottomRight }\n",
    )
    .unwrap();
    assert_eq!(sheet.spinner("busy").unwrap().size, SpinnerSize::Xl);
    let saved = sheet.toast("saved").unwrap();
    assert_eq!(saved.variant, ToastVariant::Success);
    assert_eq!(saved.position, ToastPosition::BottomRight);
}

#[cfg(feature = "legacy-tokens")]
#[test]
fn test_legacy_builders_round_trip_through_yaml() {
    use ganui_tokens::preset::{AvatarStyle, SpinnerStyle, TabStyle, ToastStyle};
    use ganui_tokens::{AvatarSize, SpinnerSize, TabVariant, ToastPosition, ToastVariant};

    let sheet = PresetSheet::new()
        .with_spinner("busy", SpinnerStyle { size: SpinnerSize::Lg })
        .with_tab("nav", TabStyle { variant: TabVariant::Pills })
        .with_avatar("profile", AvatarStyle { size: AvatarSize::Xs })
        .with_toast(
            "saved",
            ToastStyle {
                variant: ToastVariant::Success,
                position: ToastPosition::TopCenter,
            },
        );
    assert_eq!(sheet.len(), 4);

    let reloaded = PresetSheet::from_yaml(&sheet.to_yaml().unwrap()).unwrap();
    assert_eq!(reloaded.spinner("busy").unwrap().size, SpinnerSize::Lg);
    assert_eq!(reloaded.tab("nav").unwrap().variant, TabVariant::Pills);
    assert_eq!(reloaded.avatar("profile").unwrap().size, AvatarSize::Xs);
    assert_eq!(
        reloaded.toast("saved").unwrap().position,
        ToastPosition::TopCenter
    );
}
