use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use sunburst_iconset::iconset::{
    audit, expected_files, generate_all, warn_unexpected_files, write_manifest, IconSpec,
    Manifest, ICON_SPECS, MANIFEST_FILENAME,
};
use sunburst_iconset::IconsetError;

fn dir_listing(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn digests(dir: &Path) -> Vec<(String, String)> {
    dir_listing(dir)
        .into_iter()
        .map(|name| {
            let bytes = fs::read(dir.join(&name)).unwrap();
            (name, hex::encode(Sha256::digest(&bytes)))
        })
        .collect()
}

// ── generate_all ────────────────────────────────────────────────────────────

#[test]
fn writes_exactly_ten_pngs_and_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = generate_all(dir.path()).unwrap();

    let expected: BTreeSet<String> = expected_files().into_iter().collect();
    assert_eq!(dir_listing(dir.path()), expected);
    assert_eq!(manifest.images.len(), 10);

    for spec in &ICON_SPECS {
        let (w, h) = image::image_dimensions(dir.path().join(spec.filename())).unwrap();
        assert_eq!((w, h), (spec.pixel_size, spec.pixel_size), "{}", spec.filename());
    }
}

#[test]
fn end_to_end_file_names_and_manifest_head() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).unwrap();

    let (w, _) = image::image_dimensions(dir.path().join("icon_16x16@2x.png")).unwrap();
    assert_eq!(w, 32);
    let (w, _) = image::image_dimensions(dir.path().join("icon_512x512@2x.png")).unwrap();
    assert_eq!(w, 1024);

    let text = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        json["images"][0],
        serde_json::json!({"filename":"icon_16x16.png","idiom":"mac","scale":"1x","size":"16x16"})
    );
    assert_eq!(json["info"], serde_json::json!({"author": "xcode", "version": 1}));

    // Written manifest parses back to what was returned.
    let parsed: Manifest = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, Manifest::from_specs(&ICON_SPECS));
}

#[test]
fn second_run_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate_all(first.path()).unwrap();
    generate_all(second.path()).unwrap();
    // And once more over existing files.
    generate_all(second.path()).unwrap();

    assert_eq!(digests(first.path()), digests(second.path()));
}

#[test]
fn missing_output_dir_fails_without_creating_it() {
    let root = tempfile::tempdir().unwrap();
    let missing = root.path().join("AppIcon.appiconset");

    let err = generate_all(&missing).unwrap_err();
    match err {
        IconsetError::Io { path, .. } => assert!(path.ends_with("icon_16x16.png")),
        other => panic!("expected Io error, got {other:?}"),
    }
    assert!(!missing.exists());
}

// ── Manifest ────────────────────────────────────────────────────────────────

#[test]
fn manifest_keys_keep_their_order() {
    let json = Manifest::from_specs(&ICON_SPECS).to_json().unwrap();
    let f = json.find("\"filename\"").unwrap();
    let i = json.find("\"idiom\"").unwrap();
    let s = json.find("\"scale\"").unwrap();
    let z = json.find("\"size\"").unwrap();
    assert!(f < i && i < s && s < z);
    assert!(json.find("\"images\"").unwrap() < json.find("\"info\"").unwrap());
}

#[test]
fn manifest_is_indented_with_two_spaces() {
    let json = Manifest::from_specs(&ICON_SPECS[..1]).to_json().unwrap();
    let expected = r#"{
  "images": [
    {
      "filename": "icon_16x16.png",
      "idiom": "mac",
      "scale": "1x",
      "size": "16x16"
    }
  ],
  "info": {
    "author": "xcode",
    "version": 1
  }
}"#;
    assert_eq!(json, expected);
}

#[test]
fn manifest_order_follows_specs() {
    let manifest = Manifest::from_specs(&ICON_SPECS);
    let names: Vec<&str> = manifest.images.iter().map(|e| e.filename.as_str()).collect();
    let specs: Vec<String> = ICON_SPECS.iter().map(IconSpec::filename).collect();
    assert_eq!(names, specs);
    assert_eq!(manifest.images[1].scale, "2x");
    assert_eq!(manifest.images[1].size, "16x16");
}

#[test]
fn write_manifest_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MANIFEST_FILENAME), "stale").unwrap();
    let path = write_manifest(dir.path(), &Manifest::from_specs(&ICON_SPECS)).unwrap();
    let text = fs::read_to_string(path).unwrap();
    assert!(text.starts_with('{') && text.ends_with('}'));
}

// ── audit ───────────────────────────────────────────────────────────────────

#[test]
fn audit_empty_dir_reports_everything_missing() {
    let dir = tempfile::tempdir().unwrap();
    let report = audit(dir.path()).unwrap();
    assert_eq!(report.missing, expected_files());
    assert!(report.unexpected.is_empty());
    assert!(!report.is_complete());
}

#[test]
fn audit_after_generation_is_complete() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).unwrap();
    assert!(audit(dir.path()).unwrap().is_complete());
}

#[test]
fn audit_flags_stale_and_deleted_files() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).unwrap();
    fs::write(dir.path().join("icon_1024.png"), b"old").unwrap();
    fs::remove_file(dir.path().join("icon_32x32.png")).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let report = audit(dir.path()).unwrap();
    assert_eq!(report.missing, vec!["icon_32x32.png".to_string()]);
    assert_eq!(report.unexpected, vec!["icon_1024.png".to_string()]);
}

#[test]
fn audit_missing_dir_is_error() {
    let root = tempfile::tempdir().unwrap();
    let err = audit(&root.path().join("gone")).unwrap_err();
    assert!(matches!(err, IconsetError::Walk(_)), "{err:?}");
}

// ── warn_unexpected_files ───────────────────────────────────────────────────

#[test]
fn stale_file_count_after_generation() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path()).unwrap();
    assert_eq!(warn_unexpected_files(dir.path()), 0);
    fs::write(dir.path().join("icon_1024.png"), b"old").unwrap();
    assert_eq!(warn_unexpected_files(dir.path()), 1);
}

#[test]
fn unreadable_dir_only_warns() {
    let root = tempfile::tempdir().unwrap();
    assert_eq!(warn_unexpected_files(&root.path().join("gone")), 0);
}
