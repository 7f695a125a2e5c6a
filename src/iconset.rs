// =============================================================================
// ICONSET.RS — Writing the AppIcon.appiconset
//
// A fixed table of macOS icon slots, one PNG per slot, plus the
// Contents.json manifest the asset catalogue reads.
// =============================================================================

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{IconsetError, Result};
use crate::renderer;

/// File name of the asset catalogue manifest.
pub const MANIFEST_FILENAME: &str = "Contents.json";

// ── IconSpec ──────────────────────────────────────────────────────────────────

/// One required image: a logical point size at a display scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconSpec {
    pub base_size: u32,
    pub scale: u32,
    pub pixel_size: u32,
}

impl IconSpec {
    pub const fn new(base_size: u32, scale: u32) -> Self {
        Self { base_size, scale, pixel_size: base_size * scale }
    }

    /// `icon_16x16.png` at 1x, `icon_16x16@2x.png` at 2x.
    pub fn filename(&self) -> String {
        let b = self.base_size;
        if self.scale > 1 {
            format!("icon_{b}x{b}@{}x.png", self.scale)
        } else {
            format!("icon_{b}x{b}.png")
        }
    }
}

/// Every macOS app icon slot, in manifest order.
pub const ICON_SPECS: [IconSpec; 10] = [
    IconSpec::new(16, 1),
    IconSpec::new(16, 2),
    IconSpec::new(32, 1),
    IconSpec::new(32, 2),
    IconSpec::new(128, 1),
    IconSpec::new(128, 2),
    IconSpec::new(256, 1),
    IconSpec::new(256, 2),
    IconSpec::new(512, 1),
    IconSpec::new(512, 2),
];

// ── Manifest ──────────────────────────────────────────────────────────────────

/// One `images[]` record. Field order is the serialized key order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub filename: String,
    pub idiom: String,
    pub scale: String,
    pub size: String,
}

impl From<&IconSpec> for ManifestEntry {
    fn from(spec: &IconSpec) -> Self {
        Self {
            filename: spec.filename(),
            idiom: "mac".to_string(),
            scale: format!("{}x", spec.scale),
            size: format!("{0}x{0}", spec.base_size),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self { author: "xcode".to_string(), version: 1 }
    }
}

/// The whole `Contents.json` document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestEntry>,
    pub info: ManifestInfo,
}

impl Manifest {
    /// One entry per spec, same order.
    pub fn from_specs(specs: &[IconSpec]) -> Self {
        Self {
            images: specs.iter().map(ManifestEntry::from).collect(),
            info: ManifestInfo::default(),
        }
    }

    /// Pretty-printed with two-space indentation and no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `manifest` to `dir/Contents.json`, replacing any existing file.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILENAME);
    let json = manifest.to_json()?;
    std::fs::write(&path, json).map_err(|source| IconsetError::Io { path: path.clone(), source })?;
    Ok(path)
}

// ── generate_all ──────────────────────────────────────────────────────────────

/// Render every entry of [`ICON_SPECS`] into `output_dir`, then write the
/// manifest.
///
/// `output_dir` must already exist. The first failed write aborts the run;
/// files written before it stay on disk.
pub fn generate_all(output_dir: &Path) -> Result<Manifest> {
    for spec in &ICON_SPECS {
        let filename = spec.filename();
        let path = output_dir.join(&filename);

        info!(
            "Generating {filename} ({0}x{0} pixels)...",
            spec.pixel_size
        );
        renderer::render(spec.pixel_size).save_png(&path)?;
    }

    let manifest = Manifest::from_specs(&ICON_SPECS);
    let path = write_manifest(output_dir, &manifest)?;
    info!("Updated {}", path.display());

    Ok(manifest)
}

// ── audit ─────────────────────────────────────────────────────────────────────

/// Difference between what an icon set directory holds and what
/// [`generate_all`] produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Expected files that are absent, in manifest order.
    pub missing: Vec<String>,
    /// Files present that the generator does not produce, sorted.
    pub unexpected: Vec<String>,
}

impl AuditReport {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }
}

/// Every file name [`generate_all`] writes, manifest last.
pub fn expected_files() -> Vec<String> {
    ICON_SPECS
        .iter()
        .map(IconSpec::filename)
        .chain(std::iter::once(MANIFEST_FILENAME.to_string()))
        .collect()
}

/// Compare the regular files directly inside `dir` with [`expected_files`].
/// Subdirectories are ignored.
pub fn audit(dir: &Path) -> Result<AuditReport> {
    let mut present = BTreeSet::new();

    for entry in walkdir::WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        debug!("audit: found {name}");
        present.insert(name);
    }

    let expected = expected_files();
    let missing = expected.iter().filter(|f| !present.contains(*f)).cloned().collect();
    let unexpected = present.into_iter().filter(|f| !expected.contains(f)).collect();

    Ok(AuditReport { missing, unexpected })
}

/// Warn about every file in `dir` that [`generate_all`] did not produce and
/// return how many there were.
///
/// Never fails: a directory that cannot be scanned is logged and counted as
/// clean, since the icon set itself has already been written.
pub fn warn_unexpected_files(dir: &Path) -> usize {
    match audit(dir) {
        Ok(report) => {
            for name in &report.unexpected {
                warn!("{name} is not part of the generated icon set");
            }
            report.unexpected.len()
        }
        Err(e) => {
            warn!("could not check {} for stale files: {e}", dir.display());
            0
        }
    }
}
