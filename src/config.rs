use std::path::{Path, PathBuf};

// ── GeneratorConfig ───────────────────────────────────────────────────────────

/// Location of the app icon set, relative to the project root.
pub const APPICONSET_SUBPATH: &str =
    "apps/ClaudeTraceMenuBar/ClaudeTraceMenuBar/Assets.xcassets/AppIcon.appiconset";

/// Resolved paths for one generator run.
///
/// - **project_dir** is the repository root. This crate lives one level below
///   it, so the root is the parent of the crate's manifest directory.
/// - **output_dir** is the asset catalogue icon set inside the project. It is
///   never created by the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub project_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl GeneratorConfig {
    /// Paths for a project rooted at `project_dir`.
    pub fn for_project(project_dir: impl Into<PathBuf>) -> Self {
        let project_dir = project_dir.into();
        let output_dir = project_dir.join(APPICONSET_SUBPATH);
        Self { project_dir, output_dir }
    }
}

impl Default for GeneratorConfig {
    /// Derived from where this crate sits on disk, fixed at compile time.
    fn default() -> Self {
        let crate_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self::for_project(crate_dir.parent().unwrap_or(crate_dir))
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
