use anyhow::Context;
use log::info;

use sunburst_iconset::iconset::warn_unexpected_files;
use sunburst_iconset::{GeneratorConfig, generate_all};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let config = GeneratorConfig::default();
    let out = &config.output_dir;
    info!(
        "Generating icons in: {} (project {})",
        out.strip_prefix(&config.project_dir).unwrap_or(out.as_path()).display(),
        config.project_dir.display()
    );

    let manifest = generate_all(out)
        .with_context(|| format!("icon set generation failed in {}", out.display()))?;

    // Leftovers from earlier icon designs would still be bundled by Xcode.
    warn_unexpected_files(out);

    info!("Done! {} icons generated successfully.", manifest.images.len());
    Ok(())
}
