use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop an icon set from being written.
///
/// All variants are filesystem-class failures; drawing itself cannot fail.
#[derive(Debug, Error)]
pub enum IconsetError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to serialize manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("failed to scan output directory: {0}")]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, IconsetError>;
