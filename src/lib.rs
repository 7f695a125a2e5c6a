pub mod canvas;
pub mod config;
pub mod error;
pub mod geometry;
pub mod iconset;
pub mod renderer;

pub use canvas::Canvas;
pub use config::GeneratorConfig;
pub use error::IconsetError;
pub use iconset::{audit, generate_all, IconSpec, Manifest, ICON_SPECS};
pub use renderer::render;
