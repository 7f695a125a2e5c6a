// ── Canvas ────────────────────────────────────────────────────────────────────
//
// A square RGBA raster with just enough drawing primitives for the sunburst:
// hard-edged strokes and filled discs. No anti-aliasing, so every pixel is
// either untouched background or exactly the paint colour.

use std::io::Cursor;
use std::path::Path;

use glam::Vec2;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::{IconsetError, Result};
use crate::geometry::{distance_within_segment, points_in_circle, walk_line};

/// Square raster buffer owned by a single render.
///
/// Pixel centres sit on integer coordinates, so pixel `(x, y)` covers the
/// area `[x - 0.5, x + 0.5]` and geometry at `(8.0, 8.0)` lands on pixel 8.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a `size × size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgba<u8>) -> Self {
        Self { image: RgbaImage::from_pixel(size, size, background) }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.image.width()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Paint one pixel; coordinates outside the canvas are ignored.
    #[inline]
    fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Draw a straight stroke from `a` to `b`.
    ///
    /// A width of 0 or 1 is a Bresenham line between the rounded endpoints.
    /// Wider strokes cover every pixel whose centre is within `width / 2` of
    /// the segment, with flat ends.
    pub fn stroke_line(&mut self, a: Vec2, b: Vec2, width: u32, color: Rgba<u8>) {
        if width <= 1 {
            let (x1, y1) = (a.x.round() as i32, a.y.round() as i32);
            let (x2, y2) = (b.x.round() as i32, b.y.round() as i32);
            walk_line(x1, y1, x2, y2, |x, y| {
                self.put(x, y, color);
                true
            });
            return;
        }

        let half = width as f32 / 2.0;
        let min = a.min(b) - Vec2::splat(half);
        let max = a.max(b) + Vec2::splat(half);

        for y in (min.y.floor() as i32)..=(max.y.ceil() as i32) {
            for x in (min.x.floor() as i32)..=(max.x.ceil() as i32) {
                let p = Vec2::new(x as f32, y as f32);
                if distance_within_segment(p, a, b).is_some_and(|d| d <= half) {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Fill the disc of `radius` around `center`, snapped to whole pixels
    /// (see [`points_in_circle`]).
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba<u8>) {
        for (x, y) in points_in_circle(center, radius) {
            self.put(x, y, color);
        }
    }

    /// Encode as PNG (RGBA, lossless). Output depends only on the pixels.
    pub fn encode_png(&self) -> std::result::Result<Vec<u8>, image::ImageError> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Encode and write to `path`, creating or truncating the file.
    ///
    /// The parent directory must already exist.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let bytes = self.encode_png().map_err(|source| IconsetError::Image {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, bytes).map_err(|source| IconsetError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
