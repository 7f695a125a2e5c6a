// =============================================================================
// RENDERER.RS — The sunburst logo
//
// Two interleaved rings of 16 rays around a centre dot, on a cream
// background. Every proportion is relative to the icon size so the same
// layout is reused for every entry in the icon set.
// =============================================================================

use glam::Vec2;
use image::Rgba;

use crate::canvas::Canvas;
use crate::geometry::Ring;

// ── Palette ─────────────────────────────────────────────────────────────────
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([248, 245, 240, 255]);
pub const SUNBURST_COLOR: Rgba<u8> = Rgba([204, 102, 68, 255]);
pub const CENTER_DOT_COLOR: Rgba<u8> = SUNBURST_COLOR;

// ── Proportions ─────────────────────────────────────────────────────────────

/// Empty border on each side, as a fraction of the icon size.
const MARGIN: f32 = 0.1;
const RAYS_PER_RING: u32 = 16;
/// Angle of the first outer ray (straight up).
const START_DEG: f32 = -90.0;

/// Radii are fractions of the available diameter, widths fractions of the
/// full icon size.
struct RingProportions {
    start: f32,
    end: f32,
    width: f32,
}

const OUTER_RING: RingProportions = RingProportions { start: 0.25, end: 0.48, width: 0.025 };
const INNER_RING: RingProportions = RingProportions { start: 0.12, end: 0.22, width: 0.015 };
const CENTER_DOT_RADIUS: f32 = 0.06;

// ── SunburstLayout ──────────────────────────────────────────────────────────

/// Resolved pixel geometry of the logo for one icon size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunburstLayout {
    pub size: u32,
    pub center: Vec2,
    /// Diameter left once the margin is taken off both sides.
    pub available: f32,
    pub outer: Ring,
    /// Offset from `outer` by half a step so inner rays sit between outer ones.
    pub inner: Ring,
    pub dot_radius: f32,
}

impl SunburstLayout {
    /// Compute the layout for a `pixel_size × pixel_size` icon. Zero is
    /// treated as 1.
    pub fn for_size(pixel_size: u32) -> Self {
        let size = pixel_size.max(1);
        let s = size as f32;
        let margin = s * MARGIN;
        let available = s - margin * 2.0;

        let ring = |p: &RingProportions, start_deg: f32| Ring {
            count: RAYS_PER_RING,
            inner: available * p.start,
            outer: available * p.end,
            width: stroke_width(s, p.width),
            start_deg,
        };

        let outer = ring(&OUTER_RING, START_DEG);
        let inner = ring(&INNER_RING, START_DEG + outer.step_deg() / 2.0);

        Self {
            size,
            center: Vec2::splat(s / 2.0),
            available,
            outer,
            inner,
            dot_radius: available * CENTER_DOT_RADIUS,
        }
    }
}

/// `max(1, size * fraction)` truncated to whole pixels.
fn stroke_width(size: f32, fraction: f32) -> u32 {
    (size * fraction).max(1.0) as u32
}

// ── render ──────────────────────────────────────────────────────────────────

/// Draw the sunburst into a fresh `pixel_size × pixel_size` canvas.
///
/// Outer rays first, then inner rays, then the centre dot on top. The result
/// is fully opaque and uses only [`BACKGROUND_COLOR`] and [`SUNBURST_COLOR`].
pub fn render(pixel_size: u32) -> Canvas {
    let layout = SunburstLayout::for_size(pixel_size);
    let mut canvas = Canvas::new(layout.size, BACKGROUND_COLOR);

    for ring in [layout.outer, layout.inner] {
        for ray in ring.rays() {
            let (a, b) = ray.endpoints(layout.center);
            canvas.stroke_line(a, b, ray.width, SUNBURST_COLOR);
        }
    }

    canvas.fill_circle(layout.center, layout.dot_radius, CENTER_DOT_COLOR);
    canvas
}
