// =============================================================================
// GEOMETRY.RS — Polar ray maths for the sunburst
//
// Everything the renderer needs to turn "a ray at angle θ between radius r0
// and r1" into pixels:
// - Ray endpoints (polar → screen space, Y-down, 0° = right, clockwise)
// - Evenly spaced rings of rays
// - Bresenham walk for 1-pixel strokes
// - Point-to-segment distance for wider strokes
// - Filled discs
// =============================================================================

use glam::Vec2;

// =============================================================================
// RAYS
// =============================================================================

/// A single radial stroke anchored on the canvas centre.
///
/// Radii and width are in pixels; `angle_deg` follows screen convention, so
/// `-90.0` points straight up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub inner: f32,
    pub outer: f32,
    pub angle_deg: f32,
    /// Stroke width in whole pixels (never below 1).
    pub width: u32,
}

impl Ray {
    /// Unit vector pointing along the ray.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle_deg.to_radians())
    }

    /// Start (inner) and end (outer) points of the ray around `center`.
    pub fn endpoints(&self, center: Vec2) -> (Vec2, Vec2) {
        let dir = self.direction();
        (center + dir * self.inner, center + dir * self.outer)
    }
}

/// `count` rays evenly spread around the full circle, the first one at
/// `start_deg`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub count: u32,
    pub inner: f32,
    pub outer: f32,
    pub width: u32,
    pub start_deg: f32,
}

impl Ring {
    /// Angle between two neighbouring rays. Zero for an empty ring.
    pub fn step_deg(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        360.0 / self.count as f32
    }

    /// The rays of this ring in drawing order (clockwise from `start_deg`).
    pub fn rays(&self) -> impl Iterator<Item = Ray> + use<> {
        let ring = *self;
        let step = ring.step_deg();
        (0..ring.count).map(move |i| Ray {
            inner: ring.inner,
            outer: ring.outer,
            angle_deg: ring.start_deg + i as f32 * step,
            width: ring.width,
        })
    }
}

// =============================================================================
// BRESENHAM'S LINE ALGORITHM
// =============================================================================

/// Iterate along a line, calling a function for each point.
/// Stops early if the function returns false.
///
/// Both endpoints are visited. Returns true if the line completed, false if
/// it was interrupted.
pub fn walk_line(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    mut callback: impl FnMut(i32, i32) -> bool,
) -> bool {
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();
    let sx = if x1 < x2 { 1 } else { -1 };
    let sy = if y1 < y2 { 1 } else { -1 };

    let mut x = x1;
    let mut y = y1;
    let mut err = dx - dy;

    loop {
        if !callback(x, y) {
            return false;
        }

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;

        if e2 > -dy {
            err -= dy;
            x += sx;
        }

        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    true
}

// =============================================================================
// DISTANCES
// =============================================================================

/// Perpendicular distance from `p` to the segment `a → b`.
///
/// Returns `None` when `p` projects outside the segment, which gives strokes
/// flat (butt) ends. A zero-length segment degenerates to point distance.
pub fn distance_within_segment(p: Vec2, a: Vec2, b: Vec2) -> Option<f32> {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return Some(p.distance(a));
    }

    let t = (p - a).dot(ab) / len_sq;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }

    Some(p.distance(a + ab * t))
}

// =============================================================================
// CIRCLE/RADIUS OPERATIONS
// =============================================================================

/// Get all integer points of the disc of `radius` around a (possibly
/// fractional) centre.
///
/// The disc's bounding box is first snapped down to whole pixels, then every
/// pixel whose centre lies inside the circle inscribed in that pixel box is
/// kept. A small disc around a pixel corner therefore fills the 2×2 block
/// touching that corner instead of collapsing onto one pixel.
///
/// Points are returned row by row, top to bottom. A negative or NaN radius
/// yields no points.
pub fn points_in_circle(center: Vec2, radius: f32) -> Vec<(i32, i32)> {
    let mut points = Vec::new();
    if radius.is_nan() || radius < 0.0 {
        return points;
    }

    let min = (center - Vec2::splat(radius)).floor();
    let max = (center + Vec2::splat(radius)).floor();
    let snapped_center = (min + max) / 2.0;
    let r = (max.x - min.x + 1.0) / 2.0;
    let r_sq = r * r;

    for y in (min.y as i32)..=(max.y as i32) {
        for x in (min.x as i32)..=(max.x as i32) {
            let d = Vec2::new(x as f32, y as f32) - snapped_center;
            if d.length_squared() <= r_sq {
                points.push((x, y));
            }
        }
    }

    points
}
