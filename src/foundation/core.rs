use crate::foundation::error::{BezringError, BezringResult};

pub use kurbo::{BezPath, Point, Vec2};

/// Host-supplied frame counter. Monotonically non-decreasing; never reset by the engine.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl FrameIndex {
    /// The frame that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

/// Raster target size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Build a canvas, rejecting sizes the CPU raster cannot address.
    pub fn new(width: u32, height: u32) -> BezringResult<Self> {
        if width == 0 || height == 0 {
            return Err(BezringError::validation("canvas width/height must be > 0"));
        }
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            return Err(BezringError::validation(format!(
                "canvas {width}x{height} exceeds {} pixels per side",
                u16::MAX
            )));
        }
        Ok(Self { width, height })
    }

    /// Centre of the canvas in pixel coordinates.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque white.
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::opaque(255, 0, 0);

    /// Opaque color from its channels.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray level, as used for plain backgrounds.
    pub const fn gray(level: u8) -> Self {
        Self::opaque(level, level, level)
    }

    /// Premultiplied byte layout matching the raster's pixel storage.
    pub fn to_premul_bytes(self) -> [u8; 4] {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        [
            premul(self.r, self.a),
            premul(self.g, self.a),
            premul(self.b, self.a),
            self.a,
        ]
    }
}

/// Componentwise `a + (b - a) * t` that returns `a` exactly at `t == 0` and `b` exactly at `t == 1`.
pub(crate) fn lerp_point(a: Point, b: Point, t: f64) -> Point {
    if t == 0.0 {
        return a;
    }
    if t == 1.0 {
        return b;
    }
    Point::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
