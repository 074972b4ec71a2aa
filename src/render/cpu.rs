use kurbo::{PathEl, Shape as _};

use crate::{
    foundation::core::{BezPath, Canvas, Point, Rgba8},
    foundation::error::{BezringError, BezringResult},
    render::projection::{PathSink, RingPath},
};

const TOLERANCE: f64 = 0.1;

/// Raster styling for [`CpuCanvas`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Fill applied by [`CpuCanvas::clear`].
    pub background: Rgba8,
    /// Ring stroke color.
    pub stroke: Rgba8,
    /// Ring stroke width in pixels.
    pub stroke_width: f64,
    /// Draw a dot at each segment's first control point.
    pub debug_markers: bool,
    /// Dot color for debug markers.
    pub marker_color: Rgba8,
    /// Dot radius for debug markers and for a ring with no segments.
    pub marker_radius: f64,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            background: Rgba8::gray(40),
            stroke: Rgba8::WHITE,
            stroke_width: 1.0,
            debug_markers: false,
            marker_color: Rgba8::RED,
            marker_radius: 2.5,
        }
    }
}

/// One rendered frame.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major RGBA8 bytes.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied by alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.data
            .get(i..i + 4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

/// Drawing collaborator that strokes rings onto a CPU pixmap.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    settings: RenderSettings,
    ctx: vello_cpu::RenderContext,
    path: BezPath,
    start: Option<Point>,
    curves: usize,
}

impl CpuCanvas {
    /// Canvas cleared to the background color.
    pub fn new(canvas: Canvas, settings: RenderSettings) -> BezringResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BezringError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BezringError::render("canvas height exceeds u16"))?;

        let mut out = Self {
            width,
            height,
            settings,
            ctx: vello_cpu::RenderContext::new(width, height),
            path: BezPath::new(),
            start: None,
            curves: 0,
        };
        out.clear();
        Ok(out)
    }

    /// Styling in use.
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// Drop everything drawn so far and fill with the background color.
    pub fn clear(&mut self) {
        self.ctx = vello_cpu::RenderContext::new(self.width, self.height);
        set_paint(&mut self.ctx, self.settings.background);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
    }

    /// Stroke `ring`, plus debug markers when enabled.
    pub fn draw_ring(&mut self, ring: &RingPath) {
        ring.emit(self);
        if self.settings.debug_markers {
            let color = self.settings.marker_color;
            let radius = self.settings.marker_radius;
            for p in ring.control_markers() {
                self.fill_dot(p, radius, color);
            }
        }
    }

    /// Rasterize everything drawn since the last clear.
    pub fn readback(&mut self) -> FrameRGBA {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    /// Clear, draw `ring`, and read the frame back.
    pub fn render(&mut self, ring: &RingPath) -> FrameRGBA {
        self.clear();
        self.draw_ring(ring);
        self.readback()
    }

    fn fill_dot(&mut self, center: Point, radius: f64, color: Rgba8) {
        let dot = kurbo::Circle::new(center, radius.max(0.5)).to_path(TOLERANCE);
        set_paint(&mut self.ctx, color);
        self.ctx.fill_path(&bezpath_to_cpu(&dot));
    }
}

impl PathSink for CpuCanvas {
    fn begin_path(&mut self) {
        self.path = BezPath::new();
        self.start = None;
        self.curves = 0;
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(p);
        self.start = Some(p);
    }

    fn curve_to(&mut self, c0: Point, c1: Point, to: Point) {
        self.path.curve_to(c0, c1, to);
        self.curves += 1;
    }

    fn end_path(&mut self) {
        let Some(start) = self.start else {
            return;
        };
        if self.curves == 0 {
            let radius = self.settings.marker_radius;
            let color = self.settings.stroke;
            self.fill_dot(start, radius, color);
            return;
        }

        self.path.close_path();
        let style = kurbo::Stroke::new(self.settings.stroke_width.max(0.0));
        let outline = kurbo::stroke(
            self.path.iter(),
            &style,
            &kurbo::StrokeOpts::default(),
            TOLERANCE,
        );
        set_paint(&mut self.ctx, self.settings.stroke);
        self.ctx.fill_path(&bezpath_to_cpu(&outline));
    }
}

fn set_paint(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
