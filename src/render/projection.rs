use crate::{
    engine::vertex::Vertex,
    foundation::core::{BezPath, Point},
};

/// Drawing collaborator that receives a ring as path commands.
pub trait PathSink {
    /// Start a new path.
    fn begin_path(&mut self);
    /// Move the pen to the start anchor.
    fn move_to(&mut self, p: Point);
    /// Cubic bezier from the pen position to `to` via `c0` and `c1`.
    fn curve_to(&mut self, c0: Point, c1: Point, to: Point);
    /// Finish (and close) the path.
    fn end_path(&mut self);
}

/// Appends to the path; [`PathSink::end_path`] closes the current subpath.
impl PathSink for BezPath {
    fn begin_path(&mut self) {}

    fn move_to(&mut self, p: Point) {
        BezPath::move_to(self, p);
    }

    fn curve_to(&mut self, c0: Point, c1: Point, to: Point) {
        BezPath::curve_to(self, c0, c1, to);
    }

    fn end_path(&mut self) {
        self.close_path();
    }
}

/// One cubic segment ending at `anchor`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RingSegment {
    /// First control point.
    pub control0: Point,
    /// Second control point.
    pub control1: Point,
    /// End point of the segment.
    pub anchor: Point,
}

/// Ordered drawing sequence: a start anchor followed by `vertex_count` cubic segments.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RingPath {
    /// Where the pen starts; the last segment ends back here.
    pub start: Point,
    /// Segments in drawing order.
    pub segments: Vec<RingSegment>,
}

impl RingPath {
    /// True when there is nothing but the start anchor to draw.
    pub fn is_point(&self) -> bool {
        self.segments.is_empty()
    }

    /// Replay as `begin, move_to(start), curve_to * n, end`.
    pub fn emit<K>(&self, sink: &mut K)
    where
        K: PathSink + ?Sized,
    {
        sink.begin_path();
        sink.move_to(self.start);
        for seg in &self.segments {
            sink.curve_to(seg.control0, seg.control1, seg.anchor);
        }
        sink.end_path();
    }

    /// Closed kurbo path of the ring.
    pub fn to_bezpath(&self) -> BezPath {
        let mut path = BezPath::new();
        self.emit(&mut path);
        path
    }

    /// First control point of every segment, for debug overlays.
    pub fn control_markers(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().map(|seg| seg.control0)
    }
}

/// Project vertices into drawing order. Vertex 0 supplies the start; anchor-only vertices past it are skipped.
pub fn project(vertices: &[Vertex]) -> RingPath {
    let start = vertices.first().map(|v| v.anchor).unwrap_or(Point::ZERO);
    let segments = vertices
        .iter()
        .skip(1)
        .filter_map(|v| {
            v.controls.map(|c| RingSegment {
                control0: c.cp0.current,
                control1: c.cp1.current,
                anchor: v.anchor,
            })
        })
        .collect();
    RingPath { start, segments }
}

#[cfg(test)]
#[path = "../../tests/unit/render/projection.rs"]
mod tests;
