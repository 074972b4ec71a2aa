use std::f64::consts::PI;

use crate::{
    animation::{ease::Ease, tween::ControlPair},
    engine::config::RingConfig,
    foundation::core::Point,
    geometry::{functions::RingGeometry, sample::SampleSource},
};

/// The two tweened control points of a segment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VertexControls {
    /// First control point of the incoming cubic segment.
    pub cp0: ControlPair,
    /// Second control point of the incoming cubic segment.
    pub cp1: ControlPair,
}

impl VertexControls {
    fn advance(&mut self, progress: f64, ease: Ease) {
        self.cp0.advance(progress, ease);
        self.cp1.advance(progress, ease);
    }

    fn shift(&mut self, next_target: Point) {
        self.cp0.shift(next_target);
        self.cp1.shift(next_target);
    }
}

/// One point of the ring.
///
/// Index 0 is the path's start anchor and carries no control points. Every other vertex ends a
/// cubic segment whose control points are tweened each cycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Vertex {
    /// Position in the ring, `0..=vertex_count`.
    pub index: u32,
    /// On-curve point; fixed until the next regeneration.
    pub anchor: Point,
    /// Angle the control points are evaluated at. New targets are re-derived from it.
    pub angle: f64,
    /// Tween state, absent on the start anchor.
    pub controls: Option<VertexControls>,
}

impl Vertex {
    /// True only for the start anchor.
    pub fn is_anchor_only(&self) -> bool {
        self.controls.is_none()
    }

    /// Move both control points to the eased position for `progress`. No-op on the start anchor.
    pub fn advance(&mut self, progress: f64, ease: Ease) {
        if let Some(controls) = self.controls.as_mut() {
            controls.advance(progress, ease);
        }
    }

    /// Begin a new cycle with a freshly drawn target, keeping the anchor.
    pub fn reroll<G, S>(&mut self, geometry: &G, config: &RingConfig, sampler: &mut S)
    where
        G: RingGeometry + ?Sized,
        S: SampleSource + ?Sized,
    {
        if let Some(controls) = self.controls.as_mut() {
            let next = control_point_at(geometry, config, self.angle, sampler.next_sample());
            controls.shift(next);
        }
    }
}

/// Half the angle between consecutive anchors: `π / vertex_count`, or `0` for an empty ring.
pub fn angular_step(vertex_count: u32) -> f64 {
    if vertex_count == 0 {
        0.0
    } else {
        PI / f64::from(vertex_count)
    }
}

/// Control-point angle of vertex `index >= 1`: odd multiples of `step`.
pub fn vertex_angle(index: u32, step: f64) -> f64 {
    step + step * 2.0 * (f64::from(index) - 1.0)
}

/// World-space anchor at `angle`.
pub fn anchor_at<G>(geometry: &G, config: &RingConfig, angle: f64) -> Point
where
    G: RingGeometry + ?Sized,
{
    config.center + geometry.position(angle) * config.effective_radius()
}

/// World-space control point at `angle` for one random draw.
pub fn control_point_at<G>(geometry: &G, config: &RingConfig, angle: f64, sample: f64) -> Point
where
    G: RingGeometry + ?Sized,
{
    let scale = config.effective_radius()
        * geometry.contraction(angle, sample)
        * config.effective_contraction_size();
    config.center + geometry.control_point(angle, sample) * scale
}

/// Start anchor at angle `0`, which the last segment closes onto.
pub fn make_start_vertex<G>(geometry: &G, config: &RingConfig) -> Vertex
where
    G: RingGeometry + ?Sized,
{
    Vertex {
        index: 0,
        anchor: anchor_at(geometry, config, 0.0),
        angle: 0.0,
        controls: None,
    }
}

/// Build vertex `index` at control angle `angle`; its anchor sits one `step` further round.
///
/// Draws two samples: one for the origin (also the current value) and one for the target.
pub fn make_vertex<G, S>(
    index: u32,
    angle: f64,
    step: f64,
    geometry: &G,
    config: &RingConfig,
    sampler: &mut S,
) -> Vertex
where
    G: RingGeometry + ?Sized,
    S: SampleSource + ?Sized,
{
    let origin = control_point_at(geometry, config, angle, sampler.next_sample());
    let target = control_point_at(geometry, config, angle, sampler.next_sample());
    let pair = ControlPair::new(origin, target);

    Vertex {
        index,
        anchor: anchor_at(geometry, config, angle + step),
        angle,
        controls: Some(VertexControls {
            cp0: pair,
            cp1: pair,
        }),
    }
}

/// Full vertex array for `config.vertex_count` segments: the start anchor plus one vertex per segment.
pub fn make_vertices<G, S>(geometry: &G, config: &RingConfig, sampler: &mut S) -> Vec<Vertex>
where
    G: RingGeometry + ?Sized,
    S: SampleSource + ?Sized,
{
    let step = angular_step(config.vertex_count);
    let mut out = Vec::with_capacity(config.vertex_count as usize + 1);
    out.push(make_start_vertex(geometry, config));
    for index in 1..=config.vertex_count {
        out.push(make_vertex(
            index,
            vertex_angle(index, step),
            step,
            geometry,
            config,
            sampler,
        ));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/engine/vertex.rs"]
mod tests;
