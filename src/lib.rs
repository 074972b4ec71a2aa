//! bezring renders an animated closed curve built from cubic bezier segments whose control points
//! keep morphing between randomized states.
//!
//! # Frame flow
//!
//! 1. **Refresh**: the host calls [`RingAnimator::refresh`] with its frame counter and the live
//!    [`RingConfig`]. On a cycle boundary every control point gets a new target (a reroll); if a
//!    geometry-affecting field changed, the whole vertex array is rebuilt (a regeneration).
//! 2. **Project**: [`RingAnimator::path`] turns the vertices into a [`RingPath`], a start anchor
//!    followed by one cubic segment per vertex.
//! 3. **Draw**: the path is replayed into any [`PathSink`], e.g. a [`kurbo::BezPath`] or the
//!    bundled [`CpuCanvas`].
//!
//! Geometry ([`RingGeometry`]) and randomness ([`SampleSource`]) are injected; the engine owns no
//! global state and never blocks.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Easing and per-control-point tweens.
pub mod animation;
/// Vertex factory, change detection, and the cycle controller.
pub mod engine;
/// Geometry functions and random sample sources.
pub mod geometry;
/// Render projection and the CPU raster host.
pub mod render;
/// JSON scene documents for hosts.
pub mod scene;

pub use crate::animation::ease::Ease;
pub use crate::animation::tween::{ControlPair, TweenSpec, interpolate};
pub use crate::engine::animator::{CycleAction, RefreshOutcome, RingAnimator, cycle_progress};
pub use crate::engine::config::{ConfigSnapshot, MIN_CYCLE_LENGTH, RegenPolicy, RingConfig};
pub use crate::engine::detector::{Divergence, diverges};
pub use crate::engine::vertex::{
    Vertex, VertexControls, anchor_at, angular_step, control_point_at, make_start_vertex,
    make_vertex, make_vertices, vertex_angle,
};
pub use crate::foundation::core::{BezPath, Canvas, FrameIndex, Point, Rgba8, Vec2};
pub use crate::foundation::error::{BezringError, BezringResult};
pub use crate::geometry::functions::{
    CircleGeometry, Contraction, MAX_FREQ, ProceduralGeometry, RingGeometry, Wave, WaveKind, WavePair,
};
pub use crate::geometry::sample::{
    FixedSampler, Rng64, SAMPLE_SPAN, SampleSource, SeededSampler, value_noise,
};
pub use crate::render::cpu::{CpuCanvas, FrameRGBA, RenderSettings};
pub use crate::render::projection::{PathSink, RingPath, RingSegment, project};
pub use crate::scene::SceneFile;
