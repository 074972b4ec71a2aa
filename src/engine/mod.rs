//! Procedural vertex/tween engine.
//!
//! A [`RingAnimator`](animator::RingAnimator) owns one ring's vertices and advances them once per
//! host frame. Configuration is passed into every refresh; the engine holds no shared state.

/// Cycle controller.
pub mod animator;
/// Live configuration and the snapshot taken at each regeneration.
pub mod config;
/// Geometry-affecting configuration drift.
pub mod detector;
/// Vertex records and the factory that builds them.
pub mod vertex;
