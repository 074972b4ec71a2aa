use crate::{
    engine::{
        config::{ConfigSnapshot, MIN_CYCLE_LENGTH, RingConfig},
        detector,
        vertex::{Vertex, angular_step, make_vertices},
    },
    foundation::core::FrameIndex,
    geometry::{functions::RingGeometry, sample::SampleSource},
    render::projection::{RingPath, project},
};

/// What a refresh did before advancing the tweens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleAction {
    /// Mid-cycle frame: tweens advanced only.
    Tween,
    /// Cycle boundary: every control point got a new target.
    Reroll,
    /// Geometry-affecting drift: the vertex array was rebuilt.
    Regenerate,
}

/// Result of one [`RingAnimator::refresh`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RefreshOutcome {
    /// Normalized cycle progress used for this frame, in `[0, 1]`.
    pub progress: f64,
    /// Work done on this frame.
    pub action: CycleAction,
}

/// Progress within the cycle: `(frame mod len) / (len - 1)`, with `len` clamped to at least 2.
///
/// Reaches exactly `1.0` on the last frame of a cycle and `0.0` on the first.
pub fn cycle_progress(frame: FrameIndex, cycle_length: u64) -> f64 {
    let len = cycle_length.max(MIN_CYCLE_LENGTH);
    (frame.0 % len) as f64 / (len - 1) as f64
}

/// Cycle controller for one ring.
///
/// Owns the vertex array and advances it once per host frame. The host supplies the frame counter
/// and the live configuration on every call; pausing is simply not calling [`RingAnimator::refresh`].
pub struct RingAnimator<G, S> {
    geometry: G,
    sampler: S,
    vertices: Vec<Vertex>,
    step: f64,
    snapshot: ConfigSnapshot,
    progress: f64,
    generation: u64,
    cycle: u64,
    cycle_clamped: bool,
}

impl<G, S> RingAnimator<G, S>
where
    G: RingGeometry,
    S: SampleSource,
{
    /// Build the initial geometry for `config`.
    pub fn new(config: &RingConfig, geometry: G, sampler: S) -> Self {
        let mut animator = Self {
            geometry,
            sampler,
            vertices: Vec::new(),
            step: 0.0,
            snapshot: config.snapshot(),
            progress: 0.0,
            generation: 0,
            cycle: 0,
            cycle_clamped: false,
        };
        animator.regenerate_all(config);
        animator
    }

    /// Rebuild every vertex from scratch and take a new configuration snapshot.
    #[tracing::instrument(level = "debug", skip_all, fields(vertex_count = config.vertex_count))]
    pub fn regenerate_all(&mut self, config: &RingConfig) {
        self.step = angular_step(config.vertex_count);
        self.vertices = make_vertices(&self.geometry, config, &mut self.sampler);
        self.snapshot = config.snapshot();
        self.generation += 1;
        self.cycle = 0;
    }

    /// Start a new cycle on every vertex: previous targets become origins and fresh targets are drawn.
    ///
    /// Anchors are left untouched.
    pub fn reroll_cycle(&mut self, config: &RingConfig) {
        for vertex in self.vertices.iter_mut().skip(1) {
            vertex.reroll(&self.geometry, config, &mut self.sampler);
        }
        self.cycle += 1;
    }

    /// Per-frame entry point with a no-op before-cycle hook.
    pub fn refresh(&mut self, frame: FrameIndex, config: &RingConfig) -> RefreshOutcome {
        self.refresh_with_hook(frame, config, || {})
    }

    /// Per-frame entry point.
    ///
    /// On a cycle boundary or after geometry drift, `before_cycle` runs once and the vertices are
    /// rerolled or regenerated. Tweens are then advanced to this frame's progress in either case.
    pub fn refresh_with_hook(
        &mut self,
        frame: FrameIndex,
        config: &RingConfig,
        mut before_cycle: impl FnMut(),
    ) -> RefreshOutcome {
        self.note_cycle_clamp(config);
        let progress = cycle_progress(frame, config.effective_cycle_length());

        let drift = detector::compare(config, &self.snapshot);
        let regenerate = drift.requires_regen(config.regen_policy);

        let action = if regenerate || progress == 0.0 {
            before_cycle();
            if regenerate {
                tracing::debug!(
                    ?drift,
                    from = self.snapshot.vertex_count,
                    to = config.vertex_count,
                    "ring geometry changed, regenerating"
                );
                self.regenerate_all(config);
                CycleAction::Regenerate
            } else {
                self.reroll_cycle(config);
                CycleAction::Reroll
            }
        } else {
            CycleAction::Tween
        };

        let ease = config.tween.ease;
        for vertex in self.vertices.iter_mut().skip(1) {
            vertex.advance(progress, ease);
        }
        self.progress = progress;

        RefreshOutcome { progress, action }
    }

    fn note_cycle_clamp(&mut self, config: &RingConfig) {
        let clamped = config.cycle_length < config.effective_cycle_length();
        if clamped && !self.cycle_clamped {
            tracing::warn!(
                cycle_length = config.cycle_length,
                using = config.effective_cycle_length(),
                "cycle_length too short, clamping"
            );
        }
        self.cycle_clamped = clamped;
    }

    /// Current vertices: the start anchor followed by one vertex per segment.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Ordered drawing sequence for the current state.
    pub fn path(&self) -> RingPath {
        project(&self.vertices)
    }

    /// Half the angle between consecutive anchors for the current geometry.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Progress applied by the most recent refresh.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Number of geometry builds so far, including the initial one.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Rerolls since the last regeneration.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Configuration fields the current geometry was built from.
    pub fn snapshot(&self) -> &ConfigSnapshot {
        &self.snapshot
    }

    /// The injected geometry.
    pub fn geometry(&self) -> &G {
        &self.geometry
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/animator.rs"]
mod tests;
