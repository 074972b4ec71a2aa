use crate::{
    animation::ease::Ease,
    foundation::core::{Point, lerp_point},
};

/// Interpolation parameters forwarded to every control-point tween.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TweenSpec {
    /// Easing applied to the cycle progress.
    pub ease: Ease,
    /// Nominal tween length for hosts that drive tweens by wall-clock time.
    pub duration_secs: f64,
}

impl Default for TweenSpec {
    fn default() -> Self {
        Self {
            ease: Ease::default(),
            duration_secs: 2.0,
        }
    }
}

impl TweenSpec {
    /// Normalized progress after `elapsed_secs` of wall-clock time, clamped to `[0, 1]`.
    ///
    /// A non-positive duration completes immediately.
    pub fn progress_at(self, elapsed_secs: f64) -> f64 {
        if self.duration_secs.is_nan() || self.duration_secs <= 0.0 {
            return 1.0;
        }
        (elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
    }
}

/// Tween state for one control point: where the cycle started, where it is, and where it is heading.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ControlPair {
    /// Value at progress 0.
    pub origin: Point,
    /// Value last written by [`ControlPair::advance`].
    pub current: Point,
    /// Value at progress 1.
    pub target: Point,
}

impl ControlPair {
    /// Fresh pair resting at `origin` and heading for `target`.
    pub fn new(origin: Point, target: Point) -> Self {
        Self {
            origin,
            current: origin,
            target,
        }
    }

    /// Move `current` to the eased position for `progress`.
    pub fn advance(&mut self, progress: f64, ease: Ease) {
        self.current = interpolate(self.origin, self.target, progress, ease);
    }

    /// Start the next cycle: the old target becomes the baseline and `next_target` the new goal.
    pub fn shift(&mut self, next_target: Point) {
        self.origin = self.target;
        self.current = self.target;
        self.target = next_target;
    }
}

/// Eased interpolation from `origin` to `target`.
///
/// `progress` is clamped to `[0, 1]`; the result equals `origin` exactly at 0 and `target`
/// exactly at 1. Elastic easing may place intermediate results outside the segment.
pub fn interpolate(origin: Point, target: Point, progress: f64, ease: Ease) -> Point {
    lerp_point(origin, target, ease.apply(progress))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
