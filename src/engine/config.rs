use crate::{
    animation::tween::TweenSpec,
    foundation::core::Point,
    foundation::error::{BezringError, BezringResult},
};

/// Smallest cycle the progress normalization can divide by.
pub const MIN_CYCLE_LENGTH: u64 = 2;

/// Which configuration changes force a full geometry regeneration.
///
/// Changes outside the chosen set are still picked up, but only by the next reroll
/// (new targets) rather than by rebuilding anchors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum RegenPolicy {
    /// Regenerate on `vertex_count`, `radius`, or `contraction_size` changes.
    #[default]
    Geometry,
    /// Regenerate on `vertex_count` or `radius` changes only.
    AnchorsOnly,
}

/// Ring configuration, read by the engine at the top of every refresh.
///
/// Geometry functions are not part of this record; swapping them is never detected as drift.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RingConfig {
    /// Shape origin.
    pub center: Point,
    /// Ring radius; negative or non-finite values collapse to `0`.
    pub radius: f64,
    /// Number of bezier segments. `0` renders only the start anchor.
    pub vertex_count: u32,
    /// Multiplier on the contraction function's output.
    pub contraction_size: f64,
    /// Frames per tween cycle; values below [`MIN_CYCLE_LENGTH`] are clamped.
    pub cycle_length: u64,
    /// Interpolation parameters.
    pub tween: TweenSpec,
    /// Regeneration trigger set.
    pub regen_policy: RegenPolicy,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            center: Point::new(200.0, 200.0),
            radius: 200.0,
            vertex_count: 10,
            contraction_size: 1.0,
            cycle_length: 60,
            tween: TweenSpec::default(),
            regen_policy: RegenPolicy::default(),
        }
    }
}

impl RingConfig {
    /// Strict checks for configuration loaded from outside the process.
    ///
    /// The engine tolerates everything this rejects; hosts call it to surface mistakes early.
    pub fn validate(&self) -> BezringResult<()> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(BezringError::validation("center must be finite"));
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(BezringError::validation(format!(
                "radius must be finite and >= 0, got {}",
                self.radius
            )));
        }
        if !self.contraction_size.is_finite() {
            return Err(BezringError::validation("contraction_size must be finite"));
        }
        if self.cycle_length < MIN_CYCLE_LENGTH {
            return Err(BezringError::validation(format!(
                "cycle_length must be >= {MIN_CYCLE_LENGTH}, got {}",
                self.cycle_length
            )));
        }
        if !self.tween.duration_secs.is_finite() {
            return Err(BezringError::validation("tween.duration_secs must be finite"));
        }
        Ok(())
    }

    /// Radius actually used for geometry.
    pub fn effective_radius(&self) -> f64 {
        if self.radius.is_finite() {
            self.radius.max(0.0)
        } else {
            0.0
        }
    }

    /// Contraction multiplier actually used for geometry.
    pub fn effective_contraction_size(&self) -> f64 {
        if self.contraction_size.is_finite() {
            self.contraction_size
        } else {
            0.0
        }
    }

    /// Cycle length actually used for progress normalization.
    pub fn effective_cycle_length(&self) -> u64 {
        self.cycle_length.max(MIN_CYCLE_LENGTH)
    }

    /// The fields the change detector compares, as currently configured.
    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            vertex_count: self.vertex_count,
            radius: self.effective_radius(),
            contraction_size: self.effective_contraction_size(),
        }
    }
}

/// Geometry-affecting fields as of the last regeneration.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfigSnapshot {
    /// Segment count the vertices were built for.
    pub vertex_count: u32,
    /// Effective radius the anchors were built for.
    pub radius: f64,
    /// Effective contraction multiplier the baseline control points were built for.
    pub contraction_size: f64,
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
