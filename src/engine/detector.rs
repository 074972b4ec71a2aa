use crate::engine::config::{ConfigSnapshot, RegenPolicy, RingConfig};

/// Which snapshot fields differ from the live configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Divergence {
    /// Segment count changed.
    pub vertex_count: bool,
    /// Radius changed.
    pub radius: bool,
    /// Contraction multiplier changed.
    pub contraction_size: bool,
}

impl Divergence {
    /// Whether this drift forces a regeneration under `policy`.
    pub fn requires_regen(self, policy: RegenPolicy) -> bool {
        match policy {
            RegenPolicy::Geometry => self.vertex_count || self.radius || self.contraction_size,
            RegenPolicy::AnchorsOnly => self.vertex_count || self.radius,
        }
    }
}

/// Field-by-field comparison of `live` against the last applied snapshot.
pub fn compare(live: &RingConfig, snapshot: &ConfigSnapshot) -> Divergence {
    let now = live.snapshot();
    Divergence {
        vertex_count: now.vertex_count != snapshot.vertex_count,
        radius: now.radius != snapshot.radius,
        contraction_size: now.contraction_size != snapshot.contraction_size,
    }
}

/// True when `live` has drifted from `snapshot` in a way its [`RegenPolicy`] treats as geometric.
pub fn diverges(live: &RingConfig, snapshot: &ConfigSnapshot) -> bool {
    compare(live, snapshot).requires_regen(live.regen_policy)
}

#[cfg(test)]
#[path = "../../tests/unit/engine/detector.rs"]
mod tests;
