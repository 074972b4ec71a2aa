use super::*;
use crate::foundation::core::Point;

#[test]
fn unchanged_config_does_not_diverge() {
    let c = RingConfig::default();
    assert!(!diverges(&c, &c.snapshot()));
    assert_eq!(compare(&c, &c.snapshot()), Divergence::default());
}

#[test]
fn vertex_count_and_radius_always_diverge() {
    let base = RingConfig::default();
    let snap = base.snapshot();
    for policy in [RegenPolicy::Geometry, RegenPolicy::AnchorsOnly] {
        let more = RingConfig {
            vertex_count: 11,
            regen_policy: policy,
            ..base
        };
        assert!(diverges(&more, &snap));
        let wider = RingConfig {
            radius: 201.0,
            regen_policy: policy,
            ..base
        };
        assert!(diverges(&wider, &snap));
    }
}

#[test]
fn contraction_size_follows_policy() {
    let base = RingConfig::default();
    let snap = base.snapshot();
    let squeezed = RingConfig {
        contraction_size: 0.5,
        ..base
    };
    assert!(diverges(&squeezed, &snap));
    assert!(!diverges(
        &RingConfig {
            regen_policy: RegenPolicy::AnchorsOnly,
            ..squeezed
        },
        &snap
    ));
}

#[test]
fn non_geometric_fields_are_ignored() {
    let base = RingConfig::default();
    let snap = base.snapshot();
    let moved = RingConfig {
        center: Point::new(0.0, 0.0),
        cycle_length: 5,
        ..base
    };
    assert!(!diverges(&moved, &snap));
}

#[test]
fn nan_radius_does_not_churn() {
    let c = RingConfig {
        radius: f64::NAN,
        ..RingConfig::default()
    };
    assert!(!diverges(&c, &c.snapshot()));
}
