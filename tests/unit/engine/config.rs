use super::*;
use crate::animation::ease::Ease;

#[test]
fn defaults_follow_the_classic_sketch() {
    let c = RingConfig::default();
    assert_eq!(c.center, Point::new(200.0, 200.0));
    assert_eq!(c.radius, 200.0);
    assert_eq!(c.vertex_count, 10);
    assert_eq!(c.contraction_size, 1.0);
    assert_eq!(c.cycle_length, 60);
    assert_eq!(c.tween.ease, Ease::elastic());
    assert_eq!(c.regen_policy, RegenPolicy::Geometry);
    c.validate().unwrap();
}

#[test]
fn validate_rejects_bad_numbers() {
    let bad = [
        RingConfig {
            radius: -1.0,
            ..RingConfig::default()
        },
        RingConfig {
            radius: f64::NAN,
            ..RingConfig::default()
        },
        RingConfig {
            cycle_length: 1,
            ..RingConfig::default()
        },
        RingConfig {
            contraction_size: f64::INFINITY,
            ..RingConfig::default()
        },
        RingConfig {
            center: Point::new(f64::NAN, 0.0),
            ..RingConfig::default()
        },
    ];
    for c in bad {
        let err = c.validate().unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{c:?}");
    }
}

#[test]
fn effective_values_degrade_gracefully() {
    let c = RingConfig {
        radius: -5.0,
        contraction_size: f64::NAN,
        cycle_length: 0,
        ..RingConfig::default()
    };
    assert_eq!(c.effective_radius(), 0.0);
    assert_eq!(c.effective_contraction_size(), 0.0);
    assert_eq!(c.effective_cycle_length(), MIN_CYCLE_LENGTH);

    let snap = c.snapshot();
    assert_eq!(snap.radius, 0.0);
    assert_eq!(snap.vertex_count, 10);
}

#[test]
fn partial_json_fills_defaults() {
    let c: RingConfig =
        serde_json::from_str(r#"{ "radius": 50.0, "vertex_count": 4, "regen_policy": "AnchorsOnly" }"#)
            .unwrap();
    assert_eq!(c.radius, 50.0);
    assert_eq!(c.vertex_count, 4);
    assert_eq!(c.regen_policy, RegenPolicy::AnchorsOnly);
    assert_eq!(c.cycle_length, 60);
    assert_eq!(c.center, Point::new(200.0, 200.0));
}
