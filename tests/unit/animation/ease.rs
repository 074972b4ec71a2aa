use super::*;

const ALL: [Ease; 9] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::elastic(),
    Ease::InOutElastic {
        amplitude: 1.0,
        period: 0.45,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    for ease in ALL {
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.5), 1.0);
        assert_eq!(ease.apply(f64::NAN), 0.0);
    }
}

#[test]
fn monotonic_spot_check_for_polynomials() {
    for ease in &ALL[..7] {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b);
        assert!(b < c);
    }
}

#[test]
fn elastic_overshoots_then_settles() {
    let ease = Ease::default();
    assert_eq!(ease, Ease::elastic());
    let peak = (1..100)
        .map(|i| ease.apply(f64::from(i) / 100.0))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "peak {peak}");
    assert!((ease.apply(0.99) - 1.0).abs() < 0.01);
}

#[test]
fn eased_output_is_continuous() {
    for ease in ALL {
        let mut prev = ease.apply(0.0);
        for i in 1..=1000 {
            let v = ease.apply(f64::from(i) / 1000.0);
            assert!(v.is_finite());
            assert!((v - prev).abs() < 0.05, "{ease:?} jumps at {i}");
            prev = v;
        }
    }
}

#[test]
fn degenerate_elastic_parameters_fall_back() {
    let ease = Ease::OutElastic {
        amplitude: 0.0,
        period: -1.0,
    };
    let v = ease.apply(0.5);
    assert!(v.is_finite());
    assert_eq!(ease.apply(1.0), 1.0);
}

#[test]
fn serde_uses_externally_tagged_variants() {
    let json = serde_json::to_string(&Ease::elastic()).unwrap();
    assert_eq!(json, r#"{"OutElastic":{"amplitude":1.0,"period":0.3}}"#);
    let back: Ease = serde_json::from_str(r#""InOutCubic""#).unwrap();
    assert_eq!(back, Ease::InOutCubic);
}
