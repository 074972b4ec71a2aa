use std::f64::consts::{FRAC_PI_2, TAU};

use super::*;
use crate::geometry::{
    functions::{CircleGeometry, ProceduralGeometry},
    sample::{FixedSampler, SeededSampler},
};

fn near(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

fn config(vertex_count: u32) -> RingConfig {
    RingConfig {
        center: Point::ZERO,
        radius: 100.0,
        vertex_count,
        ..RingConfig::default()
    }
}

#[test]
fn step_and_angles_cover_the_circle() {
    let step = angular_step(4);
    assert!((step - FRAC_PI_2 / 2.0).abs() < 1e-15);
    assert_eq!(vertex_angle(1, step), step);
    assert!((vertex_angle(4, step) - 7.0 * step).abs() < 1e-12);
    assert_eq!(angular_step(0), 0.0);
}

#[test]
fn last_anchor_closes_onto_start() {
    for n in [1, 3, 4, 7, 20, 64] {
        let c = config(n);
        let step = angular_step(n);
        let start = make_start_vertex(&CircleGeometry, &c);
        let closing = anchor_at(&CircleGeometry, &c, vertex_angle(n, step) + step);
        assert!(near(start.anchor, closing), "n = {n}");
    }
}

#[test]
fn deterministic_geometry_starts_at_rest() {
    let c = config(4);
    let v = make_vertex(2, 3.0, 0.5, &CircleGeometry, &c, &mut SeededSampler::new(1));
    let controls = v.controls.unwrap();
    assert_eq!(controls.cp0, controls.cp1);
    assert_eq!(controls.cp0.origin, controls.cp0.current);
    assert_eq!(controls.cp0.origin, controls.cp0.target);
    assert!(near(v.anchor, Point::new(100.0 * 3.5f64.sin(), 100.0 * 3.5f64.cos())));
    assert!(!v.is_anchor_only());
}

#[test]
fn factory_draws_exactly_two_samples_per_vertex() {
    let mut draws = 0u32;
    let mut counting = || {
        draws += 1;
        f64::from(draws)
    };
    let c = config(5);
    let vertices = make_vertices(&CircleGeometry, &c, &mut counting);
    assert_eq!(vertices.len(), 6);
    assert_eq!(draws, 10);
}

#[test]
fn stochastic_geometry_rolls_independent_origin_and_target() {
    let c = config(3);
    let v = make_vertex(
        1,
        0.4,
        angular_step(3),
        &ProceduralGeometry::noisy_circle(5),
        &c,
        &mut SeededSampler::new(77),
    );
    let pair = v.controls.unwrap().cp0;
    assert_eq!(pair.origin, pair.current);
    assert_ne!(pair.origin, pair.target);
}

#[test]
fn control_points_scale_with_contraction_size() {
    let c = RingConfig {
        contraction_size: 0.5,
        ..config(4)
    };
    let p = control_point_at(&CircleGeometry, &c, FRAC_PI_2, 0.0);
    assert!(near(p, Point::new(50.0, 0.0)));

    let shifted = RingConfig {
        center: Point::new(10.0, 20.0),
        ..c
    };
    let p = control_point_at(&CircleGeometry, &shifted, FRAC_PI_2, 0.0);
    assert!(near(p, Point::new(60.0, 20.0)));
}

#[test]
fn start_vertex_has_no_controls_and_ignores_reroll() {
    let c = config(4);
    let mut start = make_start_vertex(&CircleGeometry, &c);
    assert!(start.is_anchor_only());
    assert!(near(start.anchor, Point::new(0.0, 100.0)));
    let before = start;
    start.reroll(&CircleGeometry, &c, &mut FixedSampler(1.0));
    start.advance(0.5, crate::animation::ease::Ease::Linear);
    assert_eq!(start, before);
}

#[test]
fn empty_ring_is_just_the_start_anchor() {
    let vertices = make_vertices(&CircleGeometry, &config(0), &mut FixedSampler(0.0));
    assert_eq!(vertices.len(), 1);
    assert!(vertices[0].is_anchor_only());
    assert!(near(
        anchor_at(&CircleGeometry, &config(0), TAU),
        vertices[0].anchor
    ));
}

#[test]
fn reroll_shifts_target_into_origin() {
    let c = config(4);
    let geometry = ProceduralGeometry::noisy_circle(2);
    let mut sampler = SeededSampler::new(3);
    let mut v = make_vertex(1, 0.3, angular_step(4), &geometry, &c, &mut sampler);
    let old = v.controls.unwrap().cp1;
    let anchor = v.anchor;

    v.reroll(&geometry, &c, &mut sampler);
    let new = v.controls.unwrap().cp1;
    assert_eq!(new.origin, old.target);
    assert_eq!(new.current, old.target);
    assert_eq!(v.anchor, anchor);
}
