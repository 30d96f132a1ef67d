use std::f64::consts::FRAC_PI_3;

use approx::assert_relative_eq;
use isomorphic::prelude::*;
use nalgebra::{Isometry2, Point2, Vector2};

fn rigid(translation: Vector2<f64>, angle: f64) -> Isomorphism<Point2<f64>, Point2<f64>> {
    let isometry = Isometry2::new(translation, angle);
    Isomorphism::of(
        move |p: Point2<f64>| isometry.transform_point(&p),
        move |p: Point2<f64>| isometry.inverse_transform_point(&p),
    )
}

fn celsius_to_fahrenheit() -> Isomorphism<f64, f64> {
    Isomorphism::of(|c: f64| c * 1.8 + 32., |f: f64| (f - 32.) / 1.8)
}

fn fahrenheit_to_kelvin() -> Isomorphism<f64, f64> {
    Isomorphism::of(|f: f64| (f - 32.) / 1.8 + 273.15, |k: f64| (k - 273.15) * 1.8 + 32.)
}

#[test]
fn test_rigid_transform_round_trip() {
    let local_to_world = rigid(Vector2::new(1., 2.), FRAC_PI_3);
    let p = Point2::new(3., -4.);
    let world = local_to_world.apply(p);
    assert_relative_eq!(local_to_world.inverse().apply(world), p, epsilon = 1e-10);
}

#[test]
fn test_composed_transform() {
    let translate = rigid(Vector2::new(1., 0.), 0.);
    let rotate = rigid(Vector2::zeros(), FRAC_PI_3 * 1.5);

    // translate first, then rotate a quarter turn
    let transform = translate.and_then(&rotate);
    let p = transform.apply(Point2::new(1., 0.));
    assert_relative_eq!(p, Point2::new(0., 2.), epsilon = 1e-10);
    assert_relative_eq!(transform.inverse().apply(p), Point2::new(1., 0.), epsilon = 1e-10);

    // the opposite order lands elsewhere
    let p = rotate.and_then(&translate).apply(Point2::new(1., 0.));
    assert_relative_eq!(p, Point2::new(1., 1.), epsilon = 1e-10);
}

#[test]
fn test_unit_conversion() {
    let c2k = celsius_to_fahrenheit().and_then(&fahrenheit_to_kelvin());
    assert_relative_eq!(c2k.apply(0.), 273.15, epsilon = 1e-9);
    assert_relative_eq!(c2k.apply(-273.15), 0., epsilon = 1e-9);
    assert_relative_eq!(c2k.inverse().apply(373.15), 100., epsilon = 1e-9);

    let k2c = c2k.inverse();
    for c in [-40., 0., 36.6, 1000.] {
        assert_relative_eq!(k2c.apply(c2k.apply(c)), c, epsilon = 1e-9);
    }
}
