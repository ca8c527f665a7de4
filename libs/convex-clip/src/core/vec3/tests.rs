//! Tests for the Vec3 helpers.

use super::*;

/// Ensures the triple product is the signed volume of the unit cube.
#[test]
fn triple_product_of_basis_is_one() {
    assert_eq!(triple_product(Vec3::X, Vec3::Y, Vec3::Z), 1.0);
}

/// Ensures coplanar vectors produce a zero triple product.
#[test]
fn triple_product_of_coplanar_vectors_is_zero() {
    let u = Vec3::new(1.0, 2.0, 0.0);
    let v = Vec3::new(-3.0, 0.5, 0.0);
    let w = u + v;
    assert_eq!(triple_product(u, v, w), 0.0);
}

/// Ensures swapping two arguments flips the sign.
#[test]
fn triple_product_is_antisymmetric() {
    let u = Vec3::new(1.0, 2.0, 3.0);
    let v = Vec3::new(-1.0, 0.5, 2.0);
    let w = Vec3::new(4.0, -2.0, 1.0);
    assert_eq!(triple_product(u, v, w), -triple_product(v, u, w));
}

#[test]
fn midpoint_is_symmetric() {
    let a = Vec3::new(1.0, -1.0, 3.0);
    let b = Vec3::new(5.0, 1.0, -3.0);
    assert_eq!(midpoint(a, b), midpoint(b, a));
    assert_eq!(midpoint(a, b), Vec3::new(3.0, 0.0, 0.0));
}

#[test]
fn average_of_cube_corners_is_center() {
    let corners = (0..8).map(|i| {
        Vec3::new(
            f64::from(i & 1) * 2.0,
            f64::from((i >> 1) & 1) * 2.0,
            f64::from((i >> 2) & 1) * 2.0,
        )
    });
    assert_eq!(average(corners), Some(Vec3::ONE));
}
