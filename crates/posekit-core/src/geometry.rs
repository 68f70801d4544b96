//! Geometric utilities for landmark computations.

use nalgebra::{Point3, Vector3};

/// Euclidean distance between two points.
///
/// Non-finite coordinates propagate into the result.
pub fn distance_3d(p1: &Point3<f64>, p2: &Point3<f64>) -> f64 {
    nalgebra::distance(p1, p2)
}

/// Angle between two vectors in radians.
///
/// The cosine is clamped to [-1, 1] so rounding on near-parallel vectors
/// cannot push `acos` out of its domain. A zero-length vector yields NaN.
pub fn vector_angle(v1: &Vector3<f64>, v2: &Vector3<f64>) -> f64 {
    let cosine = v1.dot(v2) / (v1.norm() * v2.norm());
    cosine.clamp(-1.0, 1.0).acos()
}

/// Angle at vertex `b` formed by the rays `b→a` and `b→c`, in degrees.
///
/// The result lies in [0, 180] for any three points where `a` and `c` are
/// distinct from `b`. If `a` or `c` coincides with `b` the angle is NaN,
/// which `serde_json` writes as `null`. Callers gate on landmark visibility
/// before measuring.
pub fn angle_between(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> f64 {
    let ba = a - b;
    let bc = c - b;
    vector_angle(&ba, &bc).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let a = p(0.31, 0.72, -0.4);
        assert_eq!(distance_3d(&a, &a), 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let a = p(0.1, 0.2, 0.3);
        let b = p(0.9, -0.5, 1.7);
        assert_eq!(distance_3d(&a, &b), distance_3d(&b, &a));
    }

    #[test]
    fn test_distance_pythagorean() {
        let a = p(0.0, 0.0, 0.0);
        let b = p(3.0, 4.0, 12.0);
        assert!((distance_3d(&a, &b) - 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_distance_propagates_nan() {
        let a = p(f64::NAN, 0.0, 0.0);
        let b = p(1.0, 0.0, 0.0);
        assert!(distance_3d(&a, &b).is_nan());
    }

    #[test]
    fn test_angle_straight_line() {
        let angle = angle_between(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(2.0, 0.0, 0.0));
        assert!((angle - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_right_angle() {
        let angle = angle_between(&p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0), &p(1.0, 1.0, 0.0));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_folded_back_is_zero() {
        let angle = angle_between(&p(2.0, 0.0, 0.0), &p(0.0, 0.0, 0.0), &p(5.0, 0.0, 0.0));
        assert!(angle.abs() < 1e-6);
    }

    #[test]
    fn test_angle_uses_depth() {
        let angle = angle_between(&p(0.0, 0.0, 1.0), &p(0.0, 0.0, 0.0), &p(1.0, 0.0, 0.0));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_angle_near_collinear_stays_finite() {
        // Rounding here can land the cosine just past -1 without the clamp.
        let a = p(0.1, 0.1, 0.1);
        let b = p(0.2, 0.2, 0.2);
        let c = p(0.3, 0.3, 0.3);
        let angle = angle_between(&a, &b, &c);
        assert!(angle.is_finite());
        assert!((angle - 180.0).abs() < 1e-5);
    }

    #[test]
    fn test_angle_always_in_range() {
        let coords = [-1.3, -0.2, 0.0, 0.45, 0.9, 2.5];
        for &ax in &coords {
            for &cy in &coords {
                for &z in &coords {
                    let a = p(ax, 0.3, z);
                    let b = p(0.11, 0.07, -0.05);
                    let c = p(-z, cy, 0.6);
                    let angle = angle_between(&a, &b, &c);
                    assert!((0.0..=180.0).contains(&angle), "angle {} out of range", angle);
                }
            }
        }
    }

    #[test]
    fn test_angle_coincident_points_is_nan() {
        let a = p(0.5, 0.5, 0.0);
        assert!(angle_between(&a, &a, &p(1.0, 0.0, 0.0)).is_nan());
    }

    #[test]
    fn test_vector_angle_radians() {
        let v1 = Vector3::new(1.0, 0.0, 0.0);
        let v2 = Vector3::new(0.0, 2.0, 0.0);
        assert!((vector_angle(&v1, &v2) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
