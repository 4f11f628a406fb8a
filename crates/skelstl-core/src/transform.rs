//! Rigid transform construction
//!
//! Pure rotation/transform algebra used by the placement resolvers:
//! - [`normalize`]: unit vector with a hard failure on zero length
//! - [`rotation_about_axis`]: Rodrigues' rotation formula, optional pivot
//! - [`rotation_aligning`]: rotation mapping one unit vector onto another

use glam::{DMat3, DMat4, DVec3};

/// Tolerance below which two unit vectors count as aligned or antiparallel
const ALIGN_EPSILON: f64 = 1e-12;

/// Normalize a vector, rejecting zero-length input
pub fn normalize(v: DVec3) -> Result<DVec3, TransformError> {
    let length = v.length();
    if length == 0.0 {
        return Err(TransformError::DegenerateVector);
    }
    Ok(v / length)
}

/// Rotation by `angle` (radians) about `axis` through the origin
pub fn rotation_about_axis(angle: f64, axis: DVec3) -> Result<DMat4, TransformError> {
    rotation_about_axis_at(angle, axis, DVec3::ZERO)
}

/// Rotation by `angle` (radians) about `axis` through `pivot`
///
/// Uses Rodrigues' formula `R = cosθ·I + (1−cosθ)·(d⊗d) + sinθ·[d]×`, exact
/// for any axis/angle pair. The pivot point is a fixed point of the result.
pub fn rotation_about_axis_at(
    angle: f64,
    axis: DVec3,
    pivot: DVec3,
) -> Result<DMat4, TransformError> {
    let d = normalize(axis)?;
    let (sin, cos) = angle.sin_cos();

    let outer = DMat3::from_cols(d * d.x, d * d.y, d * d.z);
    let rotation = DMat3::IDENTITY * cos + outer * (1.0 - cos) + skew_symmetric(d) * sin;

    Ok(DMat4::from_translation(pivot) * DMat4::from_mat3(rotation) * DMat4::from_translation(-pivot))
}

/// Rotation mapping unit vector `a` onto unit vector `b`
///
/// `R = I + [v]× + [v]×²/(1+c)` with `v = a×b`, `c = a·b`. Aligned input
/// returns the identity. Antiparallel input is the formula's singularity;
/// there any axis perpendicular to `a` rotated by π maps `a` onto `b`, so
/// one is picked deterministically.
pub fn rotation_aligning(a: DVec3, b: DVec3) -> DMat3 {
    let c = a.dot(b);
    if c >= 1.0 - ALIGN_EPSILON {
        return DMat3::IDENTITY;
    }
    if c <= -1.0 + ALIGN_EPSILON {
        return DMat3::from_axis_angle(perpendicular(a), std::f64::consts::PI);
    }

    let skew = skew_symmetric(a.cross(b));
    DMat3::IDENTITY + skew + (skew * skew) * (1.0 / (1.0 + c))
}

/// Skew-symmetric cross-product matrix `[v]×`
fn skew_symmetric(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// Some unit vector perpendicular to `v`, built from the coordinate axis
/// least aligned with it
fn perpendicular(v: DVec3) -> DVec3 {
    let candidate = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        DVec3::X
    } else if v.y.abs() <= v.z.abs() {
        DVec3::Y
    } else {
        DVec3::Z
    };
    v.cross(candidate).normalize()
}

/// Transform-related errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum TransformError {
    #[error("Cannot normalize a zero-length vector")]
    DegenerateVector,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_proper_rotation(r: DMat3, tolerance: f64) {
        let residual = r.transpose() * r - DMat3::IDENTITY;
        for column in [residual.x_axis, residual.y_axis, residual.z_axis] {
            assert!(column.length() < tolerance, "R^T R != I: {residual:?}");
        }
        assert!((r.determinant() - 1.0).abs() < tolerance, "det != 1");
    }

    #[test]
    fn test_normalize() {
        let v = normalize(DVec3::new(3.0, 0.0, 4.0)).unwrap();
        assert!((v.length() - 1.0).abs() < 1e-12);
        assert!((v - DVec3::new(0.6, 0.0, 0.8)).length() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_fails() {
        assert!(matches!(
            normalize(DVec3::ZERO),
            Err(TransformError::DegenerateVector)
        ));
    }

    #[test]
    fn test_rotation_axis_is_fixed_point() {
        let axis = DVec3::new(1.0, -2.0, 0.5);
        for angle in [0.0, 0.3, 1.0, 2.5, -1.7, std::f64::consts::PI] {
            let r = rotation_about_axis(angle, axis).unwrap();
            let mapped = r.transform_vector3(axis);
            assert!((mapped - axis).length() < 1e-9, "angle {angle}");
        }
    }

    #[test]
    fn test_rotation_quarter_turn() {
        let r = rotation_about_axis(std::f64::consts::FRAC_PI_2, DVec3::Z).unwrap();
        let mapped = r.transform_point3(DVec3::X);
        assert!((mapped - DVec3::Y).length() < 1e-12);
    }

    #[test]
    fn test_rotation_pivot_invariance() {
        let pivot = DVec3::new(0.2, -1.5, 3.0);
        let r = rotation_about_axis_at(1.1, DVec3::new(0.0, 1.0, 1.0), pivot).unwrap();
        assert!((r.transform_point3(pivot) - pivot).length() < 1e-12);
    }

    #[test]
    fn test_rotation_is_proper() {
        let r = rotation_about_axis(0.77, DVec3::new(1.0, 2.0, 3.0)).unwrap();
        assert_proper_rotation(DMat3::from_mat4(r), 1e-9);
    }

    #[test]
    fn test_rotation_degenerate_axis_fails() {
        assert!(rotation_about_axis(1.0, DVec3::ZERO).is_err());
    }

    #[test]
    fn test_aligning_maps_a_onto_b() {
        let pairs = [
            (DVec3::Z, DVec3::X),
            (DVec3::X, DVec3::new(0.0, 0.6, 0.8)),
            (
                DVec3::new(1.0, 1.0, 1.0).normalize(),
                DVec3::new(-1.0, 2.0, 0.5).normalize(),
            ),
            (DVec3::Y, DVec3::new(0.0, 1e-6, 1.0).normalize()),
        ];
        for (a, b) in pairs {
            let r = rotation_aligning(a, b);
            assert!((r * a - b).length() < 1e-9, "a {a:?} b {b:?}");
            assert_proper_rotation(r, 1e-9);
        }
    }

    #[test]
    fn test_aligning_identity_case() {
        let a = DVec3::new(0.0, 0.6, 0.8);
        let r = rotation_aligning(a, a);
        let residual = r - DMat3::IDENTITY;
        for column in [residual.x_axis, residual.y_axis, residual.z_axis] {
            assert!(column.length() < 1e-12);
        }
    }

    #[test]
    fn test_aligning_antiparallel_case() {
        for a in [DVec3::X, DVec3::Y, DVec3::Z, DVec3::new(1.0, 1.0, 1.0).normalize()] {
            let r = rotation_aligning(a, -a);
            assert!((r * a + a).length() < 1e-9, "a {a:?}");
            assert_proper_rotation(r, 1e-9);
        }
    }
}
