use super::{Point3, Vector3};

/// Divides `v` by its largest absolute component, or `None` for the zero vector.
fn rescaled(v: Vector3) -> Option<Vector3> {
    let scale = v.amax();
    (scale > 0.0).then(|| v / scale)
}

/// Angle at vertex `b` between the rays `b -> a` and `b -> c`, in radians.
///
/// Returns NaN when `b` coincides with `a` or `c`, since one of the rays has
/// no direction. Each ray is rescaled to unit max-component before the
/// `atan2(|BA x BC|, BA . BC)` evaluation, so neither very small nor very
/// large coordinates lose the result.
#[must_use]
pub fn angle_at_vertex_radians(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    match (rescaled(a - b), rescaled(c - b)) {
        (Some(ba), Some(bc)) => ba.cross(&bc).norm().atan2(ba.dot(&bc)),
        _ => f64::NAN,
    }
}

/// Angle at vertex `b` between the rays `b -> a` and `b -> c`, in degrees.
///
/// See [`angle_at_vertex_radians`] for the degenerate case.
#[must_use]
pub fn angle_at_vertex(a: &Point3, b: &Point3, c: &Point3) -> f64 {
    angle_at_vertex_radians(a, b, c).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn right_angle() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::origin();
        let c = Point3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(angle_at_vertex(&a, &b, &c), 90.0, epsilon = 1e-12);
        assert_relative_eq!(angle_at_vertex_radians(&a, &b, &c), FRAC_PI_2);
    }

    #[test]
    fn collinear_same_direction_is_zero() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(angle_at_vertex(&a, &Point3::origin(), &c), 0.0);
    }

    #[test]
    fn collinear_opposite_direction_is_straight() {
        let a = Point3::new(-2.0, 0.0, 0.0);
        let c = Point3::new(5.0, 0.0, 0.0);
        assert_relative_eq!(angle_at_vertex(&a, &Point3::origin(), &c), 180.0);
    }

    #[test]
    fn parallel_rays_of_different_length_are_zero() {
        // Parallel rays of very different length.
        let a = Point3::new(0.1, 0.2, 0.3);
        let c = Point3::new(1e7, 2e7, 3e7);
        let angle = angle_at_vertex(&a, &Point3::origin(), &c);
        assert!(!angle.is_nan());
        assert!(angle.abs() < 1e-5, "angle={angle}");
    }

    #[test]
    fn tiny_rays_keep_their_angle() {
        let a = Point3::new(1e-170, 0.0, 0.0);
        let c = Point3::new(0.0, 1e-170, 0.0);
        assert_relative_eq!(angle_at_vertex(&a, &Point3::origin(), &c), 90.0);
    }

    #[test]
    fn huge_collinear_rays_are_zero() {
        let a = Point3::new(1e160, 0.0, 0.0);
        let c = Point3::new(2e160, 0.0, 0.0);
        assert_eq!(angle_at_vertex(&a, &Point3::origin(), &c), 0.0);
    }

    #[test]
    fn huge_rays_keep_their_angle() {
        let a = Point3::new(1e300, 0.0, 0.0);
        let c = Point3::new(1e300, 1e300, 0.0);
        assert_relative_eq!(angle_at_vertex(&a, &Point3::origin(), &c), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn vertex_on_endpoint_is_nan() {
        let a = Point3::new(1.0, 1.0, 1.0);
        let c = Point3::new(0.0, 2.0, 0.0);
        assert!(angle_at_vertex(&a, &a, &c).is_nan());
        assert!(angle_at_vertex(&a, &c, &c).is_nan());
    }

    #[test]
    fn vertex_choice_changes_result() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(2.0, 0.0, 0.0);
        let c = Point3::new(0.0, 2.0, 0.0);
        assert_relative_eq!(angle_at_vertex(&b, &a, &c), 90.0, epsilon = 1e-12);
        assert_relative_eq!(angle_at_vertex(&a, &b, &c), 45.0, epsilon = 1e-12);
    }
}
