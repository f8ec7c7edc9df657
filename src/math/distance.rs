use super::{Point3, Vector3};

/// Returns the Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point3, b: &Point3) -> f64 {
    length(&(b - a))
}

/// Returns the Euclidean distance between `(x1, y1, z1)` and `(x2, y2, z2)`.
#[must_use]
pub fn distance_components(x1: f64, y1: f64, z1: f64, x2: f64, y2: f64, z2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1).hypot(z2 - z1)
}

/// Length of `v` without squaring its components, so it neither overflows
/// nor underflows for any finite vector whose length is representable.
#[must_use]
pub fn length(v: &Vector3) -> f64 {
    v.x.hypot(v.y).hypot(v.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Point3::new(-2.5, 7.0, 1e6);
        assert_eq!(distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Point3::new(1.0, -2.0, 3.5);
        let b = Point3::new(-4.0, 0.25, 9.0);
        assert_eq!(distance(&a, &b), distance(&b, &a));
    }

    #[test]
    fn unit_step_along_x() {
        let d = distance(&Point3::origin(), &Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(d, 1.0);
    }

    #[test]
    fn three_four_five() {
        let d = distance(&Point3::origin(), &Point3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn components_agree_with_points() {
        // (1,2,3) -> (4,6,15): deltas 3, 4, 12 => 13.
        let d = distance_components(1.0, 2.0, 3.0, 4.0, 6.0, 15.0);
        assert_relative_eq!(d, 13.0);
        assert_relative_eq!(
            d,
            distance(&Point3::new(1.0, 2.0, 3.0), &Point3::new(4.0, 6.0, 15.0))
        );
    }

    #[test]
    fn tiny_separation_does_not_underflow() {
        let d = distance(&Point3::origin(), &Point3::new(1e-170, 0.0, 0.0));
        assert_relative_eq!(d, 1e-170, epsilon = 0.0, max_relative = 1e-12);
        let d = distance_components(0.0, 0.0, 0.0, 3e-170, 4e-170, 0.0);
        assert_relative_eq!(d, 5e-170, epsilon = 0.0, max_relative = 1e-12);
    }

    #[test]
    fn huge_separation_does_not_overflow() {
        let d = distance(&Point3::origin(), &Point3::new(3e160, 4e160, 0.0));
        assert_relative_eq!(d, 5e160, max_relative = 1e-12);
    }

    #[test]
    fn nonzero_for_distinct_points() {
        let d = distance(&Point3::new(0.0, 0.0, 0.0), &Point3::new(0.0, 0.0, 1e-9));
        assert!(d > 0.0);
    }
}
