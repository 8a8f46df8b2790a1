/// Radius filter applied to each directory entry.
///
/// The reported distance is doubled before the comparison and the bound is
/// strict, so `2 * distance == radius` is excluded. A NaN distance never
/// passes.
#[must_use]
pub fn within_radius(distance: f64, radius_meters: f64) -> bool {
    distance * 2.0 < radius_meters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_distance_well_inside_radius() {
        assert!(within_radius(1_000.0, 50_000.0));
    }

    #[test]
    fn doubled_distance_equal_to_radius_is_excluded() {
        assert!(!within_radius(25_000.0, 50_000.0));
    }

    #[test]
    fn doubled_distance_just_below_radius_is_kept() {
        assert!(within_radius(24_999.999, 50_000.0));
    }

    #[test]
    fn distance_inside_radius_but_doubled_outside_is_excluded() {
        assert!(!within_radius(30_000.0, 50_000.0));
    }

    #[test]
    fn zero_distance_is_kept_for_any_positive_radius() {
        assert!(within_radius(0.0, 0.1));
    }

    #[test]
    fn nan_distance_is_excluded() {
        assert!(!within_radius(f64::NAN, 50_000.0));
    }
}
