//! Property-based tests for the distance function.

use super::{distance, within_radius, GeoPoint};
use proptest::prelude::*;

fn coordinate() -> impl Strategy<Value = f64> {
    -180.0f64..180.0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // Distance never depends on argument order
    #[test]
    fn distance_is_symmetric(
        lat1 in coordinate(), lon1 in coordinate(),
        lat2 in coordinate(), lon2 in coordinate()
    ) {
        prop_assert_eq!(distance(lat1, lon1, lat2, lon2), distance(lat2, lon2, lat1, lon1));
    }

    // Distance is non-negative and zero to itself
    #[test]
    fn distance_is_non_negative(
        lat1 in coordinate(), lon1 in coordinate(),
        lat2 in coordinate(), lon2 in coordinate()
    ) {
        prop_assert!(distance(lat1, lon1, lat2, lon2) >= 0.0);
        prop_assert_eq!(distance(lat1, lon1, lat1, lon1), 0.0);
    }

    // Triangle inequality, with slack for rounding
    #[test]
    fn distance_triangle_inequality(
        a in (coordinate(), coordinate()),
        b in (coordinate(), coordinate()),
        c in (coordinate(), coordinate())
    ) {
        let ab = distance(a.0, a.1, b.0, b.1);
        let bc = distance(b.0, b.1, c.0, c.1);
        let ac = distance(a.0, a.1, c.0, c.1);
        prop_assert!(ac <= ab + bc + 1e-9);
    }

    // A point is never within a zero radius, even of itself
    #[test]
    fn zero_radius_matches_nothing(lat in coordinate(), lon in coordinate()) {
        let point = GeoPoint::new(lat, lon).unwrap();
        prop_assert!(!within_radius(point, point, 0.0));
    }

    // Shifting along latitude by less than the radius stays inside
    #[test]
    fn shift_below_radius_is_inside(lat in -100.0f64..100.0, lon in coordinate(), shift in 0.0f64..29.99) {
        let origin = GeoPoint::new(lat, lon).unwrap();
        let moved = GeoPoint::new(lat + shift, lon).unwrap();
        prop_assert!(within_radius(origin, moved, super::DEFAULT_SEARCH_RADIUS));
    }
}
