use crate::models::Coordinate;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers on a spherical Earth (haversine).
///
/// Degrees are not range-checked; out-of-range input yields a number that
/// is mathematically defined but geographically meaningless.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let dlat = (b.latitude - a.latitude).to_radians();
    let dlon = (b.longitude - a.longitude).to_radians();
    let h = (dlat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    // rounding can push h just past 1 near the antipode
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Renders a distance for display: meters under 1 km, one decimal under
/// 10 km, whole kilometers beyond. Both thresholds are strict. Every
/// bucket rounds halves away from zero.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else if km < 10.0 {
        format!("{:.1}km", (km * 10.0).round() / 10.0)
    } else {
        format!("{}km", km.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::PI;

    const ASUNCION: Coordinate = Coordinate {
        latitude: -25.2637,
        longitude: -57.5759,
    };
    const LUQUE: Coordinate = Coordinate {
        latitude: -25.2592,
        longitude: -57.4872,
    };

    fn sample_points() -> Vec<Coordinate> {
        vec![
            ASUNCION,
            LUQUE,
            Coordinate::new(-25.3397, -57.5088), // San Lorenzo
            Coordinate::new(-34.6037, -58.3816), // Buenos Aires
            Coordinate::new(52.3676, 4.9041),    // Amsterdam
            Coordinate::new(0.0, 0.0),
            Coordinate::new(89.9, 179.0),
            Coordinate::new(-60.0, -170.0),
        ]
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        for p in sample_points() {
            assert_eq!(haversine_km(p, p), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = sample_points();
        for p in &points {
            for q in &points {
                assert_relative_eq!(haversine_km(*p, *q), haversine_km(*q, *p), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_triangle_inequality() {
        let points = sample_points();
        for p in &points {
            for q in &points {
                for r in &points {
                    let direct = haversine_km(*p, *r);
                    let detour = haversine_km(*p, *q) + haversine_km(*q, *r);
                    assert!(direct <= detour + 1e-6, "{direct} > {detour}");
                }
            }
        }
    }

    #[test]
    fn test_asuncion_to_luque() {
        let km = haversine_km(ASUNCION, LUQUE);
        assert_abs_diff_eq!(km, 8.93, epsilon = 0.1);
    }

    #[test]
    fn test_antipodal_points_are_half_circumference_apart() {
        let km = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        assert_relative_eq!(km, PI * EARTH_RADIUS_KM, max_relative = 1e-9);

        let km = haversine_km(Coordinate::new(90.0, 0.0), Coordinate::new(-90.0, 0.0));
        assert!(!km.is_nan());
        assert_relative_eq!(km, PI * EARTH_RADIUS_KM, max_relative = 1e-9);
    }

    #[test]
    fn test_format_distance_buckets() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(5.0), "5.0km");
        assert_eq!(format_distance(15.0), "15km");
        assert_eq!(format_distance(0.0), "0m");
    }

    #[test]
    fn test_format_distance_boundaries_are_strict() {
        assert_eq!(format_distance(0.999), "999m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(1.001), "1.0km");
        assert_eq!(format_distance(9.999), "10.0km");
        assert_eq!(format_distance(10.0), "10km");
        assert_eq!(format_distance(10.001), "10km");
    }

    #[test]
    fn test_format_distance_rounding() {
        assert_eq!(format_distance(0.1234), "123m");
        assert_eq!(format_distance(2.26), "2.3km");
        assert_eq!(format_distance(14.6), "15km");
        assert_eq!(format_distance(8.934), "8.9km");
    }

    #[test]
    fn test_format_distance_halves_round_up_in_every_bucket() {
        assert_eq!(format_distance(0.0005), "1m");
        assert_eq!(format_distance(1.25), "1.3km");
        assert_eq!(format_distance(1.75), "1.8km");
        assert_eq!(format_distance(8.25), "8.3km");
        assert_eq!(format_distance(12.5), "13km");
    }
}
