//! Point containment and nearest-locality lookup.

use hydro_geo::Locality;

/// Mean Earth radius used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Test whether (lat, lon) lies inside a ring of `[lon, lat]` vertices.
///
/// Even-odd ray casting. The closing edge from the last vertex back to the
/// first is implied, so a ring may or may not repeat its first vertex.
/// Rings with fewer than 3 vertices contain nothing. Points exactly on an
/// edge or vertex may land on either side.
pub fn is_inside(lat: f64, lon: f64, ring: &[[f64; 2]]) -> bool {
    if ring.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let [xi, yi] = ring[i];
        let [xj, yj] = ring[j];

        // The strict inequality skips horizontal edges, so yj - yi is never zero here.
        if (yi > lat) != (yj > lat) && lon < (xj - xi) * (lat - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Great-circle distance in kilometers (haversine formula).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    EARTH_RADIUS_KM * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// The closest locality to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestLocality<'a> {
    pub locality: &'a Locality,
    pub distance_km: f64,
}

/// Find the closest locality. Ties go to the earliest entry.
///
/// Returns None only for an empty slice; distance cutoffs are the caller's
/// decision.
pub fn nearest_locality(lat: f64, lon: f64, localities: &[Locality]) -> Option<NearestLocality<'_>> {
    let mut best: Option<NearestLocality<'_>> = None;

    for locality in localities {
        let distance_km = haversine_km(lat, lon, locality.lat, locality.lon);
        if best.map_or(true, |b| distance_km < b.distance_km) {
            best = Some(NearestLocality {
                locality,
                distance_km,
            });
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Vec<[f64; 2]> {
        vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
    }

    #[test]
    fn test_inside_square() {
        let ring = unit_square();
        assert!(is_inside(0.5, 0.5, &ring));
        assert!(!is_inside(1.5, 0.5, &ring));
        assert!(!is_inside(0.5, -0.1, &ring));
    }

    #[test]
    fn test_closed_and_open_rings_agree() {
        let open = unit_square();
        let mut closed = open.clone();
        closed.push(open[0]);
        for &(lat, lon) in &[(0.5, 0.5), (0.2, 0.9), (2.0, 2.0), (-0.5, 0.5)] {
            assert_eq!(is_inside(lat, lon, &open), is_inside(lat, lon, &closed));
        }
    }

    #[test]
    fn test_degenerate_ring_contains_nothing() {
        assert!(!is_inside(0.0, 0.0, &[]));
        assert!(!is_inside(0.0, 0.0, &[[0.0, 0.0]]));
        assert!(!is_inside(0.5, 0.5, &[[0.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn test_concave_notch() {
        // U shape opening to the north
        let ring = vec![
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
        ];
        assert!(is_inside(2.0, 0.5, &ring));
        assert!(is_inside(2.0, 2.5, &ring));
        assert!(!is_inside(2.0, 1.5, &ring));
        assert!(is_inside(0.5, 1.5, &ring));
    }

    #[test]
    fn test_ray_through_horizontal_edge() {
        // lat 1.0 runs along the bottom of the notch
        let ring = vec![
            [0.0, 0.0],
            [3.0, 0.0],
            [3.0, 3.0],
            [2.0, 3.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 3.0],
            [0.0, 3.0],
        ];
        assert!(is_inside(1.0, 0.5, &ring));
        assert!(is_inside(1.0, 2.5, &ring));
    }

    #[test]
    fn test_haversine_known_distance() {
        // Accra to Kumasi is roughly 200 km
        let d = haversine_km(5.6037, -0.1870, 6.6885, -1.6244);
        assert!((d - 199.0).abs() < 5.0, "distance was {}", d);
        assert_eq!(haversine_km(1.0, 2.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!((d - 111.19).abs() < 0.01, "distance was {}", d);
    }

    #[test]
    fn test_nearest_locality() {
        let localities = vec![
            Locality::new("Accra", 5.6037, -0.1870),
            Locality::new("Tamale", 9.4075, -0.8533),
        ];
        let nearest = nearest_locality(9.0, -1.0, &localities).unwrap();
        assert_eq!(nearest.locality.name, "Tamale");
        assert!(nearest.distance_km < 50.0);
    }

    #[test]
    fn test_nearest_tie_prefers_first() {
        let localities = vec![
            Locality::new("West", 0.0, -1.0),
            Locality::new("East", 0.0, 1.0),
        ];
        assert_eq!(nearest_locality(0.0, 0.0, &localities).unwrap().locality.name, "West");

        let reversed: Vec<_> = localities.into_iter().rev().collect();
        assert_eq!(nearest_locality(0.0, 0.0, &reversed).unwrap().locality.name, "East");
    }

    #[test]
    fn test_nearest_of_none() {
        assert!(nearest_locality(0.0, 0.0, &[]).is_none());
    }
}
