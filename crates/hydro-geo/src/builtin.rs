//! Built-in reference tables for the supported countries.
//!
//! Boundaries are simplified outlines (a dozen or so vertices each).
//! Regions are approximate administrative extents and may overlap; a point
//! counts toward every region whose box contains it.

use hydro_common::BoundingBox;

use crate::{Boundary, CountryReference, Locality, RegionDefinition};

pub(crate) fn countries() -> Vec<(&'static str, CountryReference)> {
    vec![("ghana", ghana()), ("kenya", kenya()), ("india", india())]
}

fn region(name: &str, min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> RegionDefinition {
    RegionDefinition::bbox(name, BoundingBox::new(min_lon, min_lat, max_lon, max_lat))
}

fn ghana() -> CountryReference {
    CountryReference {
        name: "Ghana".to_string(),
        boundary: Boundary::polygon(
            "Ghana",
            vec![
                [-2.7, 4.7],
                [-0.1, 5.0],
                [0.1, 6.0],
                [0.5, 6.4],
                [0.5, 9.5],
                [0.2, 10.7],
                [-0.5, 11.0],
                [-2.8, 11.0],
                [-3.2, 10.0],
                [-3.0, 7.5],
                [-2.7, 4.7],
            ],
        ),
        center: [7.9465, -1.0232],
        bbox: BoundingBox::new(-3.5, 4.5, 1.5, 11.5),
        localities: vec![
            Locality::new("Accra", 5.6037, -0.1870),
            Locality::new("Kumasi", 6.6885, -1.6244),
            Locality::new("Tamale", 9.4075, -0.8533),
            Locality::new("Cape Coast", 5.1053, -1.2466),
            Locality::new("Sekondi-Takoradi", 4.9348, -1.7041),
        ],
        regions: vec![
            region("Upper East", -1.6, 10.3, 0.1, 11.2),
            region("Northern Region", -2.8, 8.0, 0.5, 10.3),
            region("Ashanti", -2.5, 5.9, -0.9, 7.5),
            region("Volta Region", -0.2, 5.7, 1.2, 8.9),
            region("Greater Accra", -0.6, 5.4, 0.7, 6.1),
            region("Western Region", -3.3, 4.7, -1.5, 7.0),
        ],
    }
}

fn kenya() -> CountryReference {
    CountryReference {
        name: "Kenya".to_string(),
        boundary: Boundary::polygon(
            "Kenya",
            vec![
                [41.9, 3.9],
                [40.9, -1.5],
                [40.0, -4.1],
                [39.2, -4.7],
                [37.6, -3.5],
                [33.9, -1.0],
                [34.0, 1.0],
                [34.5, 4.2],
                [36.0, 4.5],
                [38.0, 3.5],
                [41.9, 3.9],
            ],
        ),
        center: [0.0236, 37.9062],
        bbox: BoundingBox::new(33.5, -5.0, 42.0, 5.0),
        localities: vec![
            Locality::new("Nairobi", -1.2921, 36.8219),
            Locality::new("Mombasa", -4.0435, 39.6682),
            Locality::new("Kisumu", -0.1022, 34.7617),
            Locality::new("Nakuru", -0.3031, 36.0800),
            Locality::new("Eldoret", 0.5143, 35.2698),
        ],
        regions: vec![
            region("Northern Kenya", 35.8, 1.0, 41.9, 4.6),
            region("Eastern Kenya", 37.5, -3.0, 41.0, 1.0),
            region("Rift Valley", 35.0, -2.0, 37.0, 1.0),
            region("Central Kenya", 36.4, -1.3, 37.6, 0.5),
            region("Western Kenya", 33.9, -1.0, 35.5, 1.3),
            region("Coast", 38.5, -4.7, 41.6, -1.0),
        ],
    }
}

fn india() -> CountryReference {
    CountryReference {
        name: "India".to_string(),
        boundary: Boundary::polygon(
            "India",
            vec![
                [77.0, 35.0],
                [80.0, 34.0],
                [82.0, 30.0],
                [88.0, 28.0],
                [90.0, 28.0],
                [92.0, 27.0],
                [96.0, 20.0],
                [97.0, 17.0],
                [94.0, 15.0],
                [80.0, 8.0],
                [77.0, 8.0],
                [72.0, 20.0],
                [69.0, 23.0],
                [70.0, 28.0],
                [77.0, 35.0],
            ],
        ),
        center: [20.5937, 78.9629],
        bbox: BoundingBox::new(68.0, 6.0, 98.0, 38.0),
        localities: vec![
            Locality::new("New Delhi", 28.6139, 77.2090),
            Locality::new("Mumbai", 19.0760, 72.8777),
            Locality::new("Kolkata", 22.5726, 88.3639),
            Locality::new("Chennai", 13.0827, 80.2707),
            Locality::new("Bangalore", 12.9716, 77.5946),
            Locality::new("Hyderabad", 17.3850, 78.4867),
            Locality::new("Ahmedabad", 23.0225, 72.5714),
            Locality::new("Pune", 18.5204, 73.8567),
            Locality::new("Jaipur", 26.9124, 75.7873),
            Locality::new("Lucknow", 26.8467, 80.9462),
        ],
        regions: vec![
            region("Northern Plains", 74.0, 24.0, 88.0, 31.0),
            region("Western India", 68.0, 19.0, 75.0, 26.0),
            region("Central India", 74.0, 19.0, 84.0, 25.0),
            region("Southern Peninsula", 74.0, 8.0, 81.0, 19.0),
            region("Eastern India", 83.0, 19.0, 92.0, 27.0),
        ],
    }
}
