//! Region aggregation: bucket extracted points and average each bucket.

use hydro_geo::{RegionArea, RegionDefinition};

use crate::locator::is_inside;
use crate::types::{ExtractedPoint, RegionSummary};

/// Average anomaly per region, sorted ascending (most negative first).
///
/// Regions without any matching point are left out. Regions may overlap, so
/// one point can count toward several regions. Equal anomalies keep the
/// order of `regions`.
pub fn aggregate(points: &[ExtractedPoint], regions: &[RegionDefinition]) -> Vec<RegionSummary> {
    let mut summaries: Vec<RegionSummary> = regions
        .iter()
        .filter_map(|region| {
            let (sum, count) = points
                .iter()
                .filter(|p| region_contains(&region.area, p.lat, p.lng))
                .fold((0.0, 0usize), |(sum, count), p| (sum + p.value, count + 1));

            if count == 0 {
                tracing::trace!(region = %region.name, "Region has no points");
                return None;
            }

            Some(RegionSummary {
                name: region.name.clone(),
                anomaly: round_to_tenth(sum / count as f64),
            })
        })
        .collect();

    summaries.sort_by(|a, b| a.anomaly.total_cmp(&b.anomaly));
    summaries
}

/// Membership test for a region area.
pub fn region_contains(area: &RegionArea, lat: f64, lng: f64) -> bool {
    match area {
        RegionArea::Bbox(bbox) => bbox.contains(lat, lng),
        RegionArea::Polygon(ring) => is_inside(lat, lng, ring),
    }
}

/// Mean of all point values, or None when there are no points.
pub fn overall_average(points: &[ExtractedPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    Some(points.iter().map(|p| p.value).sum::<f64>() / points.len() as f64)
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    let rounded = (value * 10.0).round() / 10.0;
    // Avoid "-0.0" in output
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hydro_common::BoundingBox;

    fn point(lat: f64, lng: f64, value: f64) -> ExtractedPoint {
        ExtractedPoint {
            lat,
            lng,
            value,
            name: String::new(),
        }
    }

    #[test]
    fn test_single_region_average() {
        let points = vec![
            point(5.0, -1.0, -200.0),
            point(5.0, 0.0, -400.0),
            point(6.0, -1.0, -600.0),
            point(6.0, 0.0, -800.0),
        ];
        let regions = vec![RegionDefinition::bbox("All", BoundingBox::new(-1.0, 5.0, 0.0, 6.0))];

        let summaries = aggregate(&points, &regions);
        assert_eq!(
            summaries,
            vec![RegionSummary {
                name: "All".to_string(),
                anomaly: -500.0
            }]
        );
    }

    #[test]
    fn test_empty_regions_omitted_and_sorted() {
        let points = vec![point(1.0, 1.0, 3.0), point(9.0, 9.0, -7.0), point(9.5, 9.5, -8.0)];
        let regions = vec![
            RegionDefinition::bbox("South", BoundingBox::new(0.0, 0.0, 2.0, 2.0)),
            RegionDefinition::bbox("Empty", BoundingBox::new(20.0, 20.0, 30.0, 30.0)),
            RegionDefinition::bbox("North", BoundingBox::new(8.0, 8.0, 10.0, 10.0)),
        ];

        let names: Vec<String> = aggregate(&points, &regions).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["North", "South"]);
    }

    #[test]
    fn test_polygon_region() {
        let points = vec![point(0.5, 0.5, 1.0), point(5.0, 5.0, 100.0)];
        let regions = vec![RegionDefinition::polygon(
            "Square",
            vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]],
        )];
        assert_eq!(aggregate(&points, &regions)[0].anomaly, 1.0);
    }

    #[test]
    fn test_ties_keep_definition_order() {
        let points = vec![point(0.5, 0.5, -2.0)];
        let bbox = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        let regions = vec![
            RegionDefinition::bbox("First", bbox),
            RegionDefinition::bbox("Second", bbox),
        ];
        let names: Vec<String> = aggregate(&points, &regions).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["First", "Second"]);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_tenth(-3.25), -3.3);
        assert_eq!(round_to_tenth(3.25), 3.3);
        assert_eq!(round_to_tenth(1.04), 1.0);
        assert_eq!(round_to_tenth(-0.04).to_string(), "0");
    }

    #[test]
    fn test_overall_average() {
        assert_eq!(overall_average(&[]), None);
        assert_eq!(
            overall_average(&[point(0.0, 0.0, 1.0), point(0.0, 0.0, 2.0)]),
            Some(1.5)
        );
    }
}
