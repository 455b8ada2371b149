//! Tests for BoundingBox operations.

use hydro_common::bbox::{BboxParseError, BoundingBox};

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-180.0, -90.0, 180.0, 90.0);
    assert_eq!(bbox.min_lon, -180.0);
    assert_eq!(bbox.min_lat, -90.0);
    assert_eq!(bbox.max_lon, 180.0);
    assert_eq!(bbox.max_lat, 90.0);
    assert!(bbox.is_valid());
}

#[test]
fn test_bbox_from_array() {
    let bbox = BoundingBox::from([68.0, 6.0, 98.0, 38.0]);
    assert_eq!(bbox.to_array(), [68.0, 6.0, 98.0, 38.0]);
}

// ============================================================================
// Parsing tests
// ============================================================================

#[test]
fn test_parse_bbox_integer() {
    let bbox = BoundingBox::from_bbox_string("0,0,100,80").unwrap();
    assert_eq!(bbox.width(), 100.0);
    assert_eq!(bbox.height(), 80.0);
}

#[test]
fn test_parse_bbox_too_few() {
    let result = BoundingBox::from_bbox_string("0,0,100");
    assert!(matches!(result, Err(BboxParseError::InvalidFormat(_))));
}

#[test]
fn test_parse_bbox_not_a_number() {
    let result = BoundingBox::from_bbox_string("0,abc,100,100");
    assert!(matches!(result, Err(BboxParseError::InvalidNumber(ref s)) if s == "abc"));
}

// ============================================================================
// Geometry tests
// ============================================================================

#[test]
fn test_center_is_lat_lon() {
    let bbox = BoundingBox::new(-3.5, 4.5, 1.5, 11.5);
    let (lat, lon) = bbox.center();
    assert!((lat - 8.0).abs() < 1e-9);
    assert!((lon - (-1.0)).abs() < 1e-9);
}

#[test]
fn test_intersects() {
    let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
    let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
}

#[test]
fn test_enclosing_ring() {
    let ring = [[-2.7, 4.7], [-0.1, 5.0], [0.5, 9.5], [-2.8, 11.0], [-2.7, 4.7]];
    let bbox = BoundingBox::enclosing(&ring).unwrap();
    assert_eq!(bbox.to_array(), [-2.8, 4.7, 0.5, 11.0]);
    assert!(BoundingBox::enclosing(&[]).is_none());
}
