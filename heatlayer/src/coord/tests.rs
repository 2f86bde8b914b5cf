//! Tests for coordinate conversion

use super::*;
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

#[test]
fn test_origin_maps_to_world_center() {
    let pixels = WebMercatorProjection.to_global_pixels([0.0, 0.0], 0).unwrap();
    assert!((pixels[0] - 128.0).abs() < EPSILON);
    assert!((pixels[1] - 128.0).abs() < EPSILON);
}

#[test]
fn test_world_grows_with_zoom() {
    let pixels = WebMercatorProjection.to_global_pixels([0.0, 0.0], 1).unwrap();
    assert!((pixels[0] - 256.0).abs() < EPSILON);
    assert!((pixels[1] - 256.0).abs() < EPSILON);
}

#[test]
fn test_antimeridian_edges() {
    let west = WebMercatorProjection
        .to_global_pixels([0.0, -180.0], 0)
        .unwrap();
    let east = WebMercatorProjection.to_global_pixels([0.0, 180.0], 0).unwrap();
    assert!(west[0].abs() < EPSILON);
    assert!((east[0] - 256.0).abs() < EPSILON);
}

#[test]
fn test_north_is_up() {
    // Moscow: 55.7558°N, 37.6173°E
    let moscow = WebMercatorProjection
        .to_global_pixels([55.7558, 37.6173], 0)
        .unwrap();
    assert!(moscow[1] < 128.0, "Northern hemisphere should have y < 128");
    assert!(moscow[0] > 128.0, "Eastern hemisphere should have x > 128");
}

#[test]
fn test_max_latitude_reaches_top_edge() {
    let top = WebMercatorProjection
        .to_global_pixels([MAX_LAT, 0.0], 0)
        .unwrap();
    assert!(top[1].abs() < 1e-6);
}

#[test]
fn test_known_location_roundtrip() {
    let london = [51.5074, -0.1278];
    for zoom in [0, 5, 10, 15, MAX_ZOOM] {
        let pixels = WebMercatorProjection.to_global_pixels(london, zoom).unwrap();
        let back = WebMercatorProjection
            .from_global_pixels(pixels, zoom)
            .unwrap();
        assert!(
            (back[0] - london[0]).abs() < EPSILON,
            "Zoom {}: latitude drifted to {}",
            zoom,
            back[0]
        );
        assert!((back[1] - london[1]).abs() < EPSILON);
    }
}

#[test]
fn test_invalid_latitude_too_high() {
    let result = WebMercatorProjection.to_global_pixels([90.0, 0.0], 0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_latitude_too_low() {
    let result = WebMercatorProjection.to_global_pixels([-90.0, 0.0], 0);
    assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
}

#[test]
fn test_invalid_longitude() {
    let result = WebMercatorProjection.to_global_pixels([0.0, 181.0], 0);
    assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
}

#[test]
fn test_non_finite_rejected_both_ways() {
    let forward = WebMercatorProjection.to_global_pixels([f64::NAN, 0.0], 0);
    assert!(matches!(forward, Err(CoordError::NonFinite { .. })));

    let backward = WebMercatorProjection.from_global_pixels([0.0, f64::INFINITY], 0);
    assert!(matches!(backward, Err(CoordError::NonFinite { .. })));
}

#[test]
fn test_invalid_zoom() {
    let result = WebMercatorProjection.to_global_pixels([0.0, 0.0], MAX_ZOOM + 1);
    assert_eq!(result, Err(CoordError::InvalidZoom(MAX_ZOOM + 1)));
}

#[test]
fn test_error_display() {
    let err = CoordError::InvalidLongitude(200.0);
    assert!(err.to_string().contains("200"));
    let err = CoordError::NonFinite {
        x: f64::NAN,
        y: 1.0,
    };
    assert!(err.to_string().contains("finite"));
}

proptest! {
    /// Property: projecting and unprojecting at zoom 0 returns the input.
    #[test]
    fn prop_roundtrip_at_reference_zoom(
        lat in -85.0f64..85.0f64,
        lon in -180.0f64..180.0f64,
    ) {
        let pixels = WebMercatorProjection.to_global_pixels([lat, lon], 0).unwrap();
        let back = WebMercatorProjection.from_global_pixels(pixels, 0).unwrap();
        prop_assert!((back[0] - lat).abs() < 1e-9);
        prop_assert!((back[1] - lon).abs() < 1e-9);
    }

    /// Property: global pixels at zoom 0 stay within the 256 pixel world.
    #[test]
    fn prop_pixels_inside_world(
        lat in MIN_LAT..MAX_LAT,
        lon in MIN_LON..MAX_LON,
    ) {
        let [x, y] = WebMercatorProjection.to_global_pixels([lat, lon], 0).unwrap();
        prop_assert!((0.0..=WORLD_SIZE).contains(&x));
        prop_assert!((-1e-9..=WORLD_SIZE + 1e-9).contains(&y));
    }
}
