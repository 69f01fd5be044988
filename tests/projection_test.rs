//! Integration tests for coordinate systems, bounds and pyramids

extern crate std;

use coordkit::{AnalyticTransformer, Bounds, CoordinateSystem, Point};

#[test]
fn test_regional_bounds_reproject_into_every_system() {
    let _ = env_logger::builder().is_test(true).try_init();

    // The regional systems reproject into every target; the global
    // Mercator square stays within the closed-form pair (the national
    // polynomials are only defined near the national bounds)
    let regional = [
        CoordinateSystem::Lv95,
        CoordinateSystem::Lv03,
        CoordinateSystem::Wgs84,
    ];
    for source in regional {
        for target in CoordinateSystem::ALL {
            let reprojected = source.bounds_as(target, &AnalyticTransformer);
            std::assert!(
                reprojected.is_some(),
                "no bounds reprojecting {} into {}",
                source,
                target
            );
            let bounds = reprojected.unwrap();
            std::assert!(bounds.lower_x <= bounds.upper_x);
            std::assert!(bounds.lower_y <= bounds.upper_y);
        }
    }

    let mercator_as_wgs84 = CoordinateSystem::WebMercator
        .bounds_as(CoordinateSystem::Wgs84, &AnalyticTransformer)
        .unwrap();
    std::assert!((mercator_as_wgs84.lower_x - -180.0).abs() < 1e-6);
    std::assert!((mercator_as_wgs84.upper_x - 180.0).abs() < 1e-6);
}

#[test]
fn test_reprojection_identity_returns_original() {
    let lv95 = CoordinateSystem::Lv95;
    let bounds = lv95.bounds_as(lv95, &AnalyticTransformer).unwrap();
    std::assert_eq!(&bounds, lv95.bounds().unwrap());
}

#[test]
fn test_zoom_resolution_monotonicity() {
    let transformer = AnalyticTransformer;
    for system in CoordinateSystem::ALL {
        // A view center in the system's own units, near the middle of
        // the supported region
        let center = match system {
            CoordinateSystem::Lv95 => Point::new(2660013.5, 1185171.5),
            CoordinateSystem::Lv03 => Point::new(660013.5, 185171.5),
            CoordinateSystem::Wgs84 => Point::new(7.44, 46.95),
            CoordinateSystem::WebMercator => Point::new(828217.0, 5926066.0),
        };
        let mut previous = f64::INFINITY;
        for zoom in 0..10 {
            let resolution = system
                .resolution_for_zoom_and_center(zoom as f64, center, &transformer)
                .unwrap();
            std::assert!(
                resolution < previous,
                "{} resolution did not shrink at zoom {}",
                system,
                zoom
            );
            previous = resolution;
        }
    }
}

#[test]
fn test_swiss_zoom_round_trip_through_public_surface() {
    let transformer = AnalyticTransformer;
    let center = Point::new(2660013.5, 1185171.5);
    let lv95 = CoordinateSystem::Lv95;
    for zoom in 0..=14 {
        let resolution = lv95
            .resolution_for_zoom_and_center(zoom as f64, center, &transformer)
            .unwrap();
        let recovered = lv95
            .zoom_for_resolution_and_center(resolution, center, &transformer)
            .unwrap();
        std::assert_eq!(recovered, zoom as f64);
    }
}

#[test]
fn test_polyline_splitting_against_swiss_bounds() {
    let bounds = Bounds::new(0.0, 50.0, 100.0, 100.0);
    let line = [
        Point::new(-1.0, 51.0),
        Point::new(1.0, 51.0),
        Point::new(1.0, 101.0),
        Point::new(101.0, 101.0),
        Point::new(99.0, 99.0),
        Point::new(1.0, 51.0),
    ];
    let chunks = bounds.split_if_out_of_bounds(&line).unwrap();
    let statuses: Vec<bool> = chunks.iter().map(|c| c.is_within_bounds).collect();
    std::assert_eq!(statuses, vec![false, true, false, true]);

    // National bounds work the same way on real data
    let lv95 = CoordinateSystem::Lv95.bounds().unwrap();
    let route = [
        Point::new(2485000.0, 1150000.0),
        Point::new(2600000.0, 1200000.0),
        Point::new(2850000.0, 1250000.0),
    ];
    let chunks = lv95.split_if_out_of_bounds(&route).unwrap();
    std::assert!(chunks.len() >= 3);
    std::assert!(chunks.iter().any(|c| c.is_within_bounds));
    std::assert!(chunks.iter().any(|c| !c.is_within_bounds));
}

#[test]
fn test_rounding_matches_system_precision() {
    std::assert_eq!(
        CoordinateSystem::Lv95.round_coordinate_value(2600000.126),
        2600000.13
    );
    std::assert_eq!(
        CoordinateSystem::Wgs84.round_coordinate_value(7.43958333333),
        7.439583
    );
}
