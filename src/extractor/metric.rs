//! Metric grid format interpretation

use log::debug;
use regex::Captures;

use crate::coordinate::{Bounds, CoordinateSystem, Point};
use crate::transform::GeodeticTransform;
use crate::utils::string_utils;

use super::{ExtractedCoordinate, Extraction};

/// Interpret a matched grouped-number pair as a metric coordinate
///
/// Candidate systems are tried in priority order: LV95, then the legacy
/// LV03 frame, then WebMercator. For each, both axis orders are tested
/// against the system's regional bounds.
pub(crate) fn from_grouped_numbers(
    captures: &Captures<'_>,
    transformer: &dyn GeodeticTransform,
) -> Option<Extraction> {
    let first = parse_grouped(captures.get(1)?.as_str())?;
    let second = parse_grouped(captures.get(2)?.as_str())?;

    if let Some(point) = candidate_in(first, second, CoordinateSystem::Lv95.bounds()?) {
        return Some(resolved(CoordinateSystem::Lv95, point));
    }

    // A legacy-frame hit still needs the asynchronous datum correction
    if let Some(point) = candidate_in(first, second, CoordinateSystem::Lv03.bounds()?) {
        debug!("({}, {}) reads as a legacy LV03 coordinate", point.x, point.y);
        return Some(Extraction::LegacyDatum(point));
    }

    // WebMercator's own bounds span the globe; its regional gate is the
    // geodetic bounds carried over into meters
    let gate = CoordinateSystem::Wgs84.bounds_as(CoordinateSystem::WebMercator, transformer)?;
    if let Some(point) = candidate_in(first, second, &gate) {
        return Some(resolved(CoordinateSystem::WebMercator, point));
    }

    None
}

fn resolved(system: CoordinateSystem, point: Point) -> Extraction {
    Extraction::Resolved(ExtractedCoordinate {
        coordinate_system: system,
        coordinate: Point::new(
            system.round_coordinate_value(point.x),
            system.round_coordinate_value(point.y),
        ),
    })
}

/// Test both axis orders against the bounds, first reading preferred
fn candidate_in(first: f64, second: f64, bounds: &Bounds) -> Option<Point> {
    if bounds.contains(first, second) {
        return Some(Point::new(first, second));
    }
    if bounds.contains(second, first) {
        return Some(Point::new(second, first));
    }
    None
}

fn parse_grouped(text: &str) -> Option<f64> {
    string_utils::strip_thousands_separators(text).parse().ok()
}
