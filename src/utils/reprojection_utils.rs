//! Reprojection helper functions
//!
//! Thin helpers composing the coordinate system registry and the
//! transform collaborator for callers that deal in flat extents and raw
//! coordinate lists (URL codecs, WMS/WMTS capability layers) rather than
//! the `Bounds` type.

use log::warn;

use crate::coordinate::{CoordinateSystem, Point};
use crate::transform::GeodeticTransform;

/// Reproject a flat `[min_x, min_y, max_x, max_y]` extent between systems
///
/// Corner ordering is re-normalized after the transform and the output is
/// rounded with the target system's precision. Returns `None` when the
/// transform collaborator fails; a failed reprojection never yields a
/// partial extent.
pub fn reproject_extent(
    extent: [f64; 4],
    from: CoordinateSystem,
    to: CoordinateSystem,
    transformer: &dyn GeodeticTransform,
) -> Option<[f64; 4]> {
    if from == to {
        return Some(extent);
    }

    let bottom_left = reproject_corner(Point::new(extent[0], extent[1]), from, to, transformer)?;
    let top_right = reproject_corner(Point::new(extent[2], extent[3]), from, to, transformer)?;

    Some([
        to.round_coordinate_value(bottom_left.x.min(top_right.x)),
        to.round_coordinate_value(bottom_left.y.min(top_right.y)),
        to.round_coordinate_value(bottom_left.x.max(top_right.x)),
        to.round_coordinate_value(bottom_left.y.max(top_right.y)),
    ])
}

fn reproject_corner(
    corner: Point,
    from: CoordinateSystem,
    to: CoordinateSystem,
    transformer: &dyn GeodeticTransform,
) -> Option<Point> {
    match transformer.transform(from, to, corner) {
        Ok(point) => Some(point),
        Err(e) => {
            warn!(
                "Failed to reproject extent corner ({}, {}) from {} to {}: {}",
                corner.x, corner.y, from, to, e
            );
            None
        }
    }
}

/// Reproject a single point and round it with the target's precision
pub fn reproject_and_round(
    point: Point,
    from: CoordinateSystem,
    to: CoordinateSystem,
    transformer: &dyn GeodeticTransform,
) -> Option<Point> {
    let transformed = match transformer.transform(from, to, point) {
        Ok(transformed) => transformed,
        Err(e) => {
            warn!(
                "Failed to reproject ({}, {}) from {} to {}: {}",
                point.x, point.y, from, to, e
            );
            return None;
        }
    };
    Some(round_point(to, transformed))
}

/// Round a point's planar components with a system's precision
pub fn round_point(system: CoordinateSystem, point: Point) -> Point {
    Point {
        x: system.round_coordinate_value(point.x),
        y: system.round_coordinate_value(point.y),
        z: point.z,
    }
}

/// Strip elevation components from a coordinate sequence
pub fn remove_z(coordinates: &[Point]) -> Vec<Point> {
    coordinates.iter().map(|point| point.without_z()).collect()
}
