//! Legacy datum reframing
//!
//! The LV03 frame differs from LV95 by a measured distortion field, not a
//! closed-form projection. The built-in reframer applies the constant
//! false-origin offset, which is exact at the projection origin and
//! drifts up to about 1.6 m towards the national border; callers needing
//! survey accuracy supply a grid-backed `DatumReframer` instead.

use futures::future::{self, BoxFuture};
use log::debug;

use crate::coordinate::{CoordError, CoordResult, CoordinateSystem, Point};

use super::DatumReframer;

/// Easting offset between the LV03 and LV95 frames
pub const FALSE_EASTING_SHIFT: f64 = 2_000_000.0;
/// Northing offset between the LV03 and LV95 frames
pub const FALSE_NORTHING_SHIFT: f64 = 1_000_000.0;

/// Constant-offset implementation of the reframing collaborator
pub struct FixedShiftReframer;

impl DatumReframer for FixedShiftReframer {
    fn reframe<'a>(
        &'a self,
        from: CoordinateSystem,
        point: Point,
    ) -> BoxFuture<'a, CoordResult<Point>> {
        let result = match from {
            CoordinateSystem::Lv03 => {
                debug!("Reframing LV03 ({}, {}) into LV95", point.x, point.y);
                Ok(Point::new(
                    point.x + FALSE_EASTING_SHIFT,
                    point.y + FALSE_NORTHING_SHIFT,
                ))
            }
            other => Err(CoordError::ReframeFailed(format!(
                "no reframing path from {}",
                other
            ))),
        };
        Box::pin(future::ready(result))
    }
}
