//! Geodetic transformation collaborators
//!
//! The engine delegates analytic reprojection, legacy datum reframing and
//! military-grid decoding to external capabilities expressed as traits.
//! Built-in closed-form implementations cover the transform and reframing
//! seams well enough for most callers; survey-grade deployments plug in
//! their own.

mod analytic;
mod reframe;

pub use analytic::{AnalyticTransformer, EARTH_RADIUS};
pub use reframe::FixedShiftReframer;

use futures::future::BoxFuture;

use crate::coordinate::{CoordResult, CoordinateSystem, Point};

/// Closed-form reprojection between two supported reference systems
///
/// Pure and synchronous; called for every bounds reprojection and for
/// testing free-text candidates against another system's bounds.
pub trait GeodeticTransform {
    /// Transform a point from one system's native units to another's
    fn transform(
        &self,
        from: CoordinateSystem,
        to: CoordinateSystem,
        point: Point,
    ) -> CoordResult<Point>;
}

/// High-precision datum correction between historic national frames
///
/// Reframing needs a measured correction grid rather than a closed-form
/// projection, so implementations may be network-backed: the call is
/// asynchronous and may fail. Dropping the returned future cancels the
/// operation with nothing to roll back.
pub trait DatumReframer: Send + Sync {
    /// Reframe a point out of the given legacy frame
    fn reframe<'a>(
        &'a self,
        from: CoordinateSystem,
        point: Point,
    ) -> BoxFuture<'a, CoordResult<Point>>;
}

/// Military-grid token decoding into geodetic longitude/latitude
///
/// Assumed total over tokens that already passed the extractor's shape
/// and precision checks.
pub trait MgrsDecoder {
    /// Decode a normalized (uppercase, no whitespace) grid token
    fn mgrs_to_geodetic(&self, token: &str) -> CoordResult<Point>;
}
