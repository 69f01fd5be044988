//! Coordinate reference system model
//!
//! The engine works with a closed set of four reference systems: the two
//! Swiss national grids, geodetic WGS84 and the global web-tile Mercator
//! projection. The set is fixed and small, so each system is a variant of
//! one enum and behavior differences are dispatched per variant rather
//! than through an open hierarchy. Instances are plain copyable values;
//! all heavyweight attributes live in the static registry.

use std::fmt;

use lazy_static::lazy_static;
use log::warn;

use crate::projection::{standard, swiss};
use crate::transform::GeodeticTransform;

use super::bounds::Bounds;
use super::errors::CoordResult;
use super::point::Point;
use super::registry::{SystemDefinition, REGISTRY};
use super::resolution::ResolutionStep;

/// Number of zoom steps in a standard (global) pyramid
pub const STANDARD_PYRAMID_STEPS: u32 = 21;
/// Pixel span of one tile, shared by every supported tile grid
pub const TILE_SIZE: f64 = 256.0;

/// Identifier for the supported coordinate systems
///
/// Two systems are equal iff they are the same variant; the EPSG code is
/// derived from the variant and can never diverge from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateSystem {
    /// CH1903+ / LV95, the current Swiss national grid (EPSG:2056)
    Lv95,
    /// CH1903 / LV03, the legacy Swiss national grid (EPSG:21781)
    Lv03,
    /// WGS 84 geodetic longitude/latitude (EPSG:4326)
    Wgs84,
    /// Spherical web Mercator (EPSG:3857)
    WebMercator,
}

lazy_static! {
    static ref SWISS_STEPS: Vec<ResolutionStep> = REGISTRY
        .swiss_pyramid
        .resolutions
        .iter()
        .enumerate()
        .map(|(zoom, resolution)| ResolutionStep::new(zoom as u32, *resolution))
        .collect();
    static ref WGS84_STEPS: Vec<ResolutionStep> = standard_steps(CoordinateSystem::Wgs84);
    static ref WEB_MERCATOR_STEPS: Vec<ResolutionStep> =
        standard_steps(CoordinateSystem::WebMercator);
}

/// Standard pyramid: the bounds width split over a 256-px tile, halved
/// at every zoom step
fn standard_steps(system: CoordinateSystem) -> Vec<ResolutionStep> {
    let tile_span = system.bounds().map(|b| b.width()).unwrap_or(0.0);
    (0..STANDARD_PYRAMID_STEPS)
        .map(|zoom| ResolutionStep::new(zoom, tile_span / TILE_SIZE / 2f64.powi(zoom as i32)))
        .collect()
}

impl CoordinateSystem {
    /// Every supported system, in extraction priority order
    pub const ALL: [CoordinateSystem; 4] = [
        CoordinateSystem::Lv95,
        CoordinateSystem::Lv03,
        CoordinateSystem::Wgs84,
        CoordinateSystem::WebMercator,
    ];

    /// Look up a coordinate system by its EPSG code
    pub fn from_epsg(epsg: u32) -> Option<CoordinateSystem> {
        CoordinateSystem::ALL
            .into_iter()
            .find(|system| system.epsg_code() == epsg)
    }

    fn definition(&self) -> &'static SystemDefinition {
        match self {
            CoordinateSystem::Lv95 => &REGISTRY.lv95,
            CoordinateSystem::Lv03 => &REGISTRY.lv03,
            CoordinateSystem::Wgs84 => &REGISTRY.wgs84,
            CoordinateSystem::WebMercator => &REGISTRY.web_mercator,
        }
    }

    /// Get the EPSG code for this coordinate system
    pub fn epsg_code(&self) -> u32 {
        self.definition().epsg
    }

    /// Get the "EPSG:xxxx" identifier string
    pub fn epsg_identifier(&self) -> String {
        format!("EPSG:{}", self.epsg_code())
    }

    /// Get the display label
    pub fn label(&self) -> &'static str {
        &self.definition().label
    }

    /// Get the native-transform descriptor consumed by the geodetic
    /// transform collaborator
    pub fn proj_descriptor(&self) -> &'static str {
        &self.definition().proj
    }

    /// True for the two Swiss national systems
    pub fn is_swiss(&self) -> bool {
        matches!(self, CoordinateSystem::Lv95 | CoordinateSystem::Lv03)
    }

    /// Get the bounds of this system, if defined
    pub fn bounds(&self) -> Option<&'static Bounds> {
        self.definition().bounds.as_ref()
    }

    /// Check whether a coordinate lies inside this system's bounds
    ///
    /// False when the system has no bounds; inclusive on all four edges
    /// otherwise.
    pub fn is_in_bounds(&self, x: f64, y: f64) -> bool {
        match self.bounds() {
            Some(bounds) => bounds.contains(x, y),
            None => false,
        }
    }

    /// Reproject this system's bounds into another system
    ///
    /// Returns the bounds unchanged (no transform call) when `target` is
    /// this system. Returns `None` when this system has no bounds or the
    /// transform collaborator fails; a failed reprojection never produces
    /// a partial rectangle.
    pub fn bounds_as(
        &self,
        target: CoordinateSystem,
        transformer: &dyn GeodeticTransform,
    ) -> Option<Bounds> {
        let bounds = self.bounds()?;
        if *self == target {
            return Some(bounds.clone());
        }

        let bottom_left = match transformer.transform(*self, target, bounds.bottom_left()) {
            Ok(point) => point,
            Err(e) => {
                warn!("Failed to reproject {} bounds into {}: {}", self, target, e);
                return None;
            }
        };
        let top_right = match transformer.transform(*self, target, bounds.top_right()) {
            Ok(point) => point,
            Err(e) => {
                warn!("Failed to reproject {} bounds into {}: {}", self, target, e);
                return None;
            }
        };
        if bottom_left.x > top_right.x || bottom_left.y > top_right.y {
            warn!(
                "Reprojection of {} bounds into {} produced an inverted rectangle",
                self, target
            );
            return None;
        }

        let mut reprojected = Bounds::new(bottom_left.x, bottom_left.y, top_right.x, top_right.y);
        if let Some(center) = bounds.custom_center() {
            match transformer.transform(*self, target, center) {
                Ok(point) => reprojected = reprojected.with_center(point),
                Err(e) => {
                    warn!("Failed to reproject {} center into {}: {}", self, target, e);
                    return None;
                }
            }
        }
        Some(reprojected)
    }

    /// Decimal places kept when rounding values of this system
    ///
    /// Metric systems round to centimeters, geodetic degrees to 6 places;
    /// the difference keeps displayed and URL-encoded coordinates both
    /// stable and compact per system.
    pub fn decimal_places(&self) -> u32 {
        match self {
            CoordinateSystem::Wgs84 => 6,
            _ => 2,
        }
    }

    /// Round a coordinate value with this system's precision
    pub fn round_coordinate_value(&self, value: f64) -> f64 {
        let factor = 10f64.powi(self.decimal_places() as i32);
        (value * factor).round() / factor
    }

    /// Get this system's zoom pyramid
    pub fn resolutions(&self) -> &'static [ResolutionStep] {
        match self {
            CoordinateSystem::Lv95 | CoordinateSystem::Lv03 => &SWISS_STEPS,
            CoordinateSystem::Wgs84 => &WGS84_STEPS,
            CoordinateSystem::WebMercator => &WEB_MERCATOR_STEPS,
        }
    }

    /// Resolution in native units per pixel at a zoom level
    ///
    /// Standard systems use the closed-form Mercator formula, which needs
    /// the view center latitude; WebMercator centers are converted to
    /// geodetic through the transform collaborator first. Swiss systems
    /// interpolate their discrete pyramid and ignore the center (the
    /// pyramid already encodes the latitude anchor).
    pub fn resolution_for_zoom_and_center(
        &self,
        zoom: f64,
        center: Point,
        transformer: &dyn GeodeticTransform,
    ) -> CoordResult<f64> {
        match self {
            CoordinateSystem::Lv95 | CoordinateSystem::Lv03 => {
                Ok(swiss::resolution_for_zoom(zoom))
            }
            CoordinateSystem::Wgs84 => Ok(standard::resolution_at_zoom(zoom, center.y)),
            CoordinateSystem::WebMercator => {
                let geodetic =
                    transformer.transform(*self, CoordinateSystem::Wgs84, center)?;
                Ok(standard::resolution_at_zoom(zoom, geodetic.y))
            }
        }
    }

    /// Zoom level matching a resolution, inverse of
    /// `resolution_for_zoom_and_center`
    pub fn zoom_for_resolution_and_center(
        &self,
        resolution: f64,
        center: Point,
        transformer: &dyn GeodeticTransform,
    ) -> CoordResult<f64> {
        match self {
            CoordinateSystem::Lv95 | CoordinateSystem::Lv03 => {
                Ok(swiss::zoom_for_resolution(resolution))
            }
            CoordinateSystem::Wgs84 => Ok(standard::zoom_at_resolution(resolution, center.y)),
            CoordinateSystem::WebMercator => {
                let geodetic =
                    transformer.transform(*self, CoordinateSystem::Wgs84, center)?;
                Ok(standard::zoom_at_resolution(resolution, geodetic.y))
            }
        }
    }

    /// Round a zoom level for display or URL encoding
    ///
    /// Swiss systems can normalize, snapping to the nearest discrete
    /// level of their pyramid; other systems keep 3 decimals.
    pub fn round_zoom_level(&self, zoom: f64, normalize: bool) -> f64 {
        if self.is_swiss() {
            swiss::round_zoom_level(zoom, normalize)
        } else {
            (zoom * 1000.0).round() / 1000.0
        }
    }

    /// Zoom level showing the 1:25,000 reference map scale
    pub fn default_zoom(&self) -> f64 {
        if self.is_swiss() {
            swiss::SWISS_ZOOM_1_25000 as f64
        } else {
            standard::STANDARD_ZOOM_1_25000
        }
    }

    /// Top-left origin of this system's tile grid
    pub fn tile_matrix_origin(&self) -> Point {
        self.definition().tile_origin
    }

    /// Matrix identifiers of this system's tile grid, one per zoom step
    pub fn matrix_identifiers(&self) -> Vec<String> {
        self.resolutions()
            .iter()
            .map(|step| step.zoom.to_string())
            .collect()
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label(), self.epsg_identifier())
    }
}
