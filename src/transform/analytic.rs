//! Built-in closed-form transformer
//!
//! Covers every pair of the supported systems: the WGS84/WebMercator pair
//! is exact spherical math, the national grids use the published swisstopo
//! approximation polynomials (accurate to about a meter inside the
//! national bounds). Pairs without a direct formula are routed through
//! WGS84.

use std::f64::consts::PI;

use log::debug;

use crate::coordinate::{CoordError, CoordResult, CoordinateSystem, Point};

use super::GeodeticTransform;

/// Earth radius in meters used by the spherical Mercator formulas
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Web Mercator is undefined at the poles; latitudes clamp to this value
const MAX_MERCATOR_LATITUDE: f64 = 85.06;

/// Easting/northing offset separating the LV95 and LV03 false origins
const LV95_FALSE_ORIGIN_SHIFT: (f64, f64) = (2_000_000.0, 1_000_000.0);

/// Closed-form implementation of the geodetic transform collaborator
pub struct AnalyticTransformer;

impl AnalyticTransformer {
    fn wgs84_to_web_mercator(lon: f64, lat: f64) -> Point {
        let lat = lat.max(-MAX_MERCATOR_LATITUDE).min(MAX_MERCATOR_LATITUDE);
        let x = lon * PI * EARTH_RADIUS / 180.0;
        let lat_rad = lat * PI / 180.0;
        let y = EARTH_RADIUS * f64::ln(f64::tan(PI / 4.0 + lat_rad / 2.0));
        Point::new(x, y)
    }

    fn web_mercator_to_wgs84(x: f64, y: f64) -> Point {
        let lon = x * 180.0 / (EARTH_RADIUS * PI);
        let lat = (2.0 * f64::atan(f64::exp(y / EARTH_RADIUS)) - PI / 2.0) * 180.0 / PI;
        Point::new(lon, lat)
    }

    /// swisstopo approximation, WGS84 to LV95: angles become scaled
    /// offsets from the projection origin, the grid position a cubic
    /// polynomial in them
    fn wgs84_to_lv95(lon: f64, lat: f64) -> Point {
        let phi = (lat * 3600.0 - 169_028.66) / 10_000.0;
        let lambda = (lon * 3600.0 - 26_782.5) / 10_000.0;
        let east = 2_600_072.37 + 211_455.93 * lambda
            - 10_938.51 * lambda * phi
            - 0.36 * lambda * phi * phi
            - 44.54 * lambda.powi(3);
        let north = 1_200_147.07 + 308_807.95 * phi + 3_745.25 * lambda * lambda
            + 76.63 * phi * phi
            - 194.56 * lambda * lambda * phi
            + 119.79 * phi.powi(3);
        Point::new(east, north)
    }

    /// swisstopo approximation, LV95 to WGS84
    fn lv95_to_wgs84(east: f64, north: f64) -> Point {
        let y = (east - 2_600_000.0) / 1_000_000.0;
        let x = (north - 1_200_000.0) / 1_000_000.0;
        let lambda = 2.677_909_4 + 4.728_982 * y + 0.791_484 * y * x + 0.1306 * y * x * x
            - 0.0436 * y.powi(3);
        let phi = 16.902_389_2 + 3.238_272 * x
            - 0.270_978 * y * y
            - 0.002_528 * x * x
            - 0.044_7 * y * y * x
            - 0.014_0 * x.powi(3);
        // The polynomial yields 100ths of degrees
        Point::new(lambda * 100.0 / 36.0, phi * 100.0 / 36.0)
    }

    fn to_geodetic(from: CoordinateSystem, point: Point) -> Point {
        let (shift_east, shift_north) = LV95_FALSE_ORIGIN_SHIFT;
        match from {
            CoordinateSystem::Wgs84 => point,
            CoordinateSystem::WebMercator => Self::web_mercator_to_wgs84(point.x, point.y),
            CoordinateSystem::Lv95 => Self::lv95_to_wgs84(point.x, point.y),
            CoordinateSystem::Lv03 => {
                Self::lv95_to_wgs84(point.x + shift_east, point.y + shift_north)
            }
        }
    }

    fn from_geodetic(to: CoordinateSystem, point: Point) -> Point {
        let (shift_east, shift_north) = LV95_FALSE_ORIGIN_SHIFT;
        match to {
            CoordinateSystem::Wgs84 => point,
            CoordinateSystem::WebMercator => Self::wgs84_to_web_mercator(point.x, point.y),
            CoordinateSystem::Lv95 => Self::wgs84_to_lv95(point.x, point.y),
            CoordinateSystem::Lv03 => {
                let lv95 = Self::wgs84_to_lv95(point.x, point.y);
                Point::new(lv95.x - shift_east, lv95.y - shift_north)
            }
        }
    }
}

impl GeodeticTransform for AnalyticTransformer {
    fn transform(
        &self,
        from: CoordinateSystem,
        to: CoordinateSystem,
        point: Point,
    ) -> CoordResult<Point> {
        if !point.is_finite() {
            return Err(CoordError::NonFiniteCoordinate(point.x, point.y));
        }
        if from == to {
            return Ok(point);
        }

        let geodetic = Self::to_geodetic(from, point);
        let mut transformed = Self::from_geodetic(to, geodetic);
        // Elevation is untouched by a planar transform
        transformed.z = point.z;

        debug!(
            "Transformed {} ({}, {}) to {} ({}, {})",
            from, point.x, point.y, to, transformed.x, transformed.y
        );
        Ok(transformed)
    }
}
