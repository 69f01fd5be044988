//! The Swiss national zoom pyramid
//!
//! Both national grids share a discrete 15-step pyramid anchored to the
//! printed national map scales. Conversion to and from the standard
//! web-tile pyramid goes through a fixed anchor table evaluated at the
//! projection origin; the relation is non-linear, so fractional zoom
//! levels are interpolated geometrically between neighbouring steps.

use crate::coordinate::registry::REGISTRY;

use super::standard;

/// Latitude of the LV95 projection origin (Bern), in degrees
pub const PROJECTION_ORIGIN_LATITUDE: f64 = 46.95240555555556;

/// Swiss zoom level of the 1:25,000 national map (the 2.5 m/px step)
pub const SWISS_ZOOM_1_25000: u32 = 8;

fn resolutions() -> &'static [f64] {
    &REGISTRY.swiss_pyramid.resolutions
}

fn standard_zooms() -> &'static [f64] {
    &REGISTRY.swiss_pyramid.standard_zooms
}

/// Highest zoom level of the Swiss pyramid
pub fn max_zoom() -> u32 {
    (resolutions().len() - 1) as u32
}

/// Map a standard (web-tile) zoom level onto the Swiss pyramid
///
/// Values outside the anchor table clamp to the pyramid ends; inside it,
/// the result is the index of the first anchor at or above the requested
/// zoom, i.e. the count of anchors strictly below it.
pub fn standard_to_custom_zoom(standard_zoom: f64) -> f64 {
    let anchors = standard_zooms();
    let first = anchors[0];
    let last = anchors[anchors.len() - 1];
    if standard_zoom < first {
        return 0.0;
    }
    if standard_zoom > last {
        return max_zoom() as f64;
    }
    let below = anchors
        .iter()
        .filter(|anchor| **anchor < standard_zoom)
        .count();
    if below < anchors.len() {
        below as f64
    } else {
        SWISS_ZOOM_1_25000 as f64
    }
}

/// Map a Swiss zoom level onto the standard (web-tile) pyramid
///
/// The fractional part is dropped to land on a discrete pyramid step,
/// then the Mercator resolution formula is inverted at the projection
/// origin latitude.
pub fn custom_to_standard_zoom(custom_zoom: f64) -> f64 {
    let resolution = step_resolution(custom_zoom);
    standard::zoom_at_resolution(resolution, PROJECTION_ORIGIN_LATITUDE)
}

fn step_resolution(zoom: f64) -> f64 {
    let steps = resolutions();
    let index = (zoom.max(0.0).floor() as usize).min(steps.len() - 1);
    steps[index]
}

/// Resolution at a (possibly fractional) Swiss zoom level
///
/// Integer zooms look up the pyramid directly. A fractional part
/// interpolates geometrically towards the next step, matching the fixed
/// factor separating neighbouring levels.
pub fn resolution_for_zoom(zoom: f64) -> f64 {
    let steps = resolutions();
    let clamped = zoom.max(0.0);
    let index = (clamped.floor() as usize).min(steps.len() - 1);
    let base = steps[index];
    if index + 1 >= steps.len() {
        return base;
    }
    let next = steps[index + 1];
    let fraction = clamped - clamped.floor();
    base / (base / next).powf(fraction)
}

/// Swiss zoom level whose step covers the requested resolution
///
/// Walks the pyramid in descending-resolution order and returns the first
/// step at or below the requested resolution. Coarser than the whole
/// pyramid clamps to zoom 0, finer clamps to the finest step.
pub fn zoom_for_resolution(resolution: f64) -> f64 {
    for (index, step) in resolutions().iter().enumerate() {
        if *step <= resolution {
            return index as f64;
        }
    }
    max_zoom() as f64
}

/// Round a Swiss zoom level
///
/// Without `normalize` the value keeps 3 decimals; with it, the level
/// snaps to the nearest discrete step of the pyramid.
pub fn round_zoom_level(zoom: f64, normalize: bool) -> f64 {
    if normalize {
        let mut best = 0u32;
        let mut best_distance = f64::MAX;
        for candidate in 0..=max_zoom() {
            let distance = (zoom - candidate as f64).abs();
            if distance < best_distance {
                best_distance = distance;
                best = candidate;
            }
        }
        best as f64
    } else {
        (zoom * 1000.0).round() / 1000.0
    }
}
