//! Closed-form zoom math for globally-defined systems
//!
//! Standard systems follow the web-tile convention: the ground resolution
//! of a pixel halves at every zoom step and shrinks with the cosine of
//! the latitude.

/// Ground resolution of one pixel of a 256-px tile at the equator, in
/// m/px (equatorial circumference / 256)
pub const PIXEL_RESOLUTION_AT_EQUATOR: f64 = 156543.03392804097;

/// Standard zoom equivalent of the 1:25,000 national map scale
pub const STANDARD_ZOOM_1_25000: f64 = 15.5;

/// Resolution at `zoom` for a view centered at `latitude` degrees
pub fn resolution_at_zoom(zoom: f64, latitude: f64) -> f64 {
    PIXEL_RESOLUTION_AT_EQUATOR * latitude.to_radians().cos() / 2f64.powf(zoom)
}

/// Zoom whose resolution matches `resolution` at `latitude` degrees,
/// inverse of `resolution_at_zoom`
pub fn zoom_at_resolution(resolution: f64, latitude: f64) -> f64 {
    (resolution / PIXEL_RESOLUTION_AT_EQUATOR / latitude.to_radians().cos())
        .log2()
        .abs()
}
