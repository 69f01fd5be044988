//! Zoom and resolution math for the supported pyramids
//!
//! The standard submodule covers the closed-form web-tile convention;
//! the swiss submodule covers the discrete national pyramid and its
//! mapping onto the standard one.

pub mod standard;
pub mod swiss;
mod tests;

pub use standard::{PIXEL_RESOLUTION_AT_EQUATOR, STANDARD_ZOOM_1_25000};
pub use swiss::{PROJECTION_ORIGIN_LATITUDE, SWISS_ZOOM_1_25000};
