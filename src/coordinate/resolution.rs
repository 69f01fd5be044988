//! Zoom pyramid resolution steps

/// One (zoom level, resolution) pair of a coordinate system's pyramid
///
/// Resolution strictly decreases as zoom increases within a system;
/// the full ordered sequence is generated once per system and shared
/// read-only for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolutionStep {
    /// Discrete zoom level within the owning system's pyramid
    pub zoom: u32,
    /// Ground distance covered by one pixel, in native linear units
    pub resolution: f64,
}

impl ResolutionStep {
    /// Create a new resolution step
    pub fn new(zoom: u32, resolution: f64) -> Self {
        ResolutionStep { zoom, resolution }
    }
}
