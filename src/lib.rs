pub mod coordinate;
pub mod extractor;
pub mod projection;
pub mod transform;
pub mod utils;

// Re-export key types
pub use crate::coordinate::{
    Bounds, CoordError, CoordResult, CoordinateChunk, CoordinateSystem, Point, ResolutionStep,
};
pub use crate::extractor::{CoordinateExtractor, ExtractedCoordinate, Extraction};
pub use crate::transform::{
    AnalyticTransformer, DatumReframer, FixedShiftReframer, GeodeticTransform, MgrsDecoder,
};
