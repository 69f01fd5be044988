//! Custom error types for coordinate operations

use std::fmt;

/// Coordinate-engine error types
#[derive(Debug)]
pub enum CoordError {
    /// A transform collaborator rejected or failed a reprojection
    TransformFailed(String),
    /// A datum reframing call failed
    ReframeFailed(String),
    /// A military grid token could not be decoded
    MgrsDecodeFailed(String),
    /// A coordinate component is NaN or infinite
    NonFiniteCoordinate(f64, f64),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::TransformFailed(msg) => write!(f, "Transformation failed: {}", msg),
            CoordError::ReframeFailed(msg) => write!(f, "Datum reframing failed: {}", msg),
            CoordError::MgrsDecodeFailed(msg) => write!(f, "MGRS decoding failed: {}", msg),
            CoordError::NonFiniteCoordinate(x, y) => {
                write!(f, "Coordinate is not finite: ({}, {})", x, y)
            }
            CoordError::GenericError(msg) => write!(f, "Coordinate error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {}

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
