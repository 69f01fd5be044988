//! Free-text coordinate extraction
//!
//! End users type coordinates in dozens of notations: decimal degrees
//! with or without cardinal letters, sexagesimal angles, the national
//! metric grids with assorted thousands separators, military grid
//! tokens. The extractor tries an ordered set of format recognizers and
//! returns a normalized coordinate tagged with the system it belongs to,
//! or nothing — malformed and out-of-region input is never an error.

mod geodetic;
mod metric;
mod mgrs;
mod patterns;
mod tests;

use log::{debug, warn};

use crate::coordinate::{CoordinateSystem, Point};
use crate::transform::{DatumReframer, GeodeticTransform, MgrsDecoder};

use self::patterns::{FormatKind, FORMATS};

/// A coordinate recognized in free text, tagged with its system
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedCoordinate {
    /// The system the coordinate is expressed in
    pub coordinate_system: CoordinateSystem,
    /// The normalized coordinate, rounded with the system's precision
    pub coordinate: Point,
}

/// Synchronous scan outcome
///
/// Most formats resolve without leaving the process; a legacy-frame hit
/// still needs the asynchronous datum correction and stays pending, so
/// callers can tell the fast path from the slow one.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    /// Fully resolved, no asynchronous work left
    Resolved(ExtractedCoordinate),
    /// A legacy LV03 coordinate awaiting reframing into LV95
    LegacyDatum(Point),
}

/// Multi-format free-text coordinate extractor
pub struct CoordinateExtractor<'a> {
    transformer: &'a dyn GeodeticTransform,
    reframer: &'a dyn DatumReframer,
    mgrs_decoder: &'a dyn MgrsDecoder,
}

impl<'a> CoordinateExtractor<'a> {
    /// Create an extractor over the given collaborators
    pub fn new(
        transformer: &'a dyn GeodeticTransform,
        reframer: &'a dyn DatumReframer,
        mgrs_decoder: &'a dyn MgrsDecoder,
    ) -> Self {
        CoordinateExtractor {
            transformer,
            reframer,
            mgrs_decoder,
        }
    }

    /// Scan text against the recognizer table, without suspending
    ///
    /// Walks the format table in priority order and returns the first
    /// interpretation that yields an in-bounds coordinate. A legacy-frame
    /// hit comes back pending; use [`CoordinateExtractor::extract`] to
    /// resolve it.
    pub fn scan(&self, text: &str) -> Option<Extraction> {
        for format in FORMATS.iter() {
            if let Some(captures) = format.pattern.captures(text) {
                let result = match format.kind {
                    FormatKind::Geodetic(form, placement) => {
                        geodetic::from_captures(&captures, form, placement)
                    }
                    FormatKind::Metric => {
                        metric::from_grouped_numbers(&captures, self.transformer)
                    }
                    FormatKind::MilitaryGrid => {
                        mgrs::from_grid_token(&captures, self.mgrs_decoder)
                    }
                };
                if let Some(extraction) = result {
                    debug!("Recognized {:?} as {:?}", text, extraction);
                    return Some(extraction);
                }
            }
        }
        debug!("No recognizer matched {:?}", text);
        None
    }

    /// Extract a coordinate from free text
    ///
    /// Awaits the datum-correction collaborator when the text resolves to
    /// the legacy Swiss frame; every other format completes without
    /// suspending. Malformed input, out-of-region values and collaborator
    /// failures all yield `None`. Cancelling simply drops the pending
    /// result.
    pub async fn extract(&self, text: &str) -> Option<ExtractedCoordinate> {
        match self.scan(text)? {
            Extraction::Resolved(found) => Some(found),
            Extraction::LegacyDatum(point) => self.reframe_legacy(point).await,
        }
    }

    async fn reframe_legacy(&self, point: Point) -> Option<ExtractedCoordinate> {
        match self.reframer.reframe(CoordinateSystem::Lv03, point).await {
            Ok(reframed) => {
                let system = CoordinateSystem::Lv95;
                Some(ExtractedCoordinate {
                    coordinate_system: system,
                    coordinate: Point::new(
                        system.round_coordinate_value(reframed.x),
                        system.round_coordinate_value(reframed.y),
                    ),
                })
            }
            Err(e) => {
                warn!("Legacy datum reframing failed: {}", e);
                None
            }
        }
    }
}
