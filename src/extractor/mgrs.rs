//! Military grid token interpretation

use log::{debug, warn};
use regex::Captures;

use crate::coordinate::{CoordinateSystem, Point};
use crate::transform::MgrsDecoder;

use super::{ExtractedCoordinate, Extraction};

/// Worst-case zone + band + 100-km square prefix length of a grid token
pub(crate) const MGRS_MINIMAL_PRECISION: usize = 5;

/// Interpret a matched grid token, decoding it through the collaborator
///
/// The token must carry a valid zone, band/square letters and digit
/// groups whose count passes the precision gate; everything else is
/// rejected before the decoder is consulted.
pub(crate) fn from_grid_token(
    captures: &Captures<'_>,
    decoder: &dyn MgrsDecoder,
) -> Option<Extraction> {
    let zone_text = captures.get(1)?.as_str();
    let zone: u32 = zone_text.parse().ok()?;
    if zone == 0 || zone > 60 {
        return None;
    }

    let letters = captures.get(2)?.as_str().to_uppercase();
    // The grid alphabet skips I and O
    if letters.chars().any(|c| c == 'I' || c == 'O') {
        return None;
    }

    let digits = captures.get(3)?.as_str();
    let groups: Vec<&str> = digits.split_whitespace().collect();
    if groups.len() > 2 {
        return None;
    }
    if groups.len() == 2 && groups[0].len() != groups[1].len() {
        return None;
    }

    let token = format!("{}{}{}", zone_text, letters, groups.concat());
    let precision = token.len().checked_sub(MGRS_MINIMAL_PRECISION)?;
    if precision % 2 != 0 {
        debug!("Grid token {} fails the precision gate", token);
        return None;
    }

    match decoder.mgrs_to_geodetic(&token) {
        Ok(point) => {
            let system = CoordinateSystem::Wgs84;
            Some(Extraction::Resolved(ExtractedCoordinate {
                coordinate_system: system,
                coordinate: Point::new(
                    system.round_coordinate_value(point.x),
                    system.round_coordinate_value(point.y),
                ),
            }))
        }
        Err(e) => {
            warn!("Failed to decode grid token {}: {}", token, e);
            None
        }
    }
}
