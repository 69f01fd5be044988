//! Geodetic degree format interpretation

use log::debug;
use regex::Captures;

use crate::coordinate::{CoordinateSystem, Point};

use super::{ExtractedCoordinate, Extraction};

/// Degree syntax family of a recognized pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum AngleForm {
    DecimalDegrees,
    DegreesMinutes,
    DegreesMinutesSeconds,
}

impl AngleForm {
    /// Capture groups making up one angle value
    fn value_groups(&self) -> usize {
        match self {
            AngleForm::DecimalDegrees => 1,
            AngleForm::DegreesMinutes => 2,
            AngleForm::DegreesMinutesSeconds => 3,
        }
    }
}

/// Position of cardinal letters within a recognized pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum CardinalPlacement {
    None,
    Suffix,
    Prefix,
}

struct AngleToken {
    value: f64,
    cardinal: Option<char>,
}

/// Interpret a matched degree notation as a geodetic coordinate
pub(crate) fn from_captures(
    captures: &Captures<'_>,
    form: AngleForm,
    placement: CardinalPlacement,
) -> Option<Extraction> {
    let groups = form.value_groups();
    let (first, second) = match placement {
        CardinalPlacement::None => (
            parse_token(captures, 1, groups, None)?,
            parse_token(captures, 1 + groups, groups, None)?,
        ),
        CardinalPlacement::Suffix => (
            parse_token(captures, 1, groups, Some(1 + groups))?,
            parse_token(captures, 2 + groups, groups, Some(2 + 2 * groups))?,
        ),
        CardinalPlacement::Prefix => (
            parse_token(captures, 2, groups, Some(1))?,
            parse_token(captures, 3 + groups, groups, Some(2 + groups))?,
        ),
    };

    let (lon, lat) = match (first.cardinal, second.cardinal) {
        (Some(_), Some(_)) => {
            let (lon, lat) = assign_axes(&first, &second)?;
            if !CoordinateSystem::Wgs84.is_in_bounds(lon, lat) {
                debug!(
                    "Cardinal coordinate ({}, {}) is outside the supported region",
                    lon, lat
                );
                return None;
            }
            (lon, lat)
        }
        _ => disambiguate(first.value, second.value)?,
    };

    let system = CoordinateSystem::Wgs84;
    Some(Extraction::Resolved(ExtractedCoordinate {
        coordinate_system: system,
        coordinate: Point::new(
            system.round_coordinate_value(lon),
            system.round_coordinate_value(lat),
        ),
    }))
}

/// Assemble one decimal angle out of its degree/minute/second groups
fn parse_token(
    captures: &Captures<'_>,
    start: usize,
    groups: usize,
    letter_index: Option<usize>,
) -> Option<AngleToken> {
    let mut value = captures.get(start)?.as_str().parse::<f64>().ok()?;
    if groups >= 2 {
        value += captures.get(start + 1)?.as_str().parse::<f64>().ok()? / 60.0;
    }
    if groups >= 3 {
        value += captures.get(start + 2)?.as_str().parse::<f64>().ok()? / 3600.0;
    }
    let cardinal = match letter_index {
        Some(index) => Some(
            captures
                .get(index)?
                .as_str()
                .chars()
                .next()?
                .to_ascii_uppercase(),
        ),
        None => None,
    };
    Some(AngleToken { value, cardinal })
}

/// Cardinal letters fix both sign and axis; the two letters must name
/// different axes
fn assign_axes(first: &AngleToken, second: &AngleToken) -> Option<(f64, f64)> {
    let (first_is_lat, first_sign) = axis_of(first)?;
    let (second_is_lat, second_sign) = axis_of(second)?;
    match (first_is_lat, second_is_lat) {
        (true, false) => Some((second_sign * second.value, first_sign * first.value)),
        (false, true) => Some((first_sign * first.value, second_sign * second.value)),
        _ => None,
    }
}

fn axis_of(token: &AngleToken) -> Option<(bool, f64)> {
    match token.cardinal? {
        'N' => Some((true, 1.0)),
        'S' => Some((true, -1.0)),
        'E' => Some((false, 1.0)),
        'W' => Some((false, -1.0)),
        _ => None,
    }
}

/// Without cardinal letters the axis order is ambiguous: whichever
/// reading falls inside the supported region wins, the latitude-first
/// reading tested first. Near the region edges both readings can fit and
/// the first one silently wins.
fn disambiguate(first: f64, second: f64) -> Option<(f64, f64)> {
    let wgs84 = CoordinateSystem::Wgs84;
    if wgs84.is_in_bounds(second, first) {
        return Some((second, first));
    }
    if wgs84.is_in_bounds(first, second) {
        return Some((first, second));
    }
    debug!(
        "Neither axis order of ({}, {}) falls inside the supported region",
        first, second
    );
    None
}
