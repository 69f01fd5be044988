//! Tests for geodetic degree extraction

extern crate std;

use crate::coordinate::{CoordinateSystem, Point};
use crate::extractor::{ExtractedCoordinate, Extraction};

use super::fixtures::extractor;

fn expect_wgs84(text: &str, lon: f64, lat: f64) {
    let extraction = extractor()
        .scan(text)
        .unwrap_or_else(|| panic!("{:?} was not recognized", text));
    std::assert_eq!(
        extraction,
        Extraction::Resolved(ExtractedCoordinate {
            coordinate_system: CoordinateSystem::Wgs84,
            coordinate: Point::new(lon, lat),
        }),
        "unexpected interpretation of {:?}",
        text
    );
}

#[test]
fn test_decimal_degrees_without_cardinals() {
    expect_wgs84("46.9 7.4", 7.4, 46.9);
    expect_wgs84("46.9, 7.4", 7.4, 46.9);
    expect_wgs84("46.9 / 7.4", 7.4, 46.9);
    expect_wgs84("46.9°\t7.4°", 7.4, 46.9);
}

#[test]
fn test_axis_order_is_resolved_by_bounds() {
    // Latitude-first is the preferred reading; when it falls outside the
    // region the swapped reading silently wins
    expect_wgs84("7.4 46.9", 7.4, 46.9);
    expect_wgs84("46.9 7.4", 7.4, 46.9);
}

#[test]
fn test_cardinal_letters_fix_the_axes() {
    expect_wgs84("46.9N 7.4E", 7.4, 46.9);
    expect_wgs84("7.4E 46.9N", 7.4, 46.9);
    expect_wgs84("N 46.9 E 7.4", 7.4, 46.9);
    expect_wgs84("E 7.4 N 46.9", 7.4, 46.9);
}

#[test]
fn test_degrees_minutes() {
    expect_wgs84("46°57.1' 7°26.9'", 7.448333, 46.951667);
    expect_wgs84("46 57.1 7 26.9", 7.448333, 46.951667);
    // Unicode prime markers
    expect_wgs84("46°57.1′ 7°26.9′", 7.448333, 46.951667);
}

#[test]
fn test_degrees_minutes_seconds() {
    // The national projection origin, written sexagesimally
    expect_wgs84("46°57'8.66\" 7°26'22.5\"", 7.439583, 46.952406);
    expect_wgs84("46°57'8.66\" N 7°26'22.5\" E", 7.439583, 46.952406);
    expect_wgs84("46°57′8.66″ 7°26′22.5″", 7.439583, 46.952406);
    expect_wgs84("46 57 8.66 7 26 22.5", 7.439583, 46.952406);
}

#[test]
fn test_southern_western_signs() {
    // Signed values land outside the supported region and are rejected,
    // but the letters must still flip the sign before the bounds test
    std::assert!(extractor().scan("46.9S 7.4W").is_none());
}

#[test]
fn test_same_axis_letters_are_rejected() {
    std::assert!(extractor().scan("46.9N 7.4N").is_none());
    std::assert!(extractor().scan("46.9E 7.4E").is_none());
}

#[test]
fn test_out_of_region_degrees_are_rejected() {
    std::assert!(extractor().scan("48.86 2.35").is_none());
    std::assert!(extractor().scan("12.5 170.0").is_none());
}

#[test]
fn test_unsupported_text_is_rejected() {
    std::assert!(extractor().scan("").is_none());
    std::assert!(extractor().scan("hello world").is_none());
    std::assert!(extractor().scan("46.9").is_none());
    std::assert!(extractor().scan("46.9 7.4 12.0 13.5 99").is_none());
}
