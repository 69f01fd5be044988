//! Tests for metric grid extraction, including the legacy-frame path

extern crate std;

use futures::executor::block_on;

use crate::coordinate::{CoordinateSystem, Point};
use crate::extractor::{CoordinateExtractor, ExtractedCoordinate, Extraction};

use super::fixtures::{extractor, FailingReframer, DECODER, TRANSFORMER};

fn expect_resolved(text: &str, system: CoordinateSystem, x: f64, y: f64) {
    let extraction = extractor()
        .scan(text)
        .unwrap_or_else(|| panic!("{:?} was not recognized", text));
    std::assert_eq!(
        extraction,
        Extraction::Resolved(ExtractedCoordinate {
            coordinate_system: system,
            coordinate: Point::new(x, y),
        }),
        "unexpected interpretation of {:?}",
        text
    );
}

#[test]
fn test_lv95_extraction_round_trip() {
    expect_resolved("2600000,1200000", CoordinateSystem::Lv95, 2600000.0, 1200000.0);
    expect_resolved(
        "2'600'000 1'200'000",
        CoordinateSystem::Lv95,
        2600000.0,
        1200000.0,
    );
    // Inverted axis order is recovered through the bounds test
    expect_resolved("1200000,2600000", CoordinateSystem::Lv95, 2600000.0, 1200000.0);
}

#[test]
fn test_thousands_separator_variants() {
    expect_resolved(
        "2`600`000 1`200`000",
        CoordinateSystem::Lv95,
        2600000.0,
        1200000.0,
    );
    expect_resolved(
        "2´600´000 / 1´200´000",
        CoordinateSystem::Lv95,
        2600000.0,
        1200000.0,
    );
    expect_resolved(
        "2 600 000 1 200 000",
        CoordinateSystem::Lv95,
        2600000.0,
        1200000.0,
    );
}

#[test]
fn test_fractional_meters_survive() {
    expect_resolved(
        "2600000.25 1200000.75",
        CoordinateSystem::Lv95,
        2600000.25,
        1200000.75,
    );
}

#[test]
fn test_legacy_frame_stays_pending_in_scan() {
    let extraction = extractor().scan("600000 200000").unwrap();
    std::assert_eq!(
        extraction,
        Extraction::LegacyDatum(Point::new(600000.0, 200000.0))
    );
}

#[test]
fn test_legacy_frame_extracts_as_lv95() {
    let found = block_on(extractor().extract("600000 200000")).unwrap();
    std::assert_eq!(found.coordinate_system, CoordinateSystem::Lv95);
    std::assert_eq!(found.coordinate, Point::new(2600000.0, 1200000.0));
}

#[test]
fn test_failed_reframing_surfaces_as_no_extraction() {
    let reframer = FailingReframer;
    let extractor = CoordinateExtractor::new(&TRANSFORMER, &reframer, &DECODER);
    std::assert!(block_on(extractor.extract("600000 200000")).is_none());
}

#[test]
fn test_web_mercator_extraction() {
    // Inside the regional gate once carried over into meters
    expect_resolved(
        "828064 5934093",
        CoordinateSystem::WebMercator,
        828064.0,
        5934093.0,
    );
    // Swapped order recovers through the gate as well
    expect_resolved(
        "5934093 828064",
        CoordinateSystem::WebMercator,
        828064.0,
        5934093.0,
    );
}

#[test]
fn test_out_of_region_metric_pairs_are_rejected() {
    std::assert!(extractor().scan("600000, 20000").is_none());
    std::assert!(extractor().scan("100 200").is_none());
    std::assert!(extractor().scan("99999999 99999999").is_none());
}
