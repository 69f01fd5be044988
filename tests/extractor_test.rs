//! Integration tests for the free-text coordinate extractor

extern crate std;

use coordkit::{
    AnalyticTransformer, CoordError, CoordResult, CoordinateExtractor, CoordinateSystem,
    FixedShiftReframer, MgrsDecoder, Point,
};

/// Decoder fixture standing in for the external military-grid capability
struct GridDecoder;

impl MgrsDecoder for GridDecoder {
    fn mgrs_to_geodetic(&self, token: &str) -> CoordResult<Point> {
        match token {
            "32TLT9875723913" => Ok(Point::new(7.438637, 46.951083)),
            other => Err(CoordError::MgrsDecodeFailed(format!(
                "unknown token {}",
                other
            ))),
        }
    }
}

static TRANSFORMER: AnalyticTransformer = AnalyticTransformer;
static REFRAMER: FixedShiftReframer = FixedShiftReframer;
static DECODER: GridDecoder = GridDecoder;

fn extractor() -> CoordinateExtractor<'static> {
    let _ = env_logger::builder().is_test(true).try_init();
    CoordinateExtractor::new(&TRANSFORMER, &REFRAMER, &DECODER)
}

#[tokio::test(flavor = "current_thread")]
async fn test_metric_formats_extract_as_lv95() {
    let extractor = extractor();
    for text in [
        "2600000,1200000",
        "2'600'000 1'200'000",
        "1200000,2600000",
    ] {
        let found = extractor.extract(text).await.unwrap();
        std::assert_eq!(found.coordinate_system, CoordinateSystem::Lv95);
        std::assert_eq!(found.coordinate, Point::new(2600000.0, 1200000.0));
    }
}

#[tokio::test(flavor = "current_thread")]
async fn test_legacy_coordinates_are_reframed() {
    let found = extractor().extract("600'000 200'000").await.unwrap();
    std::assert_eq!(found.coordinate_system, CoordinateSystem::Lv95);
    std::assert_eq!(found.coordinate, Point::new(2600000.0, 1200000.0));
}

#[tokio::test(flavor = "current_thread")]
async fn test_cardinal_letters_disambiguate_axes() {
    let extractor = extractor();
    let first = extractor.extract("46.9N 7.4E").await.unwrap();
    let second = extractor.extract("7.4E 46.9N").await.unwrap();
    std::assert_eq!(first, second);
    std::assert_eq!(first.coordinate_system, CoordinateSystem::Wgs84);
    std::assert_eq!(first.coordinate, Point::new(7.4, 46.9));
}

#[tokio::test(flavor = "current_thread")]
async fn test_military_grid_tokens_decode() {
    let found = extractor().extract("32TLT 98757 23913").await.unwrap();
    std::assert_eq!(found.coordinate_system, CoordinateSystem::Wgs84);
    std::assert_eq!(found.coordinate, Point::new(7.438637, 46.951083));

    // The precision gate rejects an odd digit count outright
    std::assert!(extractor().extract("32TLT 987572391").await.is_none());
}

#[tokio::test(flavor = "current_thread")]
async fn test_unmatchable_input_extracts_nothing() {
    let extractor = extractor();
    std::assert!(extractor.extract("600000, 20000").await.is_none());
    std::assert!(extractor.extract("somewhere in Bern").await.is_none());
    std::assert!(extractor.extract("").await.is_none());
}
