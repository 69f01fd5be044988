//! Static recognizer patterns for the coordinate text extractor
//!
//! Recognition is a fixed, ordered table of (pattern, interpretation)
//! pairs walked first-match-wins: geodetic degree notations, then the
//! metric grids, then military grid tokens. Keeping the table as data
//! keeps every recognizer individually testable.
//!
//! Number pairs may be separated by whitespace, commas or slashes, each
//! optionally padded with spaces. Degree/minute/second markers accept
//! the common Unicode prime variants next to their ASCII forms, and the
//! metric patterns accept `'`, `` ` ``, `´` or space as thousands
//! separators.

use lazy_static::lazy_static;
use regex::Regex;

use super::geodetic::{AngleForm, CardinalPlacement};

/// How a matched pattern is interpreted
#[derive(Debug, Clone, Copy)]
pub(crate) enum FormatKind {
    /// Degree notation with the given syntax family and cardinal position
    Geodetic(AngleForm, CardinalPlacement),
    /// Two grouped metric numbers
    Metric,
    /// Military grid token
    MilitaryGrid,
}

/// One recognizer of the ordered format table
pub(crate) struct FormatSpec {
    pub pattern: Regex,
    pub kind: FormatKind,
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).unwrap_or_else(|e| {
        // Patterns are compiled in; failing to parse one is a build defect
        panic!("Built-in extractor pattern is invalid: {}", e)
    })
}

lazy_static! {
    /// Recognizers in priority order
    pub(crate) static ref FORMATS: Vec<FormatSpec> = vec![
        // Decimal degrees: "46.95 7.45", "46.95° / 7.45°"
        FormatSpec {
            pattern: pattern(
                r"^\s*(\d{1,3}(?:\.\d+)?)\s*°?[\s,/]+(\d{1,3}(?:\.\d+)?)\s*°?\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DecimalDegrees, CardinalPlacement::None),
        },
        // Decimal degrees, cardinal suffix: "46.95N 7.45E"
        FormatSpec {
            pattern: pattern(
                r"^\s*(\d{1,3}(?:\.\d+)?)\s*°?\s*([NSEWnsew])[\s,/]+(\d{1,3}(?:\.\d+)?)\s*°?\s*([NSEWnsew])\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DecimalDegrees, CardinalPlacement::Suffix),
        },
        // Decimal degrees, cardinal prefix: "N 46.95 E 7.45"
        FormatSpec {
            pattern: pattern(
                r"^\s*([NSEWnsew])\s*(\d{1,3}(?:\.\d+)?)\s*°?[\s,/]+([NSEWnsew])\s*(\d{1,3}(?:\.\d+)?)\s*°?\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DecimalDegrees, CardinalPlacement::Prefix),
        },
        // Degrees and decimal minutes: "46°57.1' 7°26.9'"
        FormatSpec {
            pattern: pattern(
                r"^\s*(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?[\s,/]+(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutes, CardinalPlacement::None),
        },
        FormatSpec {
            pattern: pattern(
                r"^\s*(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?\s*([NSEWnsew])[\s,/]+(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?\s*([NSEWnsew])\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutes, CardinalPlacement::Suffix),
        },
        FormatSpec {
            pattern: pattern(
                r"^\s*([NSEWnsew])\s*(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?[\s,/]+([NSEWnsew])\s*(\d{1,3})\s*°?\s*(\d{1,2}(?:\.\d+)?)\s*['′ʹ’]?\s*$"
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutes, CardinalPlacement::Prefix),
        },
        // Degrees, minutes and decimal seconds: "46°57'8.66\" 7°26'22.5\""
        FormatSpec {
            pattern: pattern(
                r#"^\s*(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?[\s,/]+(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?\s*$"#
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutesSeconds, CardinalPlacement::None),
        },
        FormatSpec {
            pattern: pattern(
                r#"^\s*(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?\s*([NSEWnsew])[\s,/]+(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?\s*([NSEWnsew])\s*$"#
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutesSeconds, CardinalPlacement::Suffix),
        },
        FormatSpec {
            pattern: pattern(
                r#"^\s*([NSEWnsew])\s*(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?[\s,/]+([NSEWnsew])\s*(\d{1,3})\s*°?\s*(\d{1,2})\s*['′ʹ’]?\s*(\d{1,2}(?:\.\d+)?)\s*(?:["″”]|'')?\s*$"#
            ),
            kind: FormatKind::Geodetic(AngleForm::DegreesMinutesSeconds, CardinalPlacement::Prefix),
        },
        // Metric grids: "2600000, 1200000", "2'600'000 1'200'000"
        FormatSpec {
            pattern: pattern(
                r"^\s*(\d{1,3}(?:['`´ ]?\d{3})*(?:\.\d+)?)[\s,/]+(\d{1,3}(?:['`´ ]?\d{3})*(?:\.\d+)?)\s*$"
            ),
            kind: FormatKind::Metric,
        },
        // Military grid: "32TLT 98757 23913"
        FormatSpec {
            pattern: pattern(r"^\s*(\d{1,2})\s*([A-Za-z]{3})\s*((?:\d+\s*)+)$"),
            kind: FormatKind::MilitaryGrid,
        },
    ];
}
