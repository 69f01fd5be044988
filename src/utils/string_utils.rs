//! String utility functions
//!
//! Utilities for normalizing coordinate text before numeric parsing.

/// Characters accepted as thousands separators in metric coordinate text
const THOUSANDS_SEPARATORS: [char; 4] = ['\'', '`', '´', ' '];

/// Strips thousands separators from a grouped number string
pub(crate) fn strip_thousands_separators(text: &str) -> String {
    text.chars()
        .filter(|c| !THOUSANDS_SEPARATORS.contains(c))
        .collect()
}
