#[cfg(test)]
mod geodetic_tests;
#[cfg(test)]
mod metric_tests;
