//! Integration tests for the extraction pass.

mod tests_reclassify;
