//! Command-level tests

mod test_export;
mod test_scan;
mod test_upload;
