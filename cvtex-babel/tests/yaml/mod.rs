//! YAML format tests
//!
//! Tests for reading and writing the YAML mapping layout.

mod import;
