//! LaTeX format tests
//!
//! Tests for reading LaTeX CVs into the document model and writing them back.

mod export;
mod import;
