//! Round-trip tests
//!
//! LaTeX → YAML → LaTeX must keep every entry's kind and fields, and the
//! inline markup converter must invert itself on lightweight markup and be
//! idempotent on LaTeX markup.

mod inline;
mod layout;
