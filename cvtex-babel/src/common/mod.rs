//! Format-agnostic helpers shared by the LaTeX and YAML formats.

pub mod inline;
pub mod labels;
