//! Format implementations
//!
//! This module contains the two CV representations and their conversion to
//! and from the [`Document`](crate::ir::nodes::Document) model.

pub mod latex;
pub mod yaml;

pub use latex::LatexFormat;
pub use yaml::YamlFormat;
