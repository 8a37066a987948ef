//! In-memory representation of a CV.
//!
//! Both formats convert to and from [`nodes::Document`]; nothing in this
//! module knows about either syntax.

pub mod nodes;
