//! Transform-style conversions between the two CV formats
//!
//! Functional wrappers over [`LatexFormat`] and [`YamlFormat`] for callers
//! that only need one direction and do not want to manage a registry.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::{LatexFormat, YamlFormat};
use crate::rules::ConversionRules;

/// Convert LaTeX CV source to YAML with the default rules
///
/// # Example
///
/// ```ignore
/// use cvtex_babel::transforms::tex_to_yaml;
///
/// let yaml = tex_to_yaml("\\section{About}\nHello\n").unwrap();
/// assert_eq!(yaml, "About:\n  free_text:\n  - Hello\n");
/// ```
pub fn tex_to_yaml(source: &str) -> Result<String, FormatError> {
    tex_to_yaml_with_rules(source, &ConversionRules::default())
}

pub fn tex_to_yaml_with_rules(source: &str, rules: &ConversionRules) -> Result<String, FormatError> {
    let doc = LatexFormat::new(rules.clone()).parse(source)?;
    YamlFormat::new(rules.clone()).serialize(&doc)
}

/// Convert YAML CV data to LaTeX with the default rules
pub fn yaml_to_tex(source: &str) -> Result<String, FormatError> {
    yaml_to_tex_with_rules(source, &ConversionRules::default())
}

pub fn yaml_to_tex_with_rules(source: &str, rules: &ConversionRules) -> Result<String, FormatError> {
    let doc = YamlFormat::new(rules.clone()).parse(source)?;
    LatexFormat::new(rules.clone()).serialize(&doc)
}

/// Round-trip transformation: parse LaTeX and re-serialize it
///
/// The output is the canonical layout of every entry; parsing it again gives
/// the same document.
pub fn format_latex_source(source: &str, rules: &ConversionRules) -> Result<String, FormatError> {
    let format = LatexFormat::new(rules.clone());
    let doc = format.parse(source)?;
    format.serialize(&doc)
}
