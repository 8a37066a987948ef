//! YAML CV format implementation
//!
//! The YAML side is a nested mapping: section name → entry title → fields,
//! with subsections as one more level of mapping. Key order follows the
//! document and is never sorted.
//!
//! ```yaml
//! Education:
//!   free_text:
//!   - Line of prose
//!   BSc Physics:
//!     date: '2020'
//!     location: Dept. of Physics, State University
//!     description:
//!     - Graduated with honors
//! ```
//!
//! How a mapping under a section is read:
//!
//! - the free-text key holds a list of lines
//! - a `grade` key makes a transcript row
//! - `level` with at most a `comment` makes a language skill
//! - any entry field (`date`, `description`, `location`, ...) makes an entry,
//!   laid out by the labels of its section and subsection
//! - anything else is a subsection
//!
//! A section or subsection may also be a list of entries, each naming itself
//! with a `title` (or `name`) field.

pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::rules::ConversionRules;

/// Format implementation for YAML CVs
#[derive(Debug, Clone, Default)]
pub struct YamlFormat {
    rules: ConversionRules,
}

impl YamlFormat {
    pub fn new(rules: ConversionRules) -> Self {
        Self { rules }
    }
}

impl Format for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn description(&self) -> &str {
        "Structured CV data in YAML"
    }

    fn file_extensions(&self) -> &[&str] {
        &["yaml", "yml"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_yaml(source, &self.rules)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_yaml(doc, &self.rules)
    }
}
