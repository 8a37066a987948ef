//! LaTeX CV format implementation
//!
//! This module implements bidirectional conversion between the moderncv-style
//! LaTeX dialect and the CV [`Document`].
//!
//! # Recognised Lines
//!
//! | Line                                   | Meaning                                  |
//! |----------------------------------------|------------------------------------------|
//! | `\section{Name}`                       | Opens a section, closes any subsection   |
//! | `\subsection{Name}`                    | Opens a subsection of the active section |
//! | `\cventry{a}{b}...`                    | Entry, layout chosen by section labels   |
//! | `\cvitemwithcomment{lang}{level}{c}`   | Language skill                           |
//! | `\title{University Transcript}`        | Rest of the input is a grade table       |
//! | `% ...`                                | Comment, skipped                         |
//! | other `\commands`                      | Skipped                                  |
//! | anything else                          | Free text of the active section          |
//!
//! An argument list continues on the next line when a line ends with `\\`.
//!
//! # Lossy Conversions
//!
//! - `\underline{x}` is imported as bold and exported as `\textbf{x}`
//! - Empty arguments are dropped before reading an entry, so an entry whose
//!   leading fields are empty shifts its remaining fields
//! - An education entry with three or four arguments keeps its description as
//!   a bare string, while five or more arguments give a list
//! - An education location without `", "` is written with an empty
//!   sub-location, so it reads back as `"<location>, <first fragment>"` when
//!   the description has two or more fragments, and as a bare-string
//!   description when it has one
//! - Transcript mode lasts until the end of the input; sections written after
//!   a transcript are read back as transcript rows or skipped, and the
//!   serializer logs a warning when it writes one

pub mod entries;
pub mod lines;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use crate::rules::ConversionRules;

/// Format implementation for LaTeX CVs
#[derive(Debug, Clone, Default)]
pub struct LatexFormat {
    rules: ConversionRules,
}

impl LatexFormat {
    pub fn new(rules: ConversionRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ConversionRules {
        &self.rules
    }
}

impl Format for LatexFormat {
    fn name(&self) -> &str {
        "latex"
    }

    fn description(&self) -> &str {
        "LaTeX CV markup (moderncv commands)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tex"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        parser::parse_from_latex(source, &self.rules)
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serializer::serialize_to_latex(doc, &self.rules)
    }
}
