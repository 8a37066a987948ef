//! Conversion between LaTeX CVs and structured YAML
//!
//!     This crate converts a résumé written in a moderncv-style LaTeX dialect into a nested YAML
//!     mapping, and back again. Both directions go through one in-memory model, so a document
//!     read from either side can be written to the other.
//!
//! Architecture
//!
//!     Each format only knows its own syntax. Everything both formats need to agree on lives in
//!     a format agnostic layer: the document model (./ir/nodes.rs), the inline markup converter
//!     (./common/inline.rs) and the bilingual section labels that decide how an entry is laid out
//!     (./common/labels.rs). Because the parser and the serializer pick the entry layout from the
//!     same table, an entry keeps its kind across a round trip.
//!
//!     This is a pure lib, that is, it powers the cvtex-cli binaries but is shell agnostic: no
//!     code here prints, reads environment variables or touches files.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── rules.rs                # ConversionRules shared by both formats
//!     ├── transforms.rs           # One-call conversions
//!     ├── formats
//!     │   ├── latex               # lines, entries, parser, serializer
//!     │   └── yaml                # parser, serializer
//!     ├── ir                      # Document model
//!     └── common                  # Inline markup and section labels
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── <area>
//!     │   └── <testname>.rs
//!     └── fixtures
//!
//!     Rust does not discover tests in subdirectories, so tests/lib.rs includes them as modules.
//!
//! Lossiness
//!
//!     The conversion is structural, not textual. Underline is read as bold, empty entry
//!     arguments are dropped, comments and unknown commands are skipped. Converting LaTeX to
//!     YAML and back gives the canonical layout of each entry, which then converts stably.

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod rules;
pub mod transforms;

pub mod common;
pub mod ir;

pub use error::FormatError;
pub use format::Format;
pub use formats::{LatexFormat, YamlFormat};
pub use ir::nodes::Document;
pub use registry::FormatRegistry;
pub use rules::ConversionRules;
