use serde::{Deserialize, Serialize};

/// Vocabulary shared by the LaTeX and YAML formats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRules {
    /// Name of the entry command, without the backslash
    pub entry_command: String,

    /// Reserved YAML key holding a section's free-text lines
    pub free_text_key: String,

    /// `\title{...}` argument that switches the parser into transcript mode
    pub transcript_title: String,
}

impl Default for ConversionRules {
    fn default() -> Self {
        Self {
            entry_command: "cventry".to_string(),
            free_text_key: "free_text".to_string(),
            transcript_title: "University Transcript".to_string(),
        }
    }
}
