//! LaTeX CV serialization (Document → LaTeX)
//!
//! Each entry is written back with the argument layout its reader expects,
//! so parsing the output selects the same kind and recovers the same fields.

use super::lines::CONTINUATION_MARKER;
use crate::common::inline::to_latex;
use crate::common::labels::{entry_kind_for, language_prefix_for};
use crate::error::FormatError;
use crate::ir::nodes::{
    Description, Document, Entry, EntryFields, LanguageSkill, Record, Section, SectionItem,
    TranscriptRow,
};
use crate::rules::ConversionRules;

pub struct LatexSerializer<'r> {
    rules: &'r ConversionRules,
    lines: Vec<String>,
}

impl<'r> LatexSerializer<'r> {
    pub fn new(rules: &'r ConversionRules) -> Self {
        Self {
            rules,
            lines: Vec::new(),
        }
    }

    pub fn serialize(mut self, doc: &Document) -> Result<String, FormatError> {
        let mut transcript_written: Option<&str> = None;
        for section in &doc.sections {
            if let Some(transcript) = transcript_written {
                log::warn!(
                    "section '{}' is written after transcript '{transcript}' and will not read back",
                    section.name
                );
            }
            if section.is_transcript() {
                self.write_transcript(section);
                transcript_written = Some(section.name.as_str());
            } else {
                self.write_section(&section.name, section.items.iter());
            }
        }
        let mut output = self.lines.join("\n");
        output.push('\n');
        Ok(output)
    }

    /// Non-row items of a transcript section are written first as a regular
    /// section; the transcript then names the same section so reading it back
    /// appends the rows to it.
    fn write_transcript(&mut self, section: &Section) {
        let (rows, others): (Vec<&SectionItem>, Vec<&SectionItem>) =
            section.items.iter().partition(|item| {
                matches!(
                    item,
                    SectionItem::Record {
                        record: Record::Transcript(_),
                        ..
                    }
                )
            });
        if !others.is_empty() {
            self.write_section(&section.name, others.into_iter());
        }

        self.lines
            .push(format!("\\title{{{}}}", self.rules.transcript_title));
        self.lines.push(format!("\\section{{{}}}", section.name));
        self.lines.push(String::new());
        for item in rows {
            if let SectionItem::Record {
                key,
                record: Record::Transcript(row),
            } = item
            {
                self.lines.push(format_transcript_row(key, row));
            }
        }
        self.lines.push(String::new());
    }

    /// Section-level records are written before the first subsection, since a
    /// record after a `\subsection` line reads back as part of it. Everything
    /// else keeps its stored order.
    fn write_section<'d>(&mut self, name: &str, items: impl Iterator<Item = &'d SectionItem>) {
        self.lines.push(format!("\\section{{{name}}}"));
        let items: Vec<&SectionItem> = items.collect();
        let first_subsection = items
            .iter()
            .position(|item| matches!(item, SectionItem::Subsection(_)))
            .unwrap_or(items.len());
        let (head, tail) = items.split_at(first_subsection);

        for item in head {
            self.write_item(name, item);
        }
        for item in tail {
            if matches!(item, SectionItem::Record { .. }) {
                self.write_item(name, item);
            }
        }
        for item in tail {
            if !matches!(item, SectionItem::Record { .. }) {
                self.write_item(name, item);
            }
        }
        self.lines.push(String::new());
    }

    fn write_item(&mut self, section: &str, item: &SectionItem) {
        match item {
            SectionItem::Record { key, record } => self.write_record(section, None, key, record),
            SectionItem::Subsection(subsection) => {
                self.lines
                    .push(format!("\\subsection{{{}}}", subsection.name));
                for (key, record) in &subsection.records {
                    self.write_record(section, Some(subsection.name.as_str()), key, record);
                }
            }
            SectionItem::FreeText(lines) => {
                self.lines.extend(lines.iter().map(|line| to_latex(line)));
            }
        }
    }

    fn write_record(&mut self, section: &str, subsection: Option<&str>, key: &str, record: &Record) {
        match record {
            Record::Entry(entry) => {
                let expected = entry_kind_for(section, subsection);
                if entry.kind() != expected {
                    log::warn!(
                        "'{key}' is a {} entry but '{section}' holds {expected} entries",
                        entry.kind()
                    );
                }
                self.lines
                    .push(format_entry(&self.rules.entry_command, section, key, entry));
            }
            Record::Language(skill) => self.lines.push(format_language_skill(key, skill)),
            Record::Transcript(_) => {
                log::warn!("'{key}': graded row outside of a transcript section")
            }
        }
    }
}

/// Serialize a Document to LaTeX CV source
pub fn serialize_to_latex(doc: &Document, rules: &ConversionRules) -> Result<String, FormatError> {
    LatexSerializer::new(rules).serialize(doc)
}

/// Render one entry command in the layout of its kind.
pub fn format_entry(command: &str, section: &str, title: &str, entry: &Entry) -> String {
    let description = format_description(&entry.description);
    let mut parts: Vec<String> = match &entry.fields {
        EntryFields::Education { location, .. } => {
            let (sub_location, location) = match location.split_once(", ") {
                Some((sub, main)) => (to_latex(sub), to_latex(main)),
                None => (String::new(), to_latex(location)),
            };
            vec![
                to_latex(&entry.date),
                to_latex(title),
                sub_location,
                location,
                String::new(),
                description,
            ]
        }
        EntryFields::Publication { journal, authors } => vec![
            to_latex(&entry.date),
            to_latex(title),
            to_latex(journal),
            to_latex(authors),
            String::new(),
            description,
        ],
        EntryFields::Poster { event, authors } => vec![
            to_latex(&entry.date),
            to_latex(title),
            to_latex(event),
            to_latex(authors),
            String::new(),
            description,
        ],
        EntryFields::Course {
            extension,
            location,
            language,
        } => vec![
            to_latex(&entry.date),
            to_latex(title),
            to_latex(extension),
            to_latex(location),
            language
                .as_deref()
                .filter(|language| !language.is_empty())
                .map(|language| format!("{} {}", language_prefix_for(section), to_latex(language)))
                .unwrap_or_default(),
            description,
        ],
        EntryFields::LanguageExam => vec![
            to_latex(&entry.date),
            to_latex(title),
            String::new(),
            String::new(),
            String::new(),
            description,
        ],
        EntryFields::Generic { location, .. } => vec![
            to_latex(&entry.date),
            to_latex(title),
            to_latex(location),
            description,
        ],
    };

    if let EntryFields::Generic { extras, .. } | EntryFields::Education { extras, .. } =
        &entry.fields
    {
        parts.extend(extras.iter().map(|extra| to_latex(extra)));
    }

    let arguments: String = parts.iter().map(|part| format!("{{{part}}}")).collect();
    format!("\\{command}{arguments}")
}

/// Multi-fragment descriptions are joined with the continuation marker, one
/// fragment per line; empty fragments are dropped.
pub fn format_description(description: &Description) -> String {
    let separator = format!(" {CONTINUATION_MARKER}\n");
    match description {
        Description::Text(text) => to_latex(text),
        Description::Lines(lines) => lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(to_latex)
            .collect::<Vec<_>>()
            .join(separator.as_str()),
    }
}

pub fn format_language_skill(language: &str, skill: &LanguageSkill) -> String {
    format!(
        "\\cvitemwithcomment{{{}}}{{{}}}{{{}}}",
        to_latex(language),
        to_latex(&skill.level),
        skill.comment.as_deref().map(to_latex).unwrap_or_default()
    )
}

pub fn format_transcript_row(assignment: &str, row: &TranscriptRow) -> String {
    match row.duration.as_deref().filter(|duration| !duration.is_empty()) {
        Some(duration) => format!(
            "{assignment} & {} & {duration} {CONTINUATION_MARKER}",
            row.grade
        ),
        None => format!("{assignment} & {} {CONTINUATION_MARKER}", row.grade),
    }
}
