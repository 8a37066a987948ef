//! YAML serialization (Document → YAML)
//!
//! The Document is first mapped onto a `serde_yaml::Value` tree, whose
//! mappings keep insertion order, and then rendered in block style.

use crate::error::FormatError;
use crate::ir::nodes::{
    Description, Document, Entry, EntryFields, LanguageSkill, Record, Section, SectionItem,
    TranscriptRow,
};
use crate::rules::ConversionRules;
use serde_yaml::{Mapping, Value};

/// Serialize a Document to YAML
pub fn serialize_to_yaml(doc: &Document, rules: &ConversionRules) -> Result<String, FormatError> {
    let value = document_to_value(doc, rules);
    serde_yaml::to_string(&value).map_err(|e| FormatError::SerializationError(e.to_string()))
}

pub fn document_to_value(doc: &Document, rules: &ConversionRules) -> Value {
    let mut root = Mapping::new();
    for section in &doc.sections {
        root.insert(
            Value::String(section.name.clone()),
            Value::Mapping(section_to_mapping(section, rules)),
        );
    }
    Value::Mapping(root)
}

fn section_to_mapping(section: &Section, rules: &ConversionRules) -> Mapping {
    let mut mapping = Mapping::new();
    for item in &section.items {
        match item {
            SectionItem::Record { key, record } => {
                mapping.insert(Value::String(key.clone()), record_to_value(record));
            }
            SectionItem::Subsection(subsection) => {
                let mut records = Mapping::new();
                for (key, record) in &subsection.records {
                    records.insert(Value::String(key.clone()), record_to_value(record));
                }
                mapping.insert(
                    Value::String(subsection.name.clone()),
                    Value::Mapping(records),
                );
            }
            SectionItem::FreeText(lines) => {
                mapping.insert(
                    Value::String(rules.free_text_key.clone()),
                    strings(lines),
                );
            }
        }
    }
    mapping
}

fn record_to_value(record: &Record) -> Value {
    match record {
        Record::Entry(entry) => Value::Mapping(entry_to_mapping(entry)),
        Record::Language(skill) => Value::Mapping(language_to_mapping(skill)),
        Record::Transcript(row) => Value::Mapping(transcript_to_mapping(row)),
    }
}

/// Field order per kind: `date`, the kind's own fields, `description`, then
/// `extras` when there are any.
fn entry_to_mapping(entry: &Entry) -> Mapping {
    let mut mapping = Mapping::new();
    put(&mut mapping, "date", string(&entry.date));
    let extras = match &entry.fields {
        EntryFields::Generic { location, extras } | EntryFields::Education { location, extras } => {
            put(&mut mapping, "location", string(location));
            Some(extras)
        }
        EntryFields::Publication { journal, authors } => {
            put(&mut mapping, "journal", string(journal));
            put(&mut mapping, "authors", string(authors));
            None
        }
        EntryFields::Poster { event, authors } => {
            put(&mut mapping, "event", string(event));
            put(&mut mapping, "authors", string(authors));
            None
        }
        EntryFields::Course {
            extension,
            location,
            language,
        } => {
            put(&mut mapping, "extension", string(extension));
            put(&mut mapping, "location", string(location));
            if let Some(language) = language {
                put(&mut mapping, "language", string(language));
            }
            None
        }
        EntryFields::LanguageExam => None,
    };
    put(&mut mapping, "description", description_to_value(&entry.description));
    if let Some(extras) = extras.filter(|extras| !extras.is_empty()) {
        put(&mut mapping, "extras", strings(extras));
    }
    mapping
}

fn language_to_mapping(skill: &LanguageSkill) -> Mapping {
    let mut mapping = Mapping::new();
    put(&mut mapping, "level", string(&skill.level));
    if let Some(comment) = &skill.comment {
        put(&mut mapping, "comment", string(comment));
    }
    mapping
}

fn transcript_to_mapping(row: &TranscriptRow) -> Mapping {
    let mut mapping = Mapping::new();
    put(&mut mapping, "grade", string(&row.grade));
    if let Some(duration) = &row.duration {
        put(&mut mapping, "duration", string(duration));
    }
    mapping
}

fn description_to_value(description: &Description) -> Value {
    match description {
        Description::Lines(lines) => strings(lines),
        Description::Text(text) => string(text),
    }
}

fn put(mapping: &mut Mapping, key: &str, value: Value) {
    mapping.insert(Value::String(key.to_string()), value);
}

fn string(text: &str) -> Value {
    Value::String(text.to_string())
}

fn strings(lines: &[String]) -> Value {
    Value::Sequence(lines.iter().map(|line| string(line)).collect())
}
