//! YAML parsing (YAML → Document)
//!
//! The source is read into a generic `serde_yaml::Value` and walked by hand,
//! because the shape of each record depends on which keys it carries and on
//! the labels of the section that holds it.

use crate::common::labels::entry_kind_for;
use crate::error::FormatError;
use crate::ir::nodes::{
    Description, Document, Entry, EntryFields, EntryKind, LanguageSkill, Record, Section,
    Subsection, TranscriptRow,
};
use crate::rules::ConversionRules;
use serde_yaml::{Mapping, Value};

/// Keys that make a mapping an entry rather than a subsection.
const ENTRY_FIELDS: &[&str] = &[
    "date",
    "description",
    "location",
    "journal",
    "authors",
    "event",
    "extension",
    "language",
    "extras",
];

/// Keys naming an entry in the legacy list layout, in order of preference.
const LEGACY_KEY_FIELDS: &[&str] = &["title", "name"];

/// Parse YAML source into a Document
pub fn parse_from_yaml(source: &str, rules: &ConversionRules) -> Result<Document, FormatError> {
    if source.trim().is_empty() {
        return Ok(Document::new());
    }
    let value: Value =
        serde_yaml::from_str(source).map_err(|e| FormatError::YamlSyntax(e.to_string()))?;
    document_from_value(&value, rules)
}

pub fn document_from_value(value: &Value, rules: &ConversionRules) -> Result<Document, FormatError> {
    let mut doc = Document::new();
    let root = match value {
        Value::Null => return Ok(doc),
        Value::Mapping(root) => root,
        Value::Tagged(tagged) => return document_from_value(&tagged.value, rules),
        _ => {
            return Err(FormatError::ParseError(
                "top level of a CV must be a mapping of section names".to_string(),
            ))
        }
    };

    for (key, value) in root {
        let name = scalar(key, "section name")?;
        let section = doc.open_section(&name);
        read_section(section, value, rules)?;
    }
    Ok(doc)
}

fn read_section(section: &mut Section, value: &Value, rules: &ConversionRules) -> Result<(), FormatError> {
    match value {
        Value::Null => Ok(()),
        Value::Mapping(items) => read_section_items(section, items, rules),
        Value::Sequence(entries) => {
            let name = section.name.clone();
            for (key, record) in read_legacy_list(&name, None, entries)? {
                section.insert_record(key, record);
            }
            Ok(())
        }
        Value::Tagged(tagged) => read_section(section, &tagged.value, rules),
        _ => Err(FormatError::ParseError(format!(
            "section '{}' must be a mapping or a list of entries",
            section.name
        ))),
    }
}

fn read_section_items(
    section: &mut Section,
    items: &Mapping,
    rules: &ConversionRules,
) -> Result<(), FormatError> {
    for (key, value) in items {
        let key = scalar(key, "key")?;
        if key == rules.free_text_key {
            for line in string_list(value, &key)? {
                section.push_free_text(line);
            }
            continue;
        }

        match value {
            Value::Mapping(mapping) if is_record(mapping) => {
                let record = read_record(&section.name, None, &key, mapping)?;
                section.insert_record(key, record);
            }
            Value::Mapping(mapping) => {
                let subsection = read_subsection(&section.name, &key, mapping)?;
                replace_subsection(section, subsection);
            }
            Value::Sequence(entries) => {
                let mut subsection = Subsection::new(key.as_str());
                for (entry_key, record) in read_legacy_list(&section.name, Some(key.as_str()), entries)? {
                    subsection.insert_record(entry_key, record);
                }
                replace_subsection(section, subsection);
            }
            Value::Null => {
                section.open_subsection(&key);
            }
            _ => log::warn!(
                "section '{}': skipping '{key}', which is neither an entry nor a subsection",
                section.name
            ),
        }
    }
    Ok(())
}

fn replace_subsection(section: &mut Section, subsection: Subsection) {
    let slot = section.open_subsection(&subsection.name);
    *slot = subsection;
}

fn read_subsection(section: &str, name: &str, mapping: &Mapping) -> Result<Subsection, FormatError> {
    let mut subsection = Subsection::new(name);
    for (key, value) in mapping {
        let key = scalar(key, "key")?;
        match value {
            Value::Mapping(record) => {
                let record = read_record(section, Some(name), &key, record)?;
                subsection.insert_record(key, record);
            }
            _ => log::warn!("subsection '{name}': skipping '{key}', which is not an entry"),
        }
    }
    Ok(subsection)
}

/// `[{title: ..., date: ...}, ...]`: each entry names itself.
fn read_legacy_list(
    section: &str,
    subsection: Option<&str>,
    entries: &[Value],
) -> Result<Vec<(String, Record)>, FormatError> {
    let mut records = Vec::with_capacity(entries.len());
    for (index, value) in entries.iter().enumerate() {
        let Value::Mapping(mapping) = value else {
            log::warn!("section '{section}': skipping list item {index}, which is not an entry");
            continue;
        };
        let Some((key_field, key)) = LEGACY_KEY_FIELDS
            .iter()
            .find_map(|name| mapping.get(*name).map(|key| (*name, key)))
        else {
            return Err(FormatError::ParseError(format!(
                "section '{section}': list item {index} has neither a title nor a name"
            )));
        };
        let key = scalar(key, key_field)?;
        let mut fields = mapping.clone();
        fields.remove(key_field);
        records.push((key.clone(), read_record(section, subsection, &key, &fields)?));
    }
    Ok(records)
}

fn is_record(mapping: &Mapping) -> bool {
    has(mapping, "grade")
        || is_language_skill(mapping)
        || ENTRY_FIELDS.iter().any(|field| has(mapping, field))
}

/// `{level}` or `{level, comment}` and nothing else.
fn is_language_skill(mapping: &Mapping) -> bool {
    has(mapping, "level")
        && mapping
            .keys()
            .all(|key| matches!(key.as_str(), Some("level" | "comment")))
}

fn read_record(
    section: &str,
    subsection: Option<&str>,
    key: &str,
    mapping: &Mapping,
) -> Result<Record, FormatError> {
    if has(mapping, "grade") {
        return Ok(Record::Transcript(TranscriptRow {
            grade: field(mapping, "grade")?,
            duration: optional_field(mapping, "duration")?,
        }));
    }
    if is_language_skill(mapping) {
        return Ok(Record::Language(LanguageSkill {
            level: field(mapping, "level")?,
            comment: optional_field(mapping, "comment")?,
        }));
    }

    let kind = entry_kind_for(section, subsection);
    log::debug!("'{key}' in '{section}' read as a {kind} entry");
    let fields = match kind {
        EntryKind::Generic => EntryFields::Generic {
            location: field(mapping, "location")?,
            extras: extras(mapping, key)?,
        },
        EntryKind::Education => EntryFields::Education {
            location: field(mapping, "location")?,
            extras: extras(mapping, key)?,
        },
        EntryKind::Publication => EntryFields::Publication {
            journal: field(mapping, "journal")?,
            authors: field(mapping, "authors")?,
        },
        EntryKind::Poster => EntryFields::Poster {
            event: field(mapping, "event")?,
            authors: field(mapping, "authors")?,
        },
        EntryKind::Course => EntryFields::Course {
            extension: field(mapping, "extension")?,
            location: field(mapping, "location")?,
            language: optional_field(mapping, "language")?,
        },
        EntryKind::LanguageExam | EntryKind::LanguageSkill => EntryFields::LanguageExam,
    };

    Ok(Record::Entry(Entry {
        date: field(mapping, "date")?,
        description: description(mapping, key)?,
        fields,
    }))
}

fn description(mapping: &Mapping, key: &str) -> Result<Description, FormatError> {
    match mapping.get("description") {
        None | Some(Value::Null) => Ok(Description::default()),
        Some(lines @ Value::Sequence(_)) => Ok(Description::Lines(string_list(lines, key)?)),
        Some(value) => Ok(Description::Text(scalar(value, "description")?)),
    }
}

fn extras(mapping: &Mapping, key: &str) -> Result<Vec<String>, FormatError> {
    match mapping.get("extras") {
        None => Ok(Vec::new()),
        Some(value) => string_list(value, key),
    }
}

fn has(mapping: &Mapping, key: &str) -> bool {
    mapping.contains_key(key)
}

/// A scalar field, `""` when absent.
fn field(mapping: &Mapping, key: &str) -> Result<String, FormatError> {
    Ok(optional_field(mapping, key)?.unwrap_or_default())
}

/// A scalar field, `None` when absent, null or empty.
fn optional_field(mapping: &Mapping, key: &str) -> Result<Option<String>, FormatError> {
    match mapping.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => Ok(Some(scalar(value, key)?).filter(|text| !text.is_empty())),
    }
}

/// A sequence of scalars, or a single scalar as a one-element list.
fn string_list(value: &Value, owner: &str) -> Result<Vec<String>, FormatError> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Sequence(items) => items.iter().map(|item| scalar(item, owner)).collect(),
        other => Ok(vec![scalar(other, owner)?]),
    }
}

/// Render a YAML scalar as text. Numbers and booleans keep their YAML
/// spelling, so `2020` and `"2020"` read the same.
fn scalar(value: &Value, what: &str) -> Result<String, FormatError> {
    match value {
        Value::String(text) => Ok(text.clone()),
        Value::Number(number) => Ok(number.to_string()),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Null => Ok(String::new()),
        Value::Tagged(tagged) => scalar(&tagged.value, what),
        Value::Sequence(_) | Value::Mapping(_) => Err(FormatError::ParseError(format!(
            "expected text for '{what}', found a nested collection"
        ))),
    }
}
