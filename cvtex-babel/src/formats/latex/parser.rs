//! LaTeX CV parsing (LaTeX → Document)
//!
//! A single forward pass over cleaned lines. The only state carried between
//! lines is [`ParserState`]: the active section, the active subsection and
//! whether the transcript title has switched the rest of the input into
//! table mode.

use super::entries::{non_empty, read_entry, read_language_skill};
use super::lines::{
    collect_arguments, command_name, first_argument, split_arguments, strip_continuation, Line,
    LineCursor,
};
use crate::common::labels::{entry_kind_for, is_transcript_header};
use crate::error::FormatError;
use crate::ir::nodes::{Document, Record, TranscriptRow};
use crate::rules::ConversionRules;

const LANGUAGE_ITEM_COMMAND: &str = "cvitemwithcomment";

/// What a single cleaned line is, before any state is consulted.
#[derive(Debug, Clone, PartialEq)]
pub enum LineClass {
    Blank,
    Comment,
    Title(String),
    Section(String),
    Subsection(String),
    Entry,
    LanguageItem,
    OtherCommand,
    Text,
}

#[derive(Debug, Default)]
struct ParserState {
    section: Option<String>,
    subsection: Option<String>,
    transcript: bool,
}

pub fn classify(text: &str, rules: &ConversionRules) -> LineClass {
    if text.is_empty() {
        return LineClass::Blank;
    }
    if text.starts_with('%') {
        return LineClass::Comment;
    }
    let Some(name) = command_name(text) else {
        return if text.starts_with('\\') {
            LineClass::OtherCommand
        } else {
            LineClass::Text
        };
    };
    match name {
        "title" => LineClass::Title(first_argument(text).unwrap_or_default()),
        "section" => LineClass::Section(first_argument(text).unwrap_or_default()),
        "subsection" => LineClass::Subsection(first_argument(text).unwrap_or_default()),
        LANGUAGE_ITEM_COMMAND => LineClass::LanguageItem,
        name if name == rules.entry_command => LineClass::Entry,
        _ => LineClass::OtherCommand,
    }
}

/// Parse LaTeX CV source into a Document
pub fn parse_from_latex(source: &str, rules: &ConversionRules) -> Result<Document, FormatError> {
    let mut cursor = LineCursor::new(source);
    let mut state = ParserState::default();
    let mut doc = Document::new();

    while let Some(line) = cursor.next_line() {
        if state.transcript {
            read_transcript_line(&line, &mut state, &mut doc, rules);
            continue;
        }

        match classify(&line.text, rules) {
            LineClass::Blank | LineClass::Comment | LineClass::OtherCommand => {}
            LineClass::Title(title) => {
                if title.trim() == rules.transcript_title {
                    log::debug!("line {}: entering transcript mode", line.number);
                    state.transcript = true;
                    state.section = None;
                    state.subsection = None;
                }
            }
            LineClass::Section(name) => {
                log::debug!("line {}: section '{name}'", line.number);
                doc.open_section(&name);
                state.section = Some(name);
                state.subsection = None;
            }
            LineClass::Subsection(name) => {
                let Some(section) = state.section.as_deref() else {
                    log::warn!("line {}: subsection '{name}' outside of any section", line.number);
                    continue;
                };
                if let Some(section) = doc.section_mut(section) {
                    section.open_subsection(&name);
                }
                state.subsection = Some(name);
            }
            LineClass::Entry => {
                let args = non_empty(collect_arguments(&line, &mut cursor));
                read_entry_line(&line, args, &state, &mut doc)?;
            }
            LineClass::LanguageItem => {
                let args = split_arguments(&line.text)
                    .into_iter()
                    .map(|arg| arg.trim().to_string())
                    .collect::<Vec<_>>();
                let (name, skill) = read_language_skill(&args, line.number)?;
                store(&state, &mut doc, name, Record::Language(skill), line.number);
            }
            LineClass::Text => {
                match state.section.as_deref().and_then(|s| doc.section_mut(s)) {
                    Some(section) => section.push_free_text(line.text),
                    None => log::debug!("line {}: text before the first section", line.number),
                }
            }
        }
    }

    Ok(doc)
}

fn read_entry_line(
    line: &Line,
    args: Vec<String>,
    state: &ParserState,
    doc: &mut Document,
) -> Result<(), FormatError> {
    let Some(section) = state.section.as_deref() else {
        log::warn!("line {}: entry outside of any section", line.number);
        return Ok(());
    };
    let kind = entry_kind_for(section, state.subsection.as_deref());
    log::debug!(
        "line {}: {kind} entry with {} arguments",
        line.number,
        args.len()
    );
    match read_entry(kind, &args, line.number)? {
        Some(parsed) => store(state, doc, parsed.key, Record::Entry(parsed.entry), line.number),
        None => log::warn!(
            "line {}: skipping entry with {} arguments in section '{section}'",
            line.number,
            args.len()
        ),
    }
    Ok(())
}

fn store(state: &ParserState, doc: &mut Document, key: String, record: Record, number: usize) {
    let Some(section) = state.section.as_deref().and_then(|s| doc.section_mut(s)) else {
        log::warn!("line {number}: '{key}' outside of any section");
        return;
    };
    match state.subsection.as_deref() {
        Some(name) => {
            if section.subsection(name).is_none() {
                section.open_subsection(name);
            }
            if let Some(subsection) = section.subsection_mut(name) {
                subsection.insert_record(key, record);
            }
        }
        None => section.insert_record(key, record),
    }
}

/// Transcript mode: `assignment & grade [& duration] \\` rows until the end
/// of input. Rows go to the section named by the latest `\section`, or to a
/// section named after the transcript title when none follows the title. The
/// named section keeps anything it already holds. Other commands, headers,
/// blanks and comments are skipped.
fn read_transcript_line(
    line: &Line,
    state: &mut ParserState,
    doc: &mut Document,
    rules: &ConversionRules,
) {
    let text = line.text.as_str();
    if text.is_empty() || text.starts_with('%') {
        return;
    }
    if text.starts_with('\\') {
        if let LineClass::Section(name) = classify(text, rules) {
            doc.section_mut_or_insert(&name);
            state.section = Some(name);
            state.subsection = None;
        }
        return;
    }

    let row = strip_continuation(text);
    let delimiter = if row.contains('&') { '&' } else { '|' };
    let cells: Vec<&str> = row.split(delimiter).map(str::trim).collect();
    if cells.len() < 2 || cells[0].is_empty() {
        log::debug!("line {}: not a transcript row", line.number);
        return;
    }
    if is_transcript_header(cells[0]) {
        return;
    }

    let duration = cells
        .get(2)
        .filter(|duration| !duration.is_empty())
        .map(|duration| duration.to_string());
    let record = Record::Transcript(TranscriptRow {
        grade: cells[1].to_string(),
        duration,
    });
    let section = state
        .section
        .get_or_insert_with(|| rules.transcript_title.clone());
    doc.section_mut_or_insert(section)
        .insert_record(cells[0], record);
}
