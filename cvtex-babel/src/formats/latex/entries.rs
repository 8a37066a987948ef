//! Kind-specific readers for entry argument lists.
//!
//! Every reader receives the already empty-filtered arguments of one entry
//! command and returns the key the entry is stored under together with the
//! entry itself. Argument layouts:
//!
//! | Kind          | Arguments                                              |
//! |---------------|--------------------------------------------------------|
//! | education     | date, title, sub-location, location, description...    |
//! | education (3) | date, title, location[, description]                   |
//! | publication   | date, title, journal, authors, description...          |
//! | poster        | date, title, event, authors, description...            |
//! | course        | date, title, extension, location[, language], description... |
//! | language exam | date, exam, description...                             |
//! | generic       | date, title, location, description, extras...          |

use crate::common::labels::strip_language_prefix;
use crate::error::FormatError;
use crate::ir::nodes::{Description, Entry, EntryFields, EntryKind, LanguageSkill};

/// A parsed entry and the key it is stored under.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedEntry {
    pub key: String,
    pub entry: Entry,
}

/// Drop empty arguments.
pub fn non_empty(args: Vec<String>) -> Vec<String> {
    args.into_iter().filter(|arg| !arg.is_empty()).collect()
}

/// Read one entry of the given kind.
///
/// Generic entries with fewer than four arguments are not entries at all and
/// yield `Ok(None)`; every other kind fails on a short argument list.
pub fn read_entry(
    kind: EntryKind,
    args: &[String],
    line: usize,
) -> Result<Option<KeyedEntry>, FormatError> {
    let entry = match kind {
        EntryKind::Generic => {
            if args.len() < 4 {
                return Ok(None);
            }
            read_generic(args)
        }
        EntryKind::Education => read_education(args, line)?,
        EntryKind::Publication => {
            require(kind, args, 4, line)?;
            keyed(args, args[4..].to_vec(), |args| EntryFields::Publication {
                journal: args[2].clone(),
                authors: args[3].clone(),
            })
        }
        EntryKind::Poster => {
            require(kind, args, 4, line)?;
            keyed(args, args[4..].to_vec(), |args| EntryFields::Poster {
                event: args[2].clone(),
                authors: args[3].clone(),
            })
        }
        EntryKind::Course => read_course(args, line)?,
        EntryKind::LanguageExam => {
            require(kind, args, 2, line)?;
            keyed(args, args[2..].to_vec(), |_| EntryFields::LanguageExam)
        }
        EntryKind::LanguageSkill => {
            return Err(FormatError::ParseError(format!(
                "Line {line}: language skills are not entry commands"
            )))
        }
    };
    Ok(Some(entry))
}

/// `\cvitemwithcomment{language}{level}{comment}`; positions matter, so the
/// arguments are not empty-filtered.
pub fn read_language_skill(
    args: &[String],
    line: usize,
) -> Result<(String, LanguageSkill), FormatError> {
    let present = args.iter().take_while(|arg| !arg.is_empty()).count();
    if args.len() < 2 || args[0].is_empty() {
        return Err(FormatError::MissingArguments {
            kind: EntryKind::LanguageSkill,
            line,
            expected: 2,
            found: present,
        });
    }
    let comment = args
        .get(2)
        .filter(|comment| !comment.is_empty())
        .cloned();
    Ok((
        args[0].clone(),
        LanguageSkill {
            level: args[1].clone(),
            comment,
        },
    ))
}

fn require(kind: EntryKind, args: &[String], expected: usize, line: usize) -> Result<(), FormatError> {
    if args.len() < expected {
        return Err(FormatError::MissingArguments {
            kind,
            line,
            expected,
            found: args.len(),
        });
    }
    Ok(())
}

fn keyed(
    args: &[String],
    description: Vec<String>,
    fields: impl FnOnce(&[String]) -> EntryFields,
) -> KeyedEntry {
    KeyedEntry {
        key: args[1].clone(),
        entry: Entry {
            date: args[0].clone(),
            description: Description::Lines(description),
            fields: fields(args),
        },
    }
}

/// Five or more arguments carry a sub-location and a location, joined as
/// `"sub, location"`. Three or four arguments carry a single location and
/// keep the optional fourth argument as a bare description string.
fn read_education(args: &[String], line: usize) -> Result<KeyedEntry, FormatError> {
    match args.len() {
        0..=2 => Err(FormatError::MissingArguments {
            kind: EntryKind::Education,
            line,
            expected: 3,
            found: args.len(),
        }),
        3 | 4 => Ok(KeyedEntry {
            key: args[1].clone(),
            entry: Entry {
                date: args[0].clone(),
                description: Description::Text(args.get(3).cloned().unwrap_or_default()),
                fields: EntryFields::Education {
                    location: args[2].clone(),
                    extras: Vec::new(),
                },
            },
        }),
        _ => Ok(keyed(args, args[4..].to_vec(), |args| {
            EntryFields::Education {
                location: format!("{}, {}", args[2], args[3]),
                extras: Vec::new(),
            }
        })),
    }
}

/// The fifth argument is a language label only when it carries a
/// `Language:`/`Idioma:` prefix; otherwise it starts the description.
fn read_course(args: &[String], line: usize) -> Result<KeyedEntry, FormatError> {
    require(EntryKind::Course, args, 4, line)?;
    let (language, description) = match args.get(4).and_then(|arg| strip_language_prefix(arg)) {
        Some(language) => (Some(language.to_string()), args[5..].to_vec()),
        None => (None, args[4..].to_vec()),
    };
    Ok(keyed(args, description, |args| EntryFields::Course {
        extension: args[2].clone(),
        location: args[3].clone(),
        language,
    }))
}

fn read_generic(args: &[String]) -> KeyedEntry {
    KeyedEntry {
        key: args[1].clone(),
        entry: Entry {
            date: args[0].clone(),
            description: Description::Text(args[3].clone()),
            fields: EntryFields::Generic {
                location: args[2].clone(),
                extras: args[4..].to_vec(),
            },
        },
    }
}
