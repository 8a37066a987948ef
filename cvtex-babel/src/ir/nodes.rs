//! Core data structures for the CV document model.
//!
//! Both formats parse into and serialize from these types. Ordering is
//! significant everywhere: sections, section items and subsection records keep
//! the order in which they were first inserted, and re-inserting an existing
//! key replaces the value in place.

/// The root of a CV: an ordered list of named sections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub sections: Vec<Section>,
}

/// A top-level section (`\section{...}`).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    pub items: Vec<SectionItem>,
}

/// A second-level grouping of records (`\subsection{...}`).
#[derive(Debug, Clone, PartialEq)]
pub struct Subsection {
    pub name: String,
    pub records: Vec<(String, Record)>,
}

/// Anything that can appear directly under a section.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionItem {
    /// A keyed record (entry title, language name or transcript assignment).
    Record { key: String, record: Record },
    Subsection(Subsection),
    /// Lines of the section that belong to no entry, in source order.
    FreeText(Vec<String>),
}

/// A keyed leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Entry(Entry),
    Language(LanguageSkill),
    Transcript(TranscriptRow),
}

/// One résumé line item.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub date: String,
    pub description: Description,
    pub fields: EntryFields,
}

/// Kind-specific entry fields.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryFields {
    Generic {
        location: String,
        extras: Vec<String>,
    },
    Education {
        location: String,
        extras: Vec<String>,
    },
    Publication {
        journal: String,
        authors: String,
    },
    Poster {
        event: String,
        authors: String,
    },
    Course {
        extension: String,
        location: String,
        language: Option<String>,
    },
    LanguageExam,
}

/// Entry description.
///
/// Most kinds keep one fragment per source argument. The generic kind and the
/// three-field education layout store a single bare string instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Description {
    Lines(Vec<String>),
    Text(String),
}

/// `\cvitemwithcomment{language}{level}{comment}`
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageSkill {
    pub level: String,
    pub comment: Option<String>,
}

/// One graded row of a transcript table.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptRow {
    pub grade: String,
    pub duration: Option<String>,
}

/// The closed set of record layouts read from entry-like commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Generic,
    Education,
    Publication,
    Poster,
    Course,
    LanguageExam,
    /// `\cvitemwithcomment`, never selected by section dispatch
    LanguageSkill,
}

impl EntryKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntryKind::Generic => "generic",
            EntryKind::Education => "education",
            EntryKind::Publication => "publication",
            EntryKind::Poster => "poster",
            EntryKind::Course => "course",
            EntryKind::LanguageExam => "language exam",
            EntryKind::LanguageSkill => "language skill",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Open a section, clearing it if it already exists (position is kept).
    pub fn open_section(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => {
                self.sections[index].items.clear();
                index
            }
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Like [`Document::open_section`] but keeps existing content.
    pub fn section_mut_or_insert(&mut self, name: &str) -> &mut Section {
        let index = match self.sections.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.sections.push(Section::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Insert or replace a keyed record at section level.
    pub fn insert_record(&mut self, key: impl Into<String>, record: Record) {
        let key = key.into();
        for item in &mut self.items {
            if let SectionItem::Record { key: existing, record: slot } = item {
                if *existing == key {
                    *slot = record;
                    return;
                }
            }
        }
        self.items.push(SectionItem::Record { key, record });
    }

    /// Open a subsection, clearing it if it already exists.
    pub fn open_subsection(&mut self, name: &str) -> &mut Subsection {
        let index = self.items.iter().position(
            |item| matches!(item, SectionItem::Subsection(sub) if sub.name == name),
        );
        let index = match index {
            Some(index) => {
                if let SectionItem::Subsection(sub) = &mut self.items[index] {
                    sub.records.clear();
                }
                index
            }
            None => {
                self.items
                    .push(SectionItem::Subsection(Subsection::new(name)));
                self.items.len() - 1
            }
        };
        match &mut self.items[index] {
            SectionItem::Subsection(sub) => sub,
            _ => unreachable!("index points at a subsection"),
        }
    }

    pub fn subsection_mut(&mut self, name: &str) -> Option<&mut Subsection> {
        self.items.iter_mut().find_map(|item| match item {
            SectionItem::Subsection(sub) if sub.name == name => Some(sub),
            _ => None,
        })
    }

    pub fn subsection(&self, name: &str) -> Option<&Subsection> {
        self.items.iter().find_map(|item| match item {
            SectionItem::Subsection(sub) if sub.name == name => Some(sub),
            _ => None,
        })
    }

    /// Append a free-text line. All lines share one slot, placed where the
    /// first line appeared.
    pub fn push_free_text(&mut self, line: impl Into<String>) {
        let line = line.into();
        for item in &mut self.items {
            if let SectionItem::FreeText(lines) = item {
                lines.push(line);
                return;
            }
        }
        self.items.push(SectionItem::FreeText(vec![line]));
    }

    pub fn free_text(&self) -> &[String] {
        self.items
            .iter()
            .find_map(|item| match item {
                SectionItem::FreeText(lines) => Some(lines.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn record(&self, key: &str) -> Option<&Record> {
        self.items.iter().find_map(|item| match item {
            SectionItem::Record { key: k, record } if k == key => Some(record),
            _ => None,
        })
    }

    /// A section is a transcript as soon as any record is a graded row.
    pub fn is_transcript(&self) -> bool {
        self.items.iter().any(|item| {
            matches!(
                item,
                SectionItem::Record {
                    record: Record::Transcript(_),
                    ..
                }
            )
        })
    }
}

impl Subsection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
        }
    }

    pub fn insert_record(&mut self, key: impl Into<String>, record: Record) {
        let key = key.into();
        if let Some((_, slot)) = self.records.iter_mut().find(|(k, _)| *k == key) {
            *slot = record;
        } else {
            self.records.push((key, record));
        }
    }

    pub fn record(&self, key: &str) -> Option<&Record> {
        self.records
            .iter()
            .find_map(|(k, record)| (k == key).then_some(record))
    }
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        match self.fields {
            EntryFields::Generic { .. } => EntryKind::Generic,
            EntryFields::Education { .. } => EntryKind::Education,
            EntryFields::Publication { .. } => EntryKind::Publication,
            EntryFields::Poster { .. } => EntryKind::Poster,
            EntryFields::Course { .. } => EntryKind::Course,
            EntryFields::LanguageExam => EntryKind::LanguageExam,
        }
    }
}

impl Default for Description {
    fn default() -> Self {
        Description::Lines(Vec::new())
    }
}
