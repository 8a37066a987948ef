//! Bilingual section labels and entry-kind dispatch.
//!
//! Section and subsection names are matched case-insensitively against a
//! closed table of (English, Spanish) label pairs. Anything outside the table
//! maps to the `Other` category. Both the parser and the serializer pick the
//! entry layout through [`entry_kind_for`], which keeps the layout of an entry
//! stable across a round trip.

use crate::ir::nodes::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionCategory {
    Education,
    Experience,
    Production,
    Conferences,
    Languages,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubsectionCategory {
    Publications,
    Posters,
    Outreach,
    InternationalExams,
    Other,
}

/// Which language a recognised label was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLanguage {
    English,
    Spanish,
}

const SECTION_LABELS: &[(SectionCategory, &str, &str)] = &[
    (SectionCategory::Education, "Education", "Educación"),
    (SectionCategory::Experience, "Experience", "Experiencia"),
    (SectionCategory::Production, "Production", "Producción"),
    (
        SectionCategory::Conferences,
        "Participation in Conferences and Schools",
        "Cursos y Congresos",
    ),
    (SectionCategory::Languages, "Languages", "Idiomas"),
];

const SUBSECTION_LABELS: &[(SubsectionCategory, &str, &str)] = &[
    (SubsectionCategory::Publications, "Publications", "Publicaciones"),
    (
        SubsectionCategory::Posters,
        "Posters and Oral Presentations",
        "Posters y Presentaciones Orales",
    ),
    (
        SubsectionCategory::Outreach,
        "Outreach Experience",
        "Divulgación Científica",
    ),
    (
        SubsectionCategory::InternationalExams,
        "International Exams",
        "Exámenes Internacionales",
    ),
];

/// Header cells of a transcript table, skipped while reading rows.
pub const TRANSCRIPT_HEADERS: &[&str] = &["Assignment", "Asignatura"];

/// Prefixes carried by the language argument of a course entry.
pub const COURSE_LANGUAGE_PREFIXES: &[(LabelLanguage, &str)] = &[
    (LabelLanguage::English, "Language:"),
    (LabelLanguage::Spanish, "Idioma:"),
];

fn lookup<C: Copy>(table: &[(C, &str, &str)], name: &str) -> Option<(C, LabelLanguage)> {
    let needle = name.trim().to_lowercase();
    table.iter().find_map(|(category, english, spanish)| {
        if english.to_lowercase() == needle {
            Some((*category, LabelLanguage::English))
        } else if spanish.to_lowercase() == needle {
            Some((*category, LabelLanguage::Spanish))
        } else {
            None
        }
    })
}

pub fn section_category(name: &str) -> SectionCategory {
    lookup(SECTION_LABELS, name)
        .map(|(category, _)| category)
        .unwrap_or(SectionCategory::Other)
}

pub fn subsection_category(name: &str) -> SubsectionCategory {
    lookup(SUBSECTION_LABELS, name)
        .map(|(category, _)| category)
        .unwrap_or(SubsectionCategory::Other)
}

/// Language of a recognised section label, `None` for unrecognised names.
pub fn section_language(name: &str) -> Option<LabelLanguage> {
    lookup(SECTION_LABELS, name).map(|(_, language)| language)
}

/// The entry layout used for `\cventry` lines under `section`/`subsection`.
pub fn entry_kind_for(section: &str, subsection: Option<&str>) -> EntryKind {
    let sub = subsection.map(subsection_category);
    match section_category(section) {
        SectionCategory::Education | SectionCategory::Experience => EntryKind::Education,
        SectionCategory::Production => match sub {
            Some(SubsectionCategory::Publications) => EntryKind::Publication,
            Some(SubsectionCategory::Posters | SubsectionCategory::Outreach) => EntryKind::Poster,
            _ => EntryKind::Education,
        },
        SectionCategory::Conferences => EntryKind::Course,
        SectionCategory::Languages => match sub {
            Some(SubsectionCategory::InternationalExams) => EntryKind::LanguageExam,
            _ => EntryKind::Education,
        },
        SectionCategory::Other => EntryKind::Generic,
    }
}

/// Strip a `Language:`/`Idioma:` prefix (case-insensitive). Returns `None`
/// when the text carries neither prefix.
pub fn strip_language_prefix(text: &str) -> Option<&str> {
    let trimmed = text.trim_start();
    COURSE_LANGUAGE_PREFIXES.iter().find_map(|(_, prefix)| {
        let head = trimmed.get(..prefix.len())?;
        head.eq_ignore_ascii_case(prefix)
            .then(|| trimmed[prefix.len()..].trim())
    })
}

/// The language prefix matching the label language of `section`.
pub fn language_prefix_for(section: &str) -> &'static str {
    let language = section_language(section).unwrap_or(LabelLanguage::English);
    COURSE_LANGUAGE_PREFIXES
        .iter()
        .find_map(|(lang, prefix)| (*lang == language).then_some(*prefix))
        .unwrap_or("Language:")
}

pub fn is_transcript_header(cell: &str) -> bool {
    TRANSCRIPT_HEADERS
        .iter()
        .any(|header| cell.trim().eq_ignore_ascii_case(header))
}
