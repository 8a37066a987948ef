//! Export tests for the LaTeX format (Document → LaTeX)

use cvtex_babel::format::Format;
use cvtex_babel::formats::LatexFormat;
use cvtex_babel::ir::nodes::{
    Description, Document, Entry, EntryFields, LanguageSkill, Record, TranscriptRow,
};

fn doc_to_tex(doc: &Document) -> String {
    LatexFormat::default()
        .serialize(doc)
        .expect("Should serialize to LaTeX")
}

fn publication(journal: &str, description: &[&str]) -> Record {
    Record::Entry(Entry {
        date: "2021".into(),
        description: Description::Lines(description.iter().map(|d| d.to_string()).collect()),
        fields: EntryFields::Publication {
            journal: journal.into(),
            authors: "A. Example".into(),
        },
    })
}

#[test]
fn test_section_with_subsection() {
    let mut doc = Document::new();
    let production = doc.open_section("Producción");
    production.push_free_text("Selected work");
    production
        .open_subsection("Publicaciones")
        .insert_record("Fast Spectra", publication("Optics", &["First", "Second"]));

    assert_eq!(
        doc_to_tex(&doc),
        "\\section{Producción}\n\
         Selected work\n\
         \\subsection{Publicaciones}\n\
         \\cventry{2021}{Fast Spectra}{Optics}{A. Example}{}{First \\\\\n\
         Second}\n\
         \n"
    );
}

#[test]
fn test_free_text_markup_is_restored() {
    let mut doc = Document::new();
    doc.open_section("About")
        .push_free_text("**Bold**, *italic* and [a link](https://example.org) in 2^nd^ place");

    assert_eq!(
        doc_to_tex(&doc),
        "\\section{About}\n\
         \\textbf{Bold}, \\textit{italic} and \\href{https://example.org}{a link} in 2$^{nd}$ place\n\
         \n"
    );
}

#[test]
fn test_transcript_section() {
    let mut doc = Document::new();
    let grades = doc.open_section("Grades");
    grades.insert_record(
        "Calculus",
        Record::Transcript(TranscriptRow {
            grade: "9.5".into(),
            duration: Some("Annual".into()),
        }),
    );
    grades.insert_record(
        "Optics",
        Record::Transcript(TranscriptRow {
            grade: "8".into(),
            duration: None,
        }),
    );

    assert_eq!(
        doc_to_tex(&doc),
        "\\title{University Transcript}\n\
         \\section{Grades}\n\
         \n\
         Calculus & 9.5 & Annual \\\\\n\
         Optics & 8 \\\\\n\
         \n"
    );
}

#[test]
fn test_language_skills() {
    let mut doc = Document::new();
    let languages = doc.open_section("Languages");
    languages.insert_record(
        "English",
        Record::Language(LanguageSkill {
            level: "C2".into(),
            comment: Some("Native".into()),
        }),
    );

    assert_eq!(
        doc_to_tex(&doc),
        "\\section{Languages}\n\\cvitemwithcomment{English}{C2}{Native}\n\n"
    );
}

#[test]
fn test_entry_kind_follows_section_labels() {
    // A publication record placed in a generic section is written with the
    // publication layout but re-read as a generic entry.
    let mut doc = Document::new();
    doc.open_section("Awards")
        .insert_record("Paper", publication("Optics", &["Note"]));

    let tex = doc_to_tex(&doc);
    assert_eq!(
        tex,
        "\\section{Awards}\n\\cventry{2021}{Paper}{Optics}{A. Example}{}{Note}\n\n"
    );

    let reread = LatexFormat::default().parse(&tex).unwrap();
    let Some(Record::Entry(entry)) = reread.section("Awards").unwrap().record("Paper") else {
        panic!("Expected an entry");
    };
    assert_eq!(
        entry.fields,
        EntryFields::Generic {
            location: "Optics".into(),
            extras: vec!["Note".into()],
        }
    );
}
