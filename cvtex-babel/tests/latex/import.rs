//! Import tests for the LaTeX format (LaTeX → Document)

use crate::common::fixture;
use cvtex_babel::format::Format;
use cvtex_babel::formats::LatexFormat;
use cvtex_babel::ir::nodes::{
    Description, Document, EntryFields, LanguageSkill, Record, SectionItem, TranscriptRow,
};
use cvtex_babel::FormatError;

fn tex_to_doc(tex: &str) -> Document {
    LatexFormat::default().parse(tex).expect("Should parse LaTeX")
}

fn entry_fields<'a>(record: Option<&'a Record>) -> &'a EntryFields {
    match record {
        Some(Record::Entry(entry)) => &entry.fields,
        other => panic!("Expected an entry, found {other:?}"),
    }
}

#[test]
fn test_fixture_section_order() {
    let doc = tex_to_doc(&fixture("cv.tex"));
    let names: Vec<&str> = doc.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Education",
            "Experience",
            "Production",
            "Participation in Conferences and Schools",
            "Languages",
            "Awards",
            "Transcript",
        ]
    );
}

#[test]
fn test_fixture_education_layouts() {
    let doc = tex_to_doc(&fixture("cv.tex"));
    let education = doc.section("Education").unwrap();

    let Some(Record::Entry(bsc)) = education.record("BSc Physics") else {
        panic!("Expected BSc Physics entry");
    };
    assert_eq!(
        bsc.fields,
        EntryFields::Education {
            location: "Dept. of Physics, State University".into(),
            extras: vec![],
        }
    );
    assert_eq!(
        bsc.description,
        Description::Lines(vec!["Graduated with **honors**".into()])
    );

    let Some(Record::Entry(school)) = education.record("High School") else {
        panic!("Expected High School entry");
    };
    assert_eq!(school.description, Description::Text(String::new()));
}

#[test]
fn test_fixture_every_kind() {
    let doc = tex_to_doc(&fixture("cv.tex"));

    let production = doc.section("Production").unwrap();
    assert!(matches!(
        entry_fields(production.subsection("Publications").unwrap().record("Fast Spectra")),
        EntryFields::Publication { authors, .. } if authors == "A. Example, B. Other"
    ));
    assert!(matches!(
        entry_fields(
            production
                .subsection("Posters and Oral Presentations")
                .unwrap()
                .record("Poster on Lasers")
        ),
        EntryFields::Poster { event, .. } if event == "Photonics Week"
    ));

    let courses = doc.section("Participation in Conferences and Schools").unwrap();
    assert_eq!(
        entry_fields(courses.record("Summer School")),
        &EntryFields::Course {
            extension: "40 hours".into(),
            location: "Granada".into(),
            language: Some("Spanish".into()),
        }
    );

    let languages = doc.section("Languages").unwrap();
    assert_eq!(
        languages.record("English"),
        Some(&Record::Language(LanguageSkill {
            level: "C2".into(),
            comment: Some("Native".into()),
        }))
    );
    assert_eq!(
        entry_fields(languages.subsection("International Exams").unwrap().record("IELTS")),
        &EntryFields::LanguageExam
    );

    let awards = doc.section("Awards").unwrap();
    assert!(matches!(awards.items[0], SectionItem::FreeText(_)));
    assert_eq!(
        entry_fields(awards.record("Best Talk")),
        &EntryFields::Generic {
            location: "Berlin".into(),
            extras: vec!["Cash prize".into()],
        }
    );
}

#[test]
fn test_fixture_transcript() {
    let doc = tex_to_doc(&fixture("cv.tex"));
    let transcript = doc.section("Transcript").unwrap();

    assert!(transcript.is_transcript());
    let assignments: Vec<&str> = transcript
        .items
        .iter()
        .filter_map(|item| match item {
            SectionItem::Record { key, .. } => Some(key.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(assignments, vec!["Calculus", "Optics", "Thermodynamics"]);
    assert_eq!(
        transcript.record("Thermodynamics"),
        Some(&Record::Transcript(TranscriptRow {
            grade: "7".into(),
            duration: None,
        }))
    );
}

#[test]
fn test_preamble_is_ignored() {
    let doc = tex_to_doc(&fixture("cv.tex"));
    assert!(doc.section("Education").unwrap().free_text().is_empty());
}

#[test]
fn test_empty_source() {
    assert_eq!(tex_to_doc(""), Document::new());
}

#[test]
fn test_underline_is_read_as_bold() {
    let doc = tex_to_doc("\\section{About}\n\\underline{Key} point\n");
    assert_eq!(doc.section("About").unwrap().free_text(), ["**Key** point"]);
}

#[test]
fn test_links_and_superscripts() {
    let doc = tex_to_doc(
        "\\section{About}\nSee \\href{https://example.org}{my site}\n1\\textsuperscript{st} and 2$^{nd}$\n",
    );
    assert_eq!(
        doc.section("About").unwrap().free_text(),
        ["See [my site](https://example.org)", "1^st^ and 2^nd^"]
    );
}

#[test]
fn test_empty_arguments_shift_fields() {
    let doc = tex_to_doc("\\section{Education}\n\\cventry{2018}{Intern}{}{Madrid}{}{Built things}\n");
    let Some(Record::Entry(entry)) = doc.section("Education").unwrap().record("Intern") else {
        panic!("Expected an entry");
    };
    assert_eq!(
        entry.fields,
        EntryFields::Education {
            location: "Madrid".into(),
            extras: vec![],
        }
    );
    assert_eq!(entry.description, Description::Text("Built things".into()));
}

#[test]
fn test_short_course_fails_the_whole_run() {
    let err = LatexFormat::default()
        .parse("\\section{Cursos y Congresos}\n\\cventry{2019}{School}{}{}{}{}\n")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Line 2: course entry needs at least 4 non-empty arguments, found 2"
    );
    assert!(matches!(err, FormatError::MissingArguments { line: 2, .. }));
}

#[test]
fn test_reopened_section_replaces_content() {
    let doc = tex_to_doc(
        "\\section{Awards}\n\\cventry{2020}{Old}{Here}{Text}\n\\section{Skills}\nRust\n\\section{Awards}\n\\cventry{2021}{New}{There}{Text}\n",
    );
    assert_eq!(doc.sections.len(), 2);
    assert_eq!(doc.sections[0].name, "Awards");
    let awards = doc.section("Awards").unwrap();
    assert!(awards.record("Old").is_none());
    assert!(awards.record("New").is_some());
}
