//! Import tests for the YAML format (YAML → Document)

use cvtex_babel::format::Format;
use cvtex_babel::formats::{LatexFormat, YamlFormat};
use cvtex_babel::ir::nodes::{Description, Document, EntryFields, Record};
use cvtex_babel::FormatError;
use insta::assert_snapshot;

fn yaml_to_doc(yaml: &str) -> Document {
    YamlFormat::default().parse(yaml).expect("Should parse YAML")
}

fn yaml_to_tex(yaml: &str) -> String {
    LatexFormat::default()
        .serialize(&yaml_to_doc(yaml))
        .expect("Should serialize to LaTeX")
}

#[test]
fn test_full_section_to_latex() {
    let tex = yaml_to_tex(
        r#"
Education:
  free_text:
  - Studied at **two** universities
  BSc Physics:
    date: 2020
    location: Dept. of Physics, State University
    description:
    - Graduated with honors
    - Thesis on optics
  Exchange:
    date: 2019
    location: Berlin
    description: One semester
"#,
    );
    assert_snapshot!(tex, @r###"
    \section{Education}
    Studied at \textbf{two} universities
    \cventry{2020}{BSc Physics}{Dept. of Physics}{State University}{}{Graduated with honors \\
    Thesis on optics}
    \cventry{2019}{Exchange}{}{Berlin}{}{One semester}
    "###);
}

#[test]
fn test_course_language_prefix_follows_label_language() {
    let tex = yaml_to_tex(
        r#"
Cursos y Congresos:
  Escuela de Verano:
    date: 2019
    extension: 40 horas
    location: Granada
    language: Inglés
    description: []
Participation in Conferences and Schools:
  Summer School:
    date: 2019
    extension: 40 hours
    location: Granada
    language: Spanish
    description: []
"#,
    );
    assert!(tex.contains("\\cventry{2019}{Escuela de Verano}{40 horas}{Granada}{Idioma: Inglés}{}"));
    assert!(tex.contains("\\cventry{2019}{Summer School}{40 hours}{Granada}{Language: Spanish}{}"));
}

#[test]
fn test_transcript_detected_from_any_row() {
    let tex = yaml_to_tex(
        r#"
Notas:
  free_text:
  - Ignored in a transcript
  Álgebra:
    grade: 9
  Física:
    grade: 7
    duration: Anual
"#,
    );
    assert_eq!(
        tex,
        "\\title{University Transcript}\n\\section{Notas}\n\nÁlgebra & 9 \\\\\nFísica & 7 & Anual \\\\\n\n"
    );
}

#[test]
fn test_legacy_list_layout() {
    let doc = yaml_to_doc(
        r#"
Production:
  Publications:
  - title: Fast Spectra
    date: 2021
    journal: Journal of Optics
    authors: A. Example
    description: [DOI 1]
"#,
    );
    let publications = doc
        .section("Production")
        .unwrap()
        .subsection("Publications")
        .unwrap();
    let Some(Record::Entry(entry)) = publications.record("Fast Spectra") else {
        panic!("Expected a publication");
    };
    assert_eq!(
        entry.fields,
        EntryFields::Publication {
            journal: "Journal of Optics".into(),
            authors: "A. Example".into(),
        }
    );
    assert_eq!(entry.description, Description::Lines(vec!["DOI 1".into()]));
}

#[test]
fn test_missing_fields_default_to_empty() {
    let doc = yaml_to_doc("Awards:\n  Prize:\n    date: 2022\n");
    let Some(Record::Entry(entry)) = doc.section("Awards").unwrap().record("Prize") else {
        panic!("Expected an entry");
    };
    assert_eq!(
        entry.fields,
        EntryFields::Generic {
            location: String::new(),
            extras: vec![],
        }
    );
    assert_eq!(entry.description, Description::default());
}

#[test]
fn test_unquoted_colon_is_a_syntax_error() {
    let err = YamlFormat::default()
        .parse("Education:\n  BSc: Physics: honors\n")
        .unwrap_err();
    match err {
        FormatError::YamlSyntax(msg) => assert!(!msg.is_empty()),
        other => panic!("Expected a YAML syntax error, found {other:?}"),
    }
}
