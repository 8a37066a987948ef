//! Round trips that depend on where records sit in the LaTeX layout.

use cvtex_babel::format::Format;
use cvtex_babel::formats::{LatexFormat, YamlFormat};
use cvtex_babel::ir::nodes::{Description, Document, Entry, EntryFields, Record, SectionItem};
use cvtex_babel::transforms::{tex_to_yaml, yaml_to_tex};

fn latex_round_trip(doc: &Document) -> Document {
    let latex = LatexFormat::default();
    latex.parse(&latex.serialize(doc).unwrap()).unwrap()
}

#[test]
fn test_transcript_after_entry_section_keeps_entries() {
    let source = "\\section{Education}\n\
                  \\cventry{2020}{BSc Physics}{Dept}{Uni}{}{Honors}\n\
                  \\title{University Transcript}\n\
                  Calculus & 9 \\\\\n";

    let doc = LatexFormat::default().parse(source).unwrap();
    assert_eq!(latex_round_trip(&doc), doc);

    let back = yaml_to_tex(&tex_to_yaml(source).unwrap()).unwrap();
    assert!(back.contains("\\cventry{2020}{BSc Physics}{Dept}{Uni}{}{Honors}"));
    assert!(back.contains("\\section{University Transcript}\n\nCalculus & 9 \\\\"));
}

#[test]
fn test_section_record_after_subsection_stays_at_section_level() {
    let yaml = "Languages:\n  International Exams:\n    IELTS:\n      date: '2017'\n      description:\n      - Band 8\n  English:\n    level: C2\n";
    let doc = YamlFormat::default().parse(yaml).unwrap();

    let again = latex_round_trip(&doc);
    let languages = again.section("Languages").unwrap();
    assert!(matches!(languages.record("English"), Some(Record::Language(_))));
    let exams = languages.subsection("International Exams").unwrap();
    assert_eq!(exams.records.len(), 1);
    assert!(matches!(
        exams.record("IELTS"),
        Some(Record::Entry(Entry {
            fields: EntryFields::LanguageExam,
            ..
        }))
    ));
    assert!(matches!(languages.items[0], SectionItem::Record { .. }));

    let latex = LatexFormat::default();
    assert_eq!(
        latex.serialize(&again).unwrap(),
        latex.serialize(&doc).unwrap()
    );
}

fn education(location: &str, description: &[&str]) -> Document {
    let mut doc = Document::new();
    doc.open_section("Education").insert_record(
        "Intern",
        Record::Entry(Entry {
            date: "2018".into(),
            description: Description::Lines(description.iter().map(|d| d.to_string()).collect()),
            fields: EntryFields::Education {
                location: location.into(),
                extras: vec![],
            },
        }),
    );
    doc
}

fn intern(doc: &Document) -> Entry {
    match doc.section("Education").and_then(|s| s.record("Intern")) {
        Some(Record::Entry(entry)) => entry.clone(),
        other => panic!("expected an education entry, got {other:?}"),
    }
}

#[test]
fn test_education_location_without_comma_absorbs_first_fragment() {
    let entry = intern(&latex_round_trip(&education(
        "Madrid",
        &["Built things", "Shipped"],
    )));

    assert_eq!(
        entry.fields,
        EntryFields::Education {
            location: "Madrid, Built things".into(),
            extras: vec![],
        }
    );
    assert_eq!(entry.description, Description::Lines(vec!["Shipped".into()]));
}

#[test]
fn test_education_location_without_comma_single_fragment_becomes_text() {
    let entry = intern(&latex_round_trip(&education("Madrid", &["Built things"])));

    assert_eq!(
        entry.fields,
        EntryFields::Education {
            location: "Madrid".into(),
            extras: vec![],
        }
    );
    assert_eq!(entry.description, Description::Text("Built things".into()));
}
