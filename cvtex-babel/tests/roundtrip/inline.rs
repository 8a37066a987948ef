//! Property tests for the inline markup converter.

use cvtex_babel::common::inline::{to_latex, to_lightweight};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9]{1,10}"
}

fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ,.;:()-]{0,40}"
}

/// One LaTeX inline construct wrapped around a word.
fn latex_markup() -> impl Strategy<Value = String> {
    (word(), "[a-z]{1,8}").prop_flat_map(|(word, host)| {
        prop_oneof![
            Just(format!("\\textbf{{{word}}}")),
            Just(format!("\\textit{{{word}}}")),
            Just(format!("\\underline{{{word}}}")),
            Just(format!("$^{{{word}}}$")),
            Just(format!("\\textsuperscript{{{word}}}")),
            Just(format!("\\href{{https://{host}.org}}{{{word}}}")),
        ]
    })
}

/// Markup and plain text interleaved.
fn latex_line() -> impl Strategy<Value = String> {
    prop::collection::vec((plain_text(), latex_markup()), 0..5).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(text, markup)| format!("{text}{markup}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn lightweight_conversion_is_idempotent(line in latex_line()) {
        let once = to_lightweight(&line);
        prop_assert!(!once.contains('\\'));
        prop_assert_eq!(to_lightweight(&once), once);
    }

    #[test]
    fn plain_text_is_untouched(text in plain_text()) {
        prop_assert_eq!(to_latex(&text), text.clone());
        prop_assert_eq!(to_lightweight(&text), text);
    }

    #[test]
    fn lightweight_markup_survives_latex(
        bold in word(),
        italic in word(),
        sup in word(),
        label in word(),
        host in "[a-z]{1,8}",
    ) {
        let text = format!("**{bold}** then *{italic}*, 1^{sup}^ and [{label}](https://{host}.org)");
        let latex = to_latex(&text);

        prop_assert!(!latex.contains('*'));
        prop_assert_eq!(to_lightweight(&latex), text);
    }

    #[test]
    fn underline_collapses_into_bold(word in word()) {
        let latex = format!("\\underline{{{word}}}");
        prop_assert_eq!(to_latex(&to_lightweight(&latex)), format!("\\textbf{{{word}}}"));
    }
}
