//! Inline markup conversion between LaTeX commands and lightweight markup.
//!
//! | LaTeX                         | Lightweight   |
//! |-------------------------------|---------------|
//! | `\textbf{x}`                  | `**x**`       |
//! | `\textit{x}`                  | `*x*`         |
//! | `\underline{x}`               | `**x**`       |
//! | `$^{x}$`, `\textsuperscript{x}` | `^x^`       |
//! | `\href{url}{text}`            | `[text](url)` |
//!
//! Underline has no lightweight counterpart and is folded into bold, so
//! `to_latex(&to_lightweight(s))` turns underlines into `\textbf`. Neither
//! direction is brace balanced: arguments end at the first closing brace.

use once_cell::sync::Lazy;
use regex::Regex;

static HREF: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\href\{(.*?)\}\{(.*?)\}").unwrap());
static TEXTBF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\textbf\{(.*?)\}").unwrap());
static TEXTIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\textit\{(.*?)\}").unwrap());
static UNDERLINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\underline\{(.*?)\}").unwrap());
static MATH_SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$\^\{(.*?)\}\$").unwrap());
static TEXTSUPERSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\textsuperscript\{(.*?)\}").unwrap());

static MD_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^\)]+)\)").unwrap());
static MD_BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^\*]+)\*\*").unwrap());
static MD_SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^([^\^]+)\^").unwrap());

/// LaTeX → lightweight markup. Applied to every input line before it is
/// classified, so entry arguments never contain formatting braces.
pub fn to_lightweight(latex: &str) -> String {
    let text = HREF.replace_all(latex, "[$2]($1)");
    let text = TEXTBF.replace_all(&text, "**$1**");
    let text = TEXTIT.replace_all(&text, "*$1*");
    let text = UNDERLINE.replace_all(&text, "**$1**");
    let text = MATH_SUPERSCRIPT.replace_all(&text, "^$1^");
    let text = TEXTSUPERSCRIPT.replace_all(&text, "^$1^");
    text.into_owned()
}

/// Lightweight markup → LaTeX. Links first, then bold, then single-star
/// italics (never matching a star that touches another star), then
/// superscript.
pub fn to_latex(text: &str) -> String {
    let text = MD_LINK.replace_all(text, r"\href{$2}{$1}");
    let text = MD_BOLD.replace_all(&text, r"\textbf{$1}");
    let text = replace_italics(&text);
    MD_SUPERSCRIPT
        .replace_all(&text, r"$$^{$1}$$")
        .into_owned()
}

/// `*x*` → `\textit{x}` where neither star is adjacent to another star and
/// `x` is a non-empty run without stars.
fn replace_italics(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let is_star = |i: Option<usize>| i.and_then(|i| chars.get(i)).is_some_and(|c| *c == '*');

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '*' && !is_star(i.checked_sub(1)) && !is_star(Some(i + 1)) {
            let close = chars[i + 1..]
                .iter()
                .position(|c| *c == '*')
                .map(|offset| i + 1 + offset);
            if let Some(close) = close {
                if close > i + 1 && !is_star(Some(close + 1)) {
                    out.push_str(r"\textit{");
                    out.extend(&chars[i + 1..close]);
                    out.push('}');
                    i = close + 1;
                    continue;
                }
            }
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}
