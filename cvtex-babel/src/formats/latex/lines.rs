//! Line cursor and argument tokenizer for the LaTeX CV dialect.
//!
//! The cursor materialises the source once and hands out cleaned lines
//! (trimmed, inline markup already converted to the lightweight form). The
//! classifier reads one line at a time; entry commands pull their
//! continuation lines through the same cursor, so there is no lookahead
//! outside of it.

use crate::common::inline::to_lightweight;

/// Trailing token that continues an argument list on the next line.
pub const CONTINUATION_MARKER: &str = "\\\\";

/// A cleaned source line with its 1-based line number.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

#[derive(Debug)]
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    position: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines().collect(),
            position: 0,
        }
    }

    /// Advance and return the next cleaned line.
    pub fn next_line(&mut self) -> Option<Line> {
        let raw = self.lines.get(self.position)?;
        self.position += 1;
        Some(Line {
            number: self.position,
            text: to_lightweight(raw.trim()),
        })
    }

    /// The next raw line, without advancing.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.position).copied()
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.lines.len()
    }
}

/// `\name...` → `name` (ASCII letters after the backslash).
pub fn command_name(text: &str) -> Option<&str> {
    let rest = text.strip_prefix('\\')?;
    let end = rest
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Split brace-delimited arguments: every `{` opens an argument that runs to
/// the next `}` (or the end of the text). Nested braces are not balanced.
pub fn split_arguments(text: &str) -> Vec<String> {
    text.split('{')
        .skip(1)
        .map(|part| part.split('}').next().unwrap_or_default().to_string())
        .collect()
}

/// The first brace argument of a command line.
pub fn first_argument(text: &str) -> Option<String> {
    split_arguments(text).into_iter().next()
}

pub fn ends_with_continuation(text: &str) -> bool {
    text.trim_end().ends_with(CONTINUATION_MARKER)
}

pub fn strip_continuation(text: &str) -> &str {
    let trimmed = text.trim_end();
    trimmed
        .strip_suffix(CONTINUATION_MARKER)
        .map(str::trim_end)
        .unwrap_or(trimmed)
}

/// Collect the arguments of an entry command starting at `first`, consuming
/// continuation lines from `cursor` while the current line ends with the
/// continuation marker. Each continuation line contributes the text up to its
/// first closing brace as one argument; any braces after that are split as
/// further arguments. No empty-filtering happens here.
pub fn collect_arguments(first: &Line, cursor: &mut LineCursor<'_>) -> Vec<String> {
    let mut args = split_arguments(&first.text);
    let mut continued = ends_with_continuation(&first.text);
    strip_last(&mut args, continued);

    while continued {
        let Some(next) = cursor.next_line() else {
            break;
        };
        continued = ends_with_continuation(&next.text);
        match next.text.find('}') {
            Some(close) => {
                args.push(next.text[..close].to_string());
                args.extend(split_arguments(&next.text[close + 1..]));
            }
            None => args.push(next.text.clone()),
        }
        strip_last(&mut args, continued);
    }

    args.into_iter().map(|arg| arg.trim().to_string()).collect()
}

fn strip_last(args: &mut [String], continued: bool) {
    if !continued {
        return;
    }
    if let Some(last) = args.last_mut() {
        *last = strip_continuation(last).to_string();
    }
}
