use std::{borrow::Cow, sync::OnceLock};

use regex::Regex;

/// Folds runs of blank lines (and the spaces around line breaks) into a single `\n`.
pub fn collapse_line_breaks<'a>(s: &'a str) -> Cow<'a, str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"[ \t\u{00A0}]*\n\s*").expect("regex should be valid"));
    let out: Cow<'a, str> = Regex::replace_all(re, s, "\n");
    out
}
