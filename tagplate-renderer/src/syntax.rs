//! Text passes over a template body.
//!
//! | Construct                | Pattern                                  |
//! |--------------------------|------------------------------------------|
//! | Block comment            | `/* ... */` (non-greedy, spans lines)    |
//! | Line comment             | `//` to end of line, unless after `:`    |
//! | Conditional block        | `[?if TAG]body[?fi]` (non-greedy)        |
//! | Substitution tag         | `[@name]`                                |
//!
//! These are regex rewrites, not a parser: conditionals do not nest and
//! comment markers inside quoted text are still comments.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| compile(r"(?s)/\*.*?\*/"));

// `regex` has no look-behind, so the guard character is captured and put back.
static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| compile(r"(^|[^:])//.*"));

static IF_BLOCK: Lazy<Regex> =
    Lazy::new(|| compile(r"(?s)\[\?if (?P<tag>[A-Za-z0-9_]+)\](?P<text>.*?)\[\?fi\]"));

static LEFTOVER_TAG: Lazy<Regex> = Lazy::new(|| compile(r"\[@[A-Za-z0-9_]+\]"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern must compile")
}

/// Run every pass, in order, over an in-memory template body.
pub fn render_source(source: &str, values: &BTreeMap<String, String>) -> String {
    let text = strip_comments(source);
    let text = resolve_conditionals(&text, values);
    let text = substitute_tags(&text, values);
    strip_leftover_tags(&text)
}

/// Remove `/* */` blocks, then `//` line comments not preceded by `:`.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, "");
    LINE_COMMENT.replace_all(&without_blocks, "${1}").into_owned()
}

/// Empty string and `"0"` are falsy, as is an absent tag.
pub fn is_truthy(value: Option<&str>) -> bool {
    !matches!(value, None | Some("") | Some("0"))
}

/// Keep the body of each `[?if TAG]...[?fi]` whose tag is truthy; drop the rest.
pub fn resolve_conditionals(text: &str, values: &BTreeMap<String, String>) -> String {
    IF_BLOCK
        .replace_all(text, |caps: &Captures<'_>| {
            let tag = &caps["tag"];
            if is_truthy(values.get(tag).map(String::as_str)) {
                caps["text"].to_owned()
            } else {
                String::new()
            }
        })
        .into_owned()
}

/// Literal `[@key]` → value replacement for every entry.
pub fn substitute_tags(text: &str, values: &BTreeMap<String, String>) -> String {
    values.iter().fold(text.to_owned(), |acc, (key, value)| {
        acc.replace(&format!("[@{key}]"), value)
    })
}

/// Drop any `[@name]` tag that no value filled in.
pub fn strip_leftover_tags(text: &str) -> String {
    LEFTOVER_TAG.replace_all(text, "").into_owned()
}
