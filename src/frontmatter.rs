//! Frontmatter metadata block parsing.
//!
//! A post may begin with a `---` delimited metadata block of simple
//! `key: value` lines:
//!
//! ```text
//! ---
//! title: First Post
//! tags: [rust, blog]
//! draft: false
//! # ignored comment
//! ---
//! body text
//! ```
//!
//! Only a restricted subset of YAML is supported: one scalar per line,
//! single-line bracket arrays, booleans, and null. Everything else keeps
//! its surface form - `42` and `2025-10-19` stay strings.

use serde_json::{Map, Value};

/// Decoded metadata mapping. Keeps key insertion order (`preserve_order`).
pub type Metadata = Map<String, Value>;

/// Split and decode a post into `(metadata, body)`.
///
/// If the content does not start with a recognizable metadata block the
/// metadata is empty and the body is the content unchanged, without any
/// trimming. Otherwise the body is the text after the closing delimiter,
/// trimmed of surrounding whitespace.
pub fn parse(content: &str) -> (Metadata, String) {
    match split(content) {
        Some((meta_text, body)) => (decode(meta_text), body.trim().to_string()),
        None => (Metadata::new(), content.to_string()),
    }
}

/// Check whether a line is a `---` delimiter (trailing whitespace allowed).
fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Detect the metadata block.
///
/// Returns `(metadata_text, raw_body)` when the first line of `content`
/// is an opening delimiter and a later line is a closing delimiter
/// followed by a newline. The closing delimiter is only recognized from
/// the third line on: the newline preceding it belongs to the metadata
/// text, so an immediately adjacent `---` pair is not a block.
fn split(content: &str) -> Option<(&str, &str)> {
    let opening_len = content.find('\n')? + 1;
    if !is_delimiter(&content[..opening_len]) {
        return None;
    }

    let mut line_start = opening_len;
    let mut seen_metadata_line = false;
    for line in content[opening_len..].split_inclusive('\n') {
        let line_end = line_start + line.len();
        if seen_metadata_line && line.ends_with('\n') && is_delimiter(line) {
            return Some((&content[opening_len..line_start], &content[line_end..]));
        }
        seen_metadata_line = true;
        line_start = line_end;
    }

    None
}

/// Decode metadata text line by line into a mapping.
///
/// Blank lines, `#` comments and lines without a `:` separator are
/// ignored silently. Only the first `:` splits, so values may themselves
/// contain colons. Later occurrences of a key overwrite earlier ones.
fn decode(meta_text: &str) -> Metadata {
    let mut meta = Metadata::new();

    for line in meta_text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            meta.insert(key.trim().to_string(), decode_value(value.trim()));
        }
    }

    meta
}

/// Infer a typed value from its surface syntax.
///
/// Priority: bracket array, boolean, null, plain string. There is no
/// numeric coercion and no quote stripping.
pub fn decode_value(value: &str) -> Value {
    if let Some(interior) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if interior.trim().is_empty() {
            return Value::Array(Vec::new());
        }
        return Value::Array(
            interior
                .split(',')
                .map(|item| Value::String(item.trim().to_string()))
                .collect(),
        );
    }
    if value.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if value.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if value.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    Value::String(value.to_string())
}
