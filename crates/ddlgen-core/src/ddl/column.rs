//! Column segment parsing: name/type decomposition, type normalization,
//! and DEFAULT value coercion

use std::sync::LazyLock;

use regex::Regex;

use crate::ddl::enums;
use crate::schema::{Column, ColumnType, DefaultValue};

static COLUMN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)^[`"]?([a-z_][a-z0-9_]*)[`"]?\s+([a-z]+(?:\s*\([^)]*\))?(?:\s+unsigned)?)\s*(.*)$"#)
        .expect("valid regex")
});
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bcomment\s+'([^']*)'").expect("valid regex"));
static NOT_NULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bnot\s+null\b").expect("valid regex"));
static AUTO_INCREMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bauto_increment\b").expect("valid regex"));
static PRIMARY_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bprimary\s+key\b").expect("valid regex"));
static DEFAULT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdefault\s+(\S+)").expect("valid regex"));
static TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)\s*(?:\(([^)]*)\))?").expect("valid regex"));
static INTEGER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+$").expect("valid regex"));
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+\.\d+$").expect("valid regex"));

/// Parse one non-constraint segment into a [`Column`].
///
/// Returns `None` when the segment does not match at minimum `name + type`;
/// the caller drops such segments without raising an error.
pub(crate) fn parse_column(segment: &str) -> Option<Column> {
    let caps = COLUMN_RE.captures(segment.trim())?;
    let name = caps[1].to_string();
    let raw_type = caps[2].trim().to_string();
    let trailing = caps.get(3).map_or("", |m| m.as_str());

    // Pull the COMMENT clause out first so comment text cannot masquerade
    // as a constraint keyword.
    let (comment, trailing) = extract_comment(trailing);

    let mut col = Column::new(name, normalize_type(&raw_type));
    col.nullable = !NOT_NULL_RE.is_match(&trailing);
    col.auto_increment = AUTO_INCREMENT_RE.is_match(&trailing);
    col.is_primary_key = PRIMARY_KEY_RE.is_match(&trailing);
    col.default = coerce_default(&trailing);
    col.enum_values = enums::parse_enum_comment(&comment);
    col.comment = comment;
    Some(col)
}

/// Split the trailing constraint text into (comment, remainder).
fn extract_comment(trailing: &str) -> (String, String) {
    match COMMENT_RE.captures(trailing) {
        Some(caps) => {
            let whole = caps.get(0).expect("whole match is always present");
            let comment = caps[1].to_string();
            let mut rest = String::with_capacity(trailing.len());
            rest.push_str(&trailing[..whole.start()]);
            rest.push_str(&trailing[whole.end()..]);
            (comment, rest)
        }
        None => (String::new(), trailing.to_string()),
    }
}

/// Normalize a raw type token into name + verbatim length spec.
///
/// Tokens without a leading alphabetic type name degrade to the verbatim
/// upper-cased token with no length. The untouched user text is always
/// kept in `original`.
pub(crate) fn normalize_type(raw: &str) -> ColumnType {
    let original = raw.trim().to_string();
    let upper = original.to_uppercase();
    match TYPE_RE.captures(&upper) {
        Some(caps) => ColumnType {
            name: caps[1].to_string(),
            length: caps.get(2).map(|m| m.as_str().to_string()),
            original,
        },
        None => ColumnType {
            name: upper,
            length: None,
            original,
        },
    }
}

/// Extract and coerce a `DEFAULT <token>` value from trailing text.
///
/// The token is the run of non-whitespace characters after `DEFAULT`, so a
/// quoted default containing a space is truncated at the space.
pub(crate) fn coerce_default(trailing: &str) -> Option<DefaultValue> {
    let caps = DEFAULT_RE.captures(trailing)?;
    let token = strip_quotes(caps.get(1).expect("token capture is always present").as_str());

    if token.eq_ignore_ascii_case("current_timestamp") {
        return Some(DefaultValue::CurrentTimestamp);
    }
    if INTEGER_RE.is_match(token) {
        if let Ok(n) = token.parse::<i64>() {
            return Some(DefaultValue::Integer(n));
        }
    }
    if DECIMAL_RE.is_match(token) {
        if let Ok(f) = token.parse::<f64>() {
            return Some(DefaultValue::Float(f));
        }
    }
    Some(DefaultValue::Text(token.to_string()))
}

/// Strip a single pair of matching surrounding quote characters.
fn strip_quotes(token: &str) -> &str {
    let bytes = token.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if first == bytes[bytes.len() - 1] && matches!(first, b'\'' | b'"' | b'`') {
            return &token[1..token.len() - 1];
        }
    }
    token
}
