//! Enum extraction from column comments
//!
//! A comment like `状态【enum】:1-启用,2-禁用.` carries an embedded
//! value/label enumeration. The marker substring triggers extraction; the
//! item list runs to the first sentence terminator or line break, items are
//! comma-separated (ASCII or fullwidth), and each item is
//! `<integer><dash><label>` with ASCII or fullwidth dashes.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::EnumValue;

/// Marker substring meaning "this column is an enumeration"
pub const ENUM_MARKER: &str = "【enum】";

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*[-－](.+)$").expect("valid regex"));

/// Extract the value/label pairs embedded in a comment.
///
/// Returns `None` when the marker is absent, and also when the marker is
/// present but no item matched the grammar; callers can rely on a returned
/// list being non-empty. Malformed items are skipped without error.
pub(crate) fn parse_enum_comment(comment: &str) -> Option<Vec<EnumValue>> {
    let rest = comment.split_once(ENUM_MARKER)?.1;
    let rest = rest.trim_start_matches([':', '：', ' ']);

    let end = rest.find(['.', '。', '\n', '\r']).unwrap_or(rest.len());
    let list = &rest[..end];

    let mut values = Vec::new();
    for item in list.split([',', '，']) {
        let Some(caps) = ITEM_RE.captures(item) else {
            tracing::debug!(item = %item, "skipping malformed enum item");
            continue;
        };
        if let Ok(value) = caps[1].parse::<i32>() {
            values.push(EnumValue {
                value,
                label: caps[2].trim().to_string(),
            });
        }
    }

    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
