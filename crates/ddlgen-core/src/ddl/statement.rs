//! CREATE TABLE statement extraction

use std::sync::LazyLock;

use regex::Regex;

static BLOCK_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex"));
static LINE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--[^\r\n]*").expect("valid regex"));
static HEAD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\bcreate\s+table\s+(?:if\s+not\s+exists\s+)?[`"]?([A-Za-z0-9_$.]+)[`"]?\s*\("#)
        .expect("valid regex")
});
static TABLE_COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)comment\s*=?\s*'([^']*)'").expect("valid regex"));

/// One located `CREATE TABLE` block, before field-list splitting
pub(crate) struct RawTable {
    pub name: String,
    pub comment: String,
    pub body: String,
}

/// Remove block and line comments.
///
/// Removal is a simple non-overlapping pass; comment markers inside quoted
/// literals are not special-cased.
pub(crate) fn strip_comments(sql: &str) -> String {
    let without_blocks = BLOCK_COMMENT_RE.replace_all(sql, "");
    LINE_COMMENT_RE.replace_all(&without_blocks, "").into_owned()
}

/// Locate every `CREATE TABLE <name> ( <body> ) [COMMENT = '<text>'] ;`
/// block in the input, in source order.
pub(crate) fn extract_tables(sql: &str) -> Vec<RawTable> {
    let text = strip_comments(sql);
    let mut tables = Vec::new();
    let mut at = 0;

    while let Some(caps) = HEAD_RE.captures(&text[at..]) {
        let head = caps.get(0).expect("whole match is always present");
        let name = caps
            .get(1)
            .expect("name capture is always present")
            .as_str()
            .to_string();

        // The match ends just past the opening paren; scan for its partner.
        let open = at + head.end();
        let Some(close) = find_body_end(&text, open) else {
            break;
        };
        let body = text[open..close].to_string();

        let after = close + 1;
        let stmt_end = find_statement_end(&text, after);
        let tail = match stmt_end {
            Some(end) => &text[after..end],
            None => &text[after..],
        };
        let comment = TABLE_COMMENT_RE
            .captures(tail)
            .map(|c| c[1].to_string())
            .unwrap_or_default();

        tables.push(RawTable {
            name,
            comment,
            body,
        });

        at = match stmt_end {
            Some(end) => end + 1,
            None => text.len(),
        };
    }

    tables
}

/// Find the `;` terminating the statement, quote-aware so a table comment
/// containing a semicolon does not end the statement early.
fn find_statement_end(text: &str, from: usize) -> Option<usize> {
    let mut quote: Option<char> = None;

    for (i, ch) in text[from..].char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                ';' => return Some(from + i),
                _ => {}
            },
        }
    }
    None
}

/// Find the `)` closing the table body, depth- and quote-aware.
/// `open` is the byte offset just past the opening paren.
fn find_body_end(text: &str, open: usize) -> Option<usize> {
    let mut depth = 1u32;
    let mut quote: Option<char> = None;

    for (i, ch) in text[open..].char_indices() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None => match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(open + i);
                    }
                }
                _ => {}
            },
        }
    }
    None
}
