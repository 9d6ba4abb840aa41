//! Field-list splitting and constraint classification

/// Segment prefixes that mark a table-level constraint line.
/// A keyword prefix always wins, even for a column literally named like one.
const CONSTRAINT_PREFIXES: [&str; 7] = [
    "PRIMARY KEY",
    "FOREIGN KEY",
    "UNIQUE KEY",
    "KEY ",
    "INDEX ",
    "CONSTRAINT",
    "CHECK ",
];

/// Splitter state: paren depth plus the quote char that opened the current
/// literal, if any. The same char both opens and closes a literal.
struct SplitState {
    depth: u32,
    quote: Option<char>,
}

/// Split a table body into trimmed definition segments.
///
/// A comma is a boundary only at depth 0 outside a quoted literal, so
/// commas inside `DECIMAL(10,2)` groups or quoted defaults stay inside
/// their segment. A trailing partial segment is included. Unbalanced
/// parens or quotes leave the segment boundaries undefined.
pub(crate) fn split_fields(body: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut state = SplitState {
        depth: 0,
        quote: None,
    };

    for ch in body.chars() {
        match state.quote {
            Some(q) if ch == q => {
                state.quote = None;
                current.push(ch);
            }
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' | '`' => {
                    state.quote = Some(ch);
                    current.push(ch);
                }
                '(' => {
                    state.depth += 1;
                    current.push(ch);
                }
                ')' => {
                    state.depth = state.depth.saturating_sub(1);
                    current.push(ch);
                }
                ',' if state.depth == 0 => push_segment(&mut segments, &mut current),
                _ => current.push(ch),
            },
        }
    }
    push_segment(&mut segments, &mut current);

    segments
}

fn push_segment(segments: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        segments.push(trimmed.to_string());
    }
    current.clear();
}

/// Classify a segment as a table-level constraint (to be discarded) or a
/// column definition.
pub(crate) fn is_table_constraint(segment: &str) -> bool {
    let upper = segment.trim_start().to_uppercase();
    CONSTRAINT_PREFIXES.iter().any(|p| upper.starts_with(p))
}
