//! Markdown schema document rendering

use crate::generate::{mapping, naming};
use crate::schema::{DefaultValue, Table};

/// Render one table as a Markdown schema document.
///
/// `generated_at` is caller-supplied so output is reproducible; no clock
/// is read here.
pub fn render_table_doc(table: &Table, generated_at: Option<&str>) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n", table.name));
    if !table.comment.is_empty() {
        out.push_str(&format!("\n> {}\n", table.comment));
    }
    if let Some(ts) = generated_at {
        out.push_str(&format!("\nGenerated at: {}\n", ts));
    }

    out.push_str("\n| Column | Property | Type | SQL Type | Nullable | Default | Comment |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for col in table.columns.values() {
        let target = mapping::map_type(&col.data_type.name);
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            col.name,
            naming::to_camel_case(&col.name),
            target.display_name(),
            col.data_type.original,
            if col.nullable { "yes" } else { "no" },
            col.default.as_ref().map(render_default).unwrap_or_default(),
            col.comment,
        ));
    }

    for col in table.columns.values() {
        if let Some(values) = &col.enum_values {
            out.push_str(&format!(
                "\n## {} values\n\n| Value | Label |\n|---|---|\n",
                naming::to_camel_case(&col.name)
            ));
            for v in values {
                out.push_str(&format!("| {} | {} |\n", v.value, v.label));
            }
        }
    }

    out
}

/// File name for a table's schema document.
pub fn doc_file_name(table: &Table) -> String {
    format!("{}.md", naming::to_pascal_case(&table.name))
}

fn render_default(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Integer(n) => n.to_string(),
        DefaultValue::Float(f) => f.to_string(),
        DefaultValue::Text(s) => format!("'{}'", s),
        DefaultValue::CurrentTimestamp => "CURRENT_TIMESTAMP".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ddl::parse_tables;

    #[test]
    fn test_render_is_reproducible() {
        let tables = parse_tables(
            "CREATE TABLE user_account (id BIGINT AUTO_INCREMENT PRIMARY KEY, \
             status TINYINT NOT NULL DEFAULT 1 COMMENT '状态【enum】:1-启用,2-禁用.') \
             COMMENT='账户';",
        )
        .unwrap();
        let doc = render_table_doc(&tables[0], Some("2024-01-01 00:00:00"));

        assert!(doc.starts_with("# user_account\n"));
        assert!(doc.contains("> 账户"));
        assert!(doc.contains("Generated at: 2024-01-01 00:00:00"));
        assert!(doc.contains("| id | id | long | BIGINT |"));
        assert!(doc.contains("## status values"));
        assert!(doc.contains("| 1 | 启用 |"));

        // Same input, same timestamp, identical output
        assert_eq!(doc, render_table_doc(&tables[0], Some("2024-01-01 00:00:00")));
    }

    #[test]
    fn test_doc_file_name() {
        let tables = parse_tables("CREATE TABLE user_account (id INT);").unwrap();
        assert_eq!(doc_file_name(&tables[0]), "UserAccount.md");
    }
}
