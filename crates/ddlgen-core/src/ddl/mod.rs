//! DDL parsing engine - extracts schema models from CREATE TABLE text

mod column;
mod enums;
mod fields;
mod statement;

pub use enums::ENUM_MARKER;

use crate::error::DdlError;
use crate::schema::Table;

/// Parse every `CREATE TABLE` statement in the input into a [`Table`],
/// in source order.
///
/// Each statement is parsed independently of the others. Table-level
/// constraint lines are discarded, and column segments that do not match
/// at minimum `name + type` are dropped without error. The only fatal
/// condition is an input with no `CREATE TABLE` statement at all.
pub fn parse_tables(sql: &str) -> Result<Vec<Table>, DdlError> {
    let statements = statement::extract_tables(sql);
    if statements.is_empty() {
        return Err(DdlError::NoTableFound);
    }

    let mut tables = Vec::with_capacity(statements.len());
    for stmt in statements {
        let mut table = Table::new(stmt.name, stmt.comment);
        for segment in fields::split_fields(&stmt.body) {
            if fields::is_table_constraint(&segment) {
                tracing::debug!(table = %table.name, segment = %segment, "discarding table-level constraint");
                continue;
            }
            match column::parse_column(&segment) {
                Some(col) => table.add_column(col),
                None => {
                    tracing::debug!(table = %table.name, segment = %segment, "dropping unparseable column segment");
                }
            }
        }
        tables.push(table);
    }
    Ok(tables)
}
