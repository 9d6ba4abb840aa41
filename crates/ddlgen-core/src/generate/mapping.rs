//! Fixed mapping from normalized SQL type names to target types

use serde::{Deserialize, Serialize};

/// Target-side primitive/object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    Boolean,
    Integer,
    Long,
    Double,
    Decimal,
    String,
    Date,
    Time,
    DateTime,
}

impl TargetType {
    pub fn display_name(&self) -> &'static str {
        match self {
            TargetType::Boolean => "boolean",
            TargetType::Integer => "integer",
            TargetType::Long => "long",
            TargetType::Double => "double",
            TargetType::Decimal => "decimal",
            TargetType::String => "string",
            TargetType::Date => "date",
            TargetType::Time => "time",
            TargetType::DateTime => "datetime",
        }
    }
}

/// Map a normalized SQL type name to its target type.
/// Unmapped types fall back to `String`.
pub fn map_type(sql_name: &str) -> TargetType {
    match sql_name.to_uppercase().as_str() {
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "INTEGER" => TargetType::Integer,
        "BIGINT" => TargetType::Long,
        "DECIMAL" | "NUMERIC" => TargetType::Decimal,
        "FLOAT" | "DOUBLE" | "REAL" => TargetType::Double,
        "CHAR" | "VARCHAR" | "TINYTEXT" | "TEXT" | "MEDIUMTEXT" | "LONGTEXT" => TargetType::String,
        "TIMESTAMP" | "DATETIME" => TargetType::DateTime,
        "DATE" => TargetType::Date,
        "TIME" => TargetType::Time,
        "BOOLEAN" | "BOOL" | "BIT" => TargetType::Boolean,
        _ => TargetType::String,
    }
}
