//! Schema model - the immutable output of a parse call

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A parsed table definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    /// Table comment, empty string if the DDL carried none
    pub comment: String,
    /// Columns in declaration order
    pub columns: IndexMap<String, Column>,
}

impl Table {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            columns: IndexMap::new(),
        }
    }

    /// Add a column, preserving declaration order
    pub fn add_column(&mut self, column: Column) {
        self.columns.insert(column.name.clone(), column);
    }

    /// Get a column by name
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        // Case-insensitive lookup
        self.columns
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Check if a column exists
    pub fn column_exists(&self, name: &str) -> bool {
        self.get_column(name).is_some()
    }

    /// Get all column names in declaration order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|s| s.as_str()).collect()
    }
}

/// A parsed column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub data_type: ColumnType,
    pub nullable: bool,
    pub default: Option<DefaultValue>,
    pub auto_increment: bool,
    pub is_primary_key: bool,
    /// Column comment, empty string if absent
    pub comment: String,
    /// Present only when the comment carried the enum marker and at least
    /// one item matched the grammar; never `Some(vec![])`
    pub enum_values: Option<Vec<EnumValue>>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            default: None,
            auto_increment: false,
            is_primary_key: false,
            comment: String::new(),
            enum_values: None,
        }
    }
}

/// Normalized column type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnType {
    /// Upper-cased type name, e.g. `VARCHAR`
    pub name: String,
    /// Parenthesized length/precision spec kept verbatim, e.g. `10,2`
    pub length: Option<String>,
    /// The raw type token as the user wrote it
    pub original: String,
}

/// Coerced DEFAULT value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    Integer(i64),
    Float(f64),
    Text(String),
    /// `DEFAULT CURRENT_TIMESTAMP`, distinguished from the literal string
    CurrentTimestamp,
}

/// One value/label pair extracted from an enum-marked comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub value: i32,
    pub label: String,
}
