//! ddlgen-core: schema extraction from SQL CREATE TABLE text
//!
//! This library parses MySQL-style `CREATE TABLE` statements into an
//! immutable schema model and provides the downstream interfaces that
//! code/document generators consume: type mapping, naming conversion,
//! document rendering, and file emission.

pub mod ddl;
pub mod error;
pub mod generate;
pub mod schema;

pub use ddl::parse_tables;
pub use error::DdlError;
pub use schema::{Column, ColumnType, DefaultValue, EnumValue, Table};
