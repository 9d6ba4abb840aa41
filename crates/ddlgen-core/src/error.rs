//! Error types

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by parsing and generation.
///
/// Unparseable column segments and malformed enum items are not errors:
/// they are dropped silently (with a `tracing::debug!` event) and never
/// reach the caller. Only the absence of any `CREATE TABLE` statement is
/// fatal for a parse call.
#[derive(Debug, Error, Diagnostic)]
pub enum DdlError {
    #[error("no CREATE TABLE statement found in the input")]
    #[diagnostic(
        code(ddlgen::no_table_found),
        help("expected at least one semicolon-terminated `CREATE TABLE name (...);` statement")
    )]
    NoTableFound,

    #[error("failed to create output directory {}", .path.display())]
    #[diagnostic(code(ddlgen::create_dir_failed))]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write generated file {}", .path.display())]
    #[diagnostic(code(ddlgen::write_failed))]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
