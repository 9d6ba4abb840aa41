//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "ddlgen")]
#[command(author, version, about = "Schema document generator for SQL DDL")]
#[command(propagate_version = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse DDL files and emit one schema document per table
    Generate {
        /// DDL files to read
        files: Vec<PathBuf>,

        /// Directory containing DDL files (expands **/*.sql)
        #[arg(long = "schema-dir", value_name = "DIR")]
        schema_dir: Option<PathBuf>,

        /// Output directory for generated documents
        #[arg(short, long = "out-dir", value_name = "DIR")]
        out_dir: Option<PathBuf>,

        /// Generated-at string stamped into documents (omitted if not set)
        #[arg(long, value_name = "TEXT")]
        timestamp: Option<String>,

        /// Path to a ddlgen.toml configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Display parsed schema information
    Schema {
        /// DDL files to read
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human", value_enum)]
        format: OutputFormat,
    },

    /// Parse a DDL file and dump the schema model as JSON (for debugging)
    Parse {
        /// DDL file to parse
        file: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON output
    Json,
}
