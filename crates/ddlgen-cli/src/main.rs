//! ddlgen CLI - schema document generator for SQL DDL

mod args;
mod config;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use ddlgen_core::generate::{docs, Emitter};
use ddlgen_core::parse_tables;
use miette::{IntoDiagnostic, Result};

use crate::args::{Args, Command, OutputFormat};
use crate::config::Config;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Generate {
            files,
            schema_dir,
            out_dir,
            timestamp,
            config: config_path,
        } => {
            // Load configuration
            let config = if let Some(path) = config_path {
                // Load from specified path
                Config::from_file(&path)?
            } else {
                // Try to find ddlgen.toml
                Config::find_and_load()?.unwrap_or_default()
            };

            // Merge CLI args with config (CLI takes precedence)
            let config = config.merge_with_args(&files, &schema_dir, &out_dir, &timestamp);

            let schema_files = collect_schema_files(&config)?;
            if schema_files.is_empty() {
                miette::bail!(
                    "No DDL files specified. Pass files, use --schema-dir, or configure in ddlgen.toml"
                );
            }

            let out_dir = config.out_dir.as_deref().unwrap_or("generated");
            let emitter = Emitter::new(out_dir);
            let mut emitted = 0usize;

            for schema_file in &schema_files {
                let content = fs::read_to_string(schema_file).into_diagnostic()?;
                let tables = parse_tables(&content)?;
                tracing::info!(
                    file = %schema_file.display(),
                    tables = tables.len(),
                    "parsed DDL file"
                );

                for table in &tables {
                    let doc = docs::render_table_doc(table, config.timestamp.as_deref());
                    emitter.write(Path::new("docs"), &docs::doc_file_name(table), &doc)?;
                    emitted += 1;
                }
            }

            if !args.quiet {
                eprintln!(
                    "Generated {} document(s) from {} file(s) into {}",
                    emitted,
                    schema_files.len(),
                    out_dir
                );
            }
            Ok(())
        }

        Command::Schema { files, format } => {
            let mut all_tables = Vec::new();
            for schema_file in &files {
                let content = fs::read_to_string(schema_file).into_diagnostic()?;
                all_tables.extend(parse_tables(&content)?);
            }

            match format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&all_tables).into_diagnostic()?
                    );
                }
                OutputFormat::Human => {
                    println!("Schema Information:");
                    println!("==================");
                    for table in &all_tables {
                        if table.comment.is_empty() {
                            println!("\nTable: {}", table.name);
                        } else {
                            println!("\nTable: {} ({})", table.name, table.comment);
                        }
                        for col in table.columns.values() {
                            let nullable = if col.nullable { "NULL" } else { "NOT NULL" };
                            println!(
                                "  - {} {} {}",
                                col.name, col.data_type.original, nullable
                            );
                        }
                    }
                }
            }

            Ok(())
        }

        Command::Parse { file } => {
            // Parse and dump the schema model (for debugging)
            let content = fs::read_to_string(&file).into_diagnostic()?;
            let tables = parse_tables(&content)?;
            println!("{}", serde_json::to_string_pretty(&tables).into_diagnostic()?);
            Ok(())
        }
    }
}

/// Collect DDL files from config: explicit paths plus schema_dir expansion.
fn collect_schema_files(config: &Config) -> Result<Vec<PathBuf>> {
    let mut schema_files: Vec<PathBuf> = config.schema.iter().map(PathBuf::from).collect();

    if let Some(dir) = &config.schema_dir {
        let pattern = format!("{}/**/*.sql", dir);
        for path in glob::glob(&pattern).into_diagnostic()?.flatten() {
            schema_files.push(path);
        }
    }

    Ok(schema_files)
}
