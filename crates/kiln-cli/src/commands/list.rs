//! Implementation of the `kiln list` command.

use serde::Serialize;

use kiln_adapters::BuiltinCatalog;
use kiln_core::application::{CatalogEntry, CatalogService};

use crate::{
    cli::{ListArgs, ListFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One catalog entry as printed by `--format json`.
#[derive(Debug, Serialize)]
struct Row<'a> {
    id: &'a str,
    group_id: &'a str,
    artifact_id: &'a str,
    scope: Option<&'a str>,
    description: &'a str,
}

impl<'a> From<&'a CatalogEntry> for Row<'a> {
    fn from(entry: &'a CatalogEntry) -> Self {
        Self {
            id: &entry.id,
            group_id: &entry.coordinate.group_id,
            artifact_id: &entry.coordinate.artifact_id,
            scope: entry.coordinate.scope.as_deref(),
            description: &entry.description,
        }
    }
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = BuiltinCatalog::load(config.generation.catalog.as_deref())?;
    let service = CatalogService::new(Box::new(catalog));

    let entries = match args.search.as_deref() {
        Some(needle) => service.search(needle),
        None => service.list(),
    };

    // Machine formats go straight to stdout so they survive --quiet and pipes.
    match args.format {
        ListFormat::Table => print_table(&entries, &output)?,
        ListFormat::List => {
            for entry in &entries {
                println!("{}", entry.id);
            }
        }
        ListFormat::Json => println!("{}", to_json(&entries)?),
        ListFormat::Csv => print!("{}", to_csv(&entries)),
    }

    Ok(())
}

fn print_table(entries: &[CatalogEntry], output: &OutputManager) -> CliResult<()> {
    if entries.is_empty() {
        output.warning("No dependencies match")?;
        return Ok(());
    }

    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    output.header("Available Dependencies:")?;
    for entry in entries {
        output.print(&format!(
            "  {:<width$}  {}",
            entry.id, entry.description
        ))?;
    }
    output.print("")?;
    output.info(&format!("{} entries", entries.len()))?;
    Ok(())
}

fn to_json(entries: &[CatalogEntry]) -> CliResult<String> {
    let rows: Vec<Row<'_>> = entries.iter().map(Row::from).collect();
    serde_json::to_string_pretty(&rows).map_err(|e| CliError::InvalidInput {
        message: format!("cannot serialise catalog: {e}"),
        source: Some(Box::new(e)),
    })
}

fn to_csv(entries: &[CatalogEntry]) -> String {
    let mut out = String::from("id,group_id,artifact_id,scope,description\n");
    for entry in entries {
        let fields = [
            entry.id.as_str(),
            entry.coordinate.group_id.as_str(),
            entry.coordinate.artifact_id.as_str(),
            entry.coordinate.scope.as_deref().unwrap_or(""),
            entry.description.as_str(),
        ];
        let line: Vec<String> = fields.iter().map(|f| csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
