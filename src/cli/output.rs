/// Output formatting: JSON payloads or tables.
use std::io::Write;

use comfy_table::{Cell, Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::library::{AllClusterStatuses, ClusterLibraryStatuses};
use crate::types::{ErrorOutput, JobRow, LibraryStatusRow};

/// Output context passed to all formatters.
#[derive(Debug, Clone, Copy)]
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub const fn new(format: OutputFormat, no_header: bool) -> Self {
        Self { format, no_header }
    }

    fn table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        if !self.no_header {
            table.set_header(headers.iter().map(|h| Cell::new(h)));
        }
        table
    }
}

// --- Library statuses ---

/// Write the libraries of one cluster to stdout.
pub fn write_cluster_status(status: &ClusterLibraryStatuses, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(status),
        OutputFormat::Table => {
            let rows = LibraryStatusRow::from_statuses(std::slice::from_ref(status));
            println!("{}", library_status_table(&rows, ctx));
        }
    }
}

/// Write the libraries of every cluster to stdout.
pub fn write_all_cluster_statuses(all: &AllClusterStatuses, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(all),
        OutputFormat::Table => {
            let rows = LibraryStatusRow::from_statuses(&all.statuses);
            println!("{}", library_status_table(&rows, ctx));
        }
    }
}

fn library_status_table(rows: &[LibraryStatusRow], ctx: &OutputCtx) -> Table {
    let mut table = ctx.table(&["CLUSTER ID", "TYPE", "LIBRARY", "STATUS", "ALL CLUSTERS"]);
    for row in rows {
        table.add_row([
            row.cluster_id.as_str(),
            row.kind.as_str(),
            row.library.as_str(),
            row.status.as_str(),
            if row.all_clusters { "yes" } else { "" },
        ]);
    }
    table
}

// --- Jobs ---

/// Write job rows to stdout. `payload` is printed as-is in JSON mode.
pub fn write_jobs<T: Serialize + ?Sized>(payload: &T, rows: &[JobRow], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(payload),
        OutputFormat::Table => println!("{}", jobs_table(rows, ctx)),
    }
}

fn jobs_table(rows: &[JobRow], ctx: &OutputCtx) -> Table {
    let mut table = ctx.table(&["JOB ID", "NAME"]);
    for row in rows {
        table.add_row([row.job_id.to_string(), row.name.clone()]);
    }
    table
}

// --- Single objects ---

/// Write a single API response. Objects have no table form and are always JSON.
pub fn write_object<T: Serialize + ?Sized>(value: &T) {
    print_json(value);
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}
