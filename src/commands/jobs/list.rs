/// `list` command: list jobs sorted by name.
use crate::api::{JobList, JobsApi};
use crate::cli::OutputCtx;
use crate::cli::output::write_jobs;
use crate::errors::CliError;
use crate::types::JobRow;

/// Run `databricks jobs list`.
///
/// Table output is sorted by name, case-insensitively; `--output json` prints
/// the response unchanged.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(ctx: &OutputCtx, api: &A) -> Result<(), CliError> {
    let list = api.list_jobs()?;
    write_jobs(&list, &job_rows(&list), ctx);
    Ok(())
}

/// One row per job, ordered by lowercased name. Ties keep response order.
fn job_rows(list: &JobList) -> Vec<JobRow> {
    let mut rows: Vec<JobRow> = list
        .jobs
        .iter()
        .map(|job| JobRow {
            job_id: job.job_id,
            name: job.settings.name.clone(),
        })
        .collect();
    rows.sort_by_cached_key(|row| row.name.to_lowercase());
    rows
}
