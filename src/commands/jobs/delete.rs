/// `delete` command: delete a job.
use log::info;

use crate::api::JobsApi;
use crate::cli::args::JobIdArgs;
use crate::errors::CliError;

/// Run `databricks jobs delete`.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(args: &JobIdArgs, api: &A) -> Result<(), CliError> {
    info!("deleting job {}", args.job_id);
    api.delete_job(args.job_id)?;
    Ok(())
}
