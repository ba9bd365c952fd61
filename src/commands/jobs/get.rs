/// `get` command: describe a job.
use crate::api::JobsApi;
use crate::cli::args::JobIdArgs;
use crate::cli::output::write_object;
use crate::errors::CliError;

/// Run `databricks jobs get`.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(args: &JobIdArgs, api: &A) -> Result<(), CliError> {
    let job = api.get_job(args.job_id)?;
    write_object(&job);
    Ok(())
}
