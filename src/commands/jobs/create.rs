/// `create` command: create a job from a settings document.
use super::read_settings;
use crate::api::JobsApi;
use crate::cli::args::CreateArgs;
use crate::cli::output::write_object;
use crate::errors::CliError;
use crate::options::ProvidedOptions;

/// Run `databricks jobs create`. Prints the new `job_id`.
///
/// # Errors
///
/// Returns `CliError::Usage` on bad settings input, `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(
    args: &CreateArgs,
    provided: &ProvidedOptions,
    api: &A,
) -> Result<(), CliError> {
    let settings = read_settings(&args.input, provided)?;
    let created = api.create_job(&settings)?;
    write_object(&created);
    Ok(())
}
