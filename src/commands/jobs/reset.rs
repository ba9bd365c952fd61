/// `reset` command: overwrite a job's settings.
use log::info;

use super::read_settings;
use crate::api::JobsApi;
use crate::cli::args::ResetArgs;
use crate::errors::CliError;
use crate::options::ProvidedOptions;

/// Run `databricks jobs reset`.
///
/// # Errors
///
/// Returns `CliError::Usage` on bad settings input, `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(
    args: &ResetArgs,
    provided: &ProvidedOptions,
    api: &A,
) -> Result<(), CliError> {
    let new_settings = read_settings(&args.input, provided)?;
    info!("resetting settings of job {}", args.job_id);
    api.reset_job(args.job_id, &new_settings)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cli::args::{Command, JobsCommand};
    use crate::commands::testing::{Call, FakeApi, parse};

    #[test]
    fn test_reset_sends_job_id_and_settings() {
        let (cli, provided) = parse(&[
            "jobs",
            "reset",
            "--json",
            r#"{"job_name": "test_job"}"#,
            "--job-id",
            "1",
        ]);
        let Command::Jobs(JobsCommand::Reset(args)) = cli.command else {
            panic!("expected jobs reset");
        };
        let api = FakeApi::default();
        run(&args, &provided, &api).unwrap();
        assert_eq!(api.calls(), [Call::ResetJob(1, json!({"job_name": "test_job"}))]);
    }
}
