/// `run-now` command: trigger a run, optionally overriding parameters.
use serde_json::Value;

use super::parse_json_option;
use crate::api::{JobsApi, RunNowRequest};
use crate::cli::args::RunNowArgs;
use crate::cli::output::write_object;
use crate::errors::CliError;
use crate::options::UsageError;

/// Run `databricks jobs run-now`. Prints the `run_id` of the new run.
///
/// # Errors
///
/// Returns `CliError::Usage` if a parameter option is not JSON,
/// `CliError::Api` if the request fails.
pub fn run<A: JobsApi>(args: &RunNowArgs, api: &A) -> Result<(), CliError> {
    let started = api.run_now(&request(args)?)?;
    write_object(&started);
    Ok(())
}

/// Build the run request, parsing each parameter option as JSON.
///
/// # Errors
///
/// Returns `UsageError::InvalidJson` naming the first option that is not JSON.
pub(super) fn request(args: &RunNowArgs) -> Result<RunNowRequest, UsageError> {
    Ok(RunNowRequest {
        job_id: args.job_id,
        jar_params: json_param("jar-params", args.jar_params.as_deref())?,
        notebook_params: json_param("notebook-params", args.notebook_params.as_deref())?,
        python_params: json_param("python-params", args.python_params.as_deref())?,
        spark_submit_params: json_param(
            "spark-submit-params",
            args.spark_submit_params.as_deref(),
        )?,
    })
}

fn json_param(option: &str, raw: Option<&str>) -> Result<Option<Value>, UsageError> {
    raw.map(|r| parse_json_option(option, r)).transpose()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::cli::args::{Command, JobsCommand};
    use crate::commands::testing::{Call, FakeApi, parse};

    fn run_now(args: &[&str], api: &FakeApi) -> Result<(), CliError> {
        let mut argv = vec!["jobs", "run-now", "--job-id", "1"];
        argv.extend_from_slice(args);
        let (cli, _) = parse(&argv);
        let Command::Jobs(JobsCommand::RunNow(args)) = cli.command else {
            panic!("expected jobs run-now");
        };
        run(&args, api)
    }

    #[test]
    fn test_run_now_without_params() {
        let api = FakeApi::default();
        run_now(&[], &api).unwrap();
        assert_eq!(
            api.calls(),
            [Call::RunNow(RunNowRequest {
                job_id: 1,
                ..RunNowRequest::default()
            })]
        );
    }

    #[test]
    fn test_run_now_with_every_param() {
        let api = FakeApi::default();
        run_now(
            &[
                "--jar-params",
                "[1, 2, 3]",
                "--notebook-params",
                r#"{"a": 1}"#,
                "--python-params",
                r#"["python", "params"]"#,
                "--spark-submit-params",
                r#"["--class", "org.apache.spark.examples.SparkPi"]"#,
            ],
            &api,
        )
        .unwrap();
        assert_eq!(
            api.calls(),
            [Call::RunNow(RunNowRequest {
                job_id: 1,
                jar_params: Some(json!([1, 2, 3])),
                notebook_params: Some(json!({"a": 1})),
                python_params: Some(json!(["python", "params"])),
                spark_submit_params: Some(json!(["--class", "org.apache.spark.examples.SparkPi"])),
            })]
        );
    }

    #[test]
    fn test_bad_param_json_is_a_usage_error() {
        let api = FakeApi::default();
        let err = run_now(&["--jar-params", "[1, 2"], &api).unwrap_err();
        assert!(matches!(
            err,
            CliError::Usage(UsageError::InvalidJson { ref option, .. }) if option == "jar-params"
        ));
        assert!(api.calls().is_empty());
    }
}
