/// `jobs` commands: create, list, reset, get, delete, run-now.
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod reset;
pub mod run_now;

use std::fs;

use serde_json::Value;

use crate::api::JobsApi;
use crate::cli::OutputCtx;
use crate::cli::args::{JobsCommand, JsonInput};
use crate::errors::CliError;
use crate::options::{OptionGroup, ProvidedOptions, UsageError, validate_group};

/// Settings document sources; exactly one per `create` / `reset`.
pub const JSON_INPUT: OptionGroup = OptionGroup::new(&["json", "json-file"]);

/// Dispatch a `jobs` subcommand.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch<A: JobsApi>(
    command: &JobsCommand,
    provided: &ProvidedOptions,
    ctx: &OutputCtx,
    api: &A,
) -> Result<(), CliError> {
    match command {
        JobsCommand::Create(args) => create::run(args, provided, api),
        JobsCommand::List => list::run(ctx, api),
        JobsCommand::Reset(args) => reset::run(args, provided, api),
        JobsCommand::Get(args) => get::run(args, api),
        JobsCommand::Delete(args) => delete::run(args, api),
        JobsCommand::RunNow(args) => run_now::run(args, api),
    }
}

/// Check a `jobs` subcommand's input without contacting the API.
///
/// # Errors
///
/// Returns `CliError::Usage` on bad settings input or parameter JSON.
pub fn check(command: &JobsCommand, provided: &ProvidedOptions) -> Result<(), CliError> {
    match command {
        JobsCommand::Create(args) => read_settings(&args.input, provided).map(drop),
        JobsCommand::Reset(args) => read_settings(&args.input, provided).map(drop),
        JobsCommand::RunNow(args) => Ok(run_now::request(args).map(drop)?),
        JobsCommand::List | JobsCommand::Get(_) | JobsCommand::Delete(_) => Ok(()),
    }
}

/// Read the settings document from `--json` or `--json-file`, whichever was given.
///
/// # Errors
///
/// Returns `CliError::Usage` if both or neither were given, the file is
/// unreadable, or the content is not JSON.
fn read_settings(input: &JsonInput, provided: &ProvidedOptions) -> Result<Value, CliError> {
    validate_group(&JSON_INPUT, provided)?;
    match (&input.json, &input.json_file) {
        (Some(raw), _) => Ok(parse_json_option("json", raw)?),
        (None, Some(path)) => {
            let raw = fs::read_to_string(path).map_err(|e| UsageError::ReadFile {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            Ok(parse_json_option("json-file", &raw)?)
        }
        (None, None) => Err(UsageError::MissingOneOf {
            options: vec!["--json".to_owned(), "--json-file".to_owned()],
        }
        .into()),
    }
}

/// Parse the JSON document passed to `--<option>`.
///
/// # Errors
///
/// Returns `UsageError::InvalidJson` naming the option.
fn parse_json_option(option: &str, raw: &str) -> Result<Value, UsageError> {
    serde_json::from_str(raw).map_err(|e| UsageError::InvalidJson {
        option: option.to_owned(),
        reason: e.to_string(),
    })
}
