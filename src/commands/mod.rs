/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod jobs;
pub mod libraries;

#[cfg(test)]
pub mod testing;

use crate::api::{JobsApi, LibrariesApi};
use crate::cli::OutputCtx;
use crate::cli::args::Command;
use crate::errors::CliError;
use crate::options::ProvidedOptions;

/// Validate a parsed `Command`'s options before any configuration is loaded.
///
/// Usage errors take precedence over configuration and API errors.
///
/// # Errors
///
/// Returns `CliError::Usage` on malformed input.
pub fn check(command: &Command, provided: &ProvidedOptions) -> Result<(), CliError> {
    match command {
        Command::Libraries(cmd) => libraries::check(cmd, provided),
        Command::Jobs(cmd) => jobs::check(cmd, provided),
    }
}

/// Dispatch a parsed `Command` to its handler.
///
/// `provided` holds the options the user actually typed; handlers use it to
/// check their exclusive option groups before calling the API.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch<A>(
    command: &Command,
    provided: &ProvidedOptions,
    ctx: &OutputCtx,
    api: &A,
) -> Result<(), CliError>
where
    A: LibrariesApi + JobsApi,
{
    match command {
        Command::Libraries(cmd) => libraries::dispatch(cmd, provided, ctx, api),
        Command::Jobs(cmd) => jobs::dispatch(cmd, provided, ctx, api),
    }
}
