/// `libraries` commands: status listing, install, uninstall.
pub mod install;
pub mod status;
pub mod uninstall;

use crate::api::LibrariesApi;
use crate::cli::OutputCtx;
use crate::cli::args::{LibrariesCommand, LibrarySourceArgs};
use crate::errors::CliError;
use crate::library::{Library, LibrarySelection, build};
use crate::options::{OptionGroup, ProvidedOptions, validate_group};

/// Install sources; exactly one per `install` / `uninstall`.
pub const INSTALL_SOURCES: OptionGroup = OptionGroup::new(&[
    "jar",
    "egg",
    "maven-coordinates",
    "pypi-package",
    "cran-package",
]);

/// Dispatch a `libraries` subcommand.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch<A: LibrariesApi>(
    command: &LibrariesCommand,
    provided: &ProvidedOptions,
    ctx: &OutputCtx,
    api: &A,
) -> Result<(), CliError> {
    match command {
        LibrariesCommand::AllClusterStatuses => status::run_all(ctx, api),
        LibrariesCommand::ClusterStatus(args) => status::run_cluster(&args.cluster_id, ctx, api),
        LibrariesCommand::List(args) => status::run_list(args, ctx, api),
        LibrariesCommand::Install(args) => install::run(args, provided, api),
        LibrariesCommand::Uninstall(args) => uninstall::run(args, provided, api),
    }
}

/// Check a `libraries` subcommand's input without contacting the API.
///
/// # Errors
///
/// Returns `CliError::Usage` unless exactly one install source was given where one is needed.
pub fn check(command: &LibrariesCommand, provided: &ProvidedOptions) -> Result<(), CliError> {
    match command {
        LibrariesCommand::Install(args) => resolve_library(&args.source, provided).map(drop),
        LibrariesCommand::Uninstall(args) if !args.all => {
            resolve_library(&args.source, provided).map(drop)
        }
        _ => Ok(()),
    }
}

/// Check the install-source group, then assemble the one descriptor it selects.
///
/// # Errors
///
/// Returns `CliError::Usage` when zero or several sources were typed.
fn resolve_library(
    source: &LibrarySourceArgs,
    provided: &ProvidedOptions,
) -> Result<Library, CliError> {
    validate_group(&INSTALL_SOURCES, provided)?;
    Ok(build(&LibrarySelection::from(source))?)
}
