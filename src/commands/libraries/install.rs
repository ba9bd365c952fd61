/// `install` command: install one library on a cluster.
use log::info;

use super::resolve_library;
use crate::api::LibrariesApi;
use crate::cli::args::InstallArgs;
use crate::errors::CliError;
use crate::options::ProvidedOptions;

/// Run `databricks libraries install`.
///
/// # Errors
///
/// Returns `CliError::Usage` unless exactly one install source was given,
/// `CliError::Api` if the request fails.
pub fn run<A: LibrariesApi>(
    args: &InstallArgs,
    provided: &ProvidedOptions,
    api: &A,
) -> Result<(), CliError> {
    let library = resolve_library(&args.source, provided)?;
    info!(
        "installing {} {} on cluster {}",
        library.kind(),
        library.label(),
        args.cluster_id
    );
    api.install_libraries(&args.cluster_id, std::slice::from_ref(&library))?;
    Ok(())
}
