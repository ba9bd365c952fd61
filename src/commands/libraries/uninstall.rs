/// `uninstall` command: mark one library, or every library, for removal on restart.
use log::info;

use super::resolve_library;
use crate::api::LibrariesApi;
use crate::cli::args::UninstallArgs;
use crate::errors::CliError;
use crate::options::ProvidedOptions;

/// Run `databricks libraries uninstall`.
///
/// With `--all`, the libraries to remove are read from the cluster's current
/// status; otherwise exactly one install source must be given. Either way the
/// cluster keeps the libraries until restarted, which is printed as a reminder.
///
/// # Errors
///
/// Returns `CliError::Usage` on a bad source selection, `CliError::Api` if a request fails.
pub fn run<A: LibrariesApi>(
    args: &UninstallArgs,
    provided: &ProvidedOptions,
    api: &A,
) -> Result<(), CliError> {
    let libraries = if args.all {
        api.cluster_status(&args.cluster_id)?.libraries()
    } else {
        vec![resolve_library(&args.source, provided)?]
    };

    if libraries.is_empty() {
        info!("no libraries on cluster {}", args.cluster_id);
    } else {
        info!(
            "uninstalling {} librar{} from cluster {}",
            libraries.len(),
            if libraries.len() == 1 { "y" } else { "ies" },
            args.cluster_id
        );
        api.uninstall_libraries(&args.cluster_id, &libraries)?;
    }

    println!("{}", restart_notice(&args.cluster_id));
    Ok(())
}

fn restart_notice(cluster_id: &str) -> String {
    format!(
        "WARNING: Uninstalling libraries requires a cluster restart.\n\
         databricks clusters restart --cluster-id {cluster_id}"
    )
}
