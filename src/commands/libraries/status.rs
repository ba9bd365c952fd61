/// `all-cluster-statuses`, `cluster-status` and `list`: report library install state.
use log::debug;

use crate::api::LibrariesApi;
use crate::cli::OutputCtx;
use crate::cli::args::ListArgs;
use crate::cli::output::{write_all_cluster_statuses, write_cluster_status};
use crate::errors::CliError;

/// Run `databricks libraries all-cluster-statuses`.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run_all<A: LibrariesApi>(ctx: &OutputCtx, api: &A) -> Result<(), CliError> {
    let all = api.all_cluster_statuses()?;
    debug!("{} cluster(s) reported", all.statuses.len());
    write_all_cluster_statuses(&all, ctx);
    Ok(())
}

/// Run `databricks libraries cluster-status`.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run_cluster<A: LibrariesApi>(
    cluster_id: &str,
    ctx: &OutputCtx,
    api: &A,
) -> Result<(), CliError> {
    let status = api.cluster_status(cluster_id)?;
    write_cluster_status(&status, ctx);
    Ok(())
}

/// Run `databricks libraries list`: one cluster with `--cluster-id`, all clusters without.
///
/// # Errors
///
/// Returns `CliError::Api` if the request fails.
pub fn run_list<A: LibrariesApi>(args: &ListArgs, ctx: &OutputCtx, api: &A) -> Result<(), CliError> {
    match &args.cluster_id {
        Some(cluster_id) => run_cluster(cluster_id, ctx, api),
        None => run_all(ctx, api),
    }
}
