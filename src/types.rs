/// Shared serializable output types.
///
/// Rows here are what the table renderers consume; JSON mode prints the API
/// payloads themselves. They are decoupled from the wire types in `api` and `library`.
use serde::{Deserialize, Serialize};

use crate::errors::CliError;
use crate::library::ClusterLibraryStatuses;

/// One library on one cluster, flattened for table output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryStatusRow {
    pub cluster_id: String,
    /// Descriptor tag (`jar`, `maven`, …).
    pub kind: String,
    /// Path, coordinates or package.
    pub library: String,
    pub status: String,
    pub all_clusters: bool,
}

impl LibraryStatusRow {
    /// Flatten cluster statuses into rows, one per library, preserving response order.
    #[must_use]
    pub fn from_statuses(statuses: &[ClusterLibraryStatuses]) -> Vec<Self> {
        statuses
            .iter()
            .flat_map(|cluster| {
                cluster.library_statuses.iter().map(move |s| Self {
                    cluster_id: cluster.cluster_id.clone(),
                    kind: s.library.kind().to_owned(),
                    library: s.library.label().to_owned(),
                    status: s.status.clone(),
                    all_clusters: s.is_library_for_all_clusters,
                })
            })
            .collect()
    }
}

/// One job, as shown by `jobs list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRow {
    pub job_id: i64,
    pub name: String,
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`usage_error`, `RESOURCE_DOES_NOT_EXIST`, …).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorOutput {
    /// Construct from a `CliError`.
    #[must_use]
    pub fn from_cli_error(err: &CliError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
            },
        }
    }
}
