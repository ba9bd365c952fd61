/// Library status payloads returned by the cluster-status endpoints.
use serde::{Deserialize, Serialize};

use super::descriptor::Library;

/// Status of every library on one cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterLibraryStatuses {
    pub cluster_id: String,
    #[serde(default)]
    pub library_statuses: Vec<LibraryFullStatus>,
}

/// One library and where it is in its install lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryFullStatus {
    pub library: Library,
    /// `PENDING`, `RESOLVING`, `INSTALLING`, `INSTALLED`, `FAILED`, `UNINSTALL_ON_RESTART`, …
    pub status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    /// True when the library is set to install on every cluster, even if also installed here.
    #[serde(default)]
    pub is_library_for_all_clusters: bool,
}

/// Response of `all-cluster-statuses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllClusterStatuses {
    #[serde(default)]
    pub statuses: Vec<ClusterLibraryStatuses>,
}

impl ClusterLibraryStatuses {
    /// Descriptors of every library the cluster reports, in response order.
    #[must_use]
    pub fn libraries(&self) -> Vec<Library> {
        self.library_statuses
            .iter()
            .map(|s| s.library.clone())
            .collect()
    }
}
