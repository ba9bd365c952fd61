/// Libraries service: install state of libraries on clusters.
use serde::Serialize;
use serde_json::Value;

use super::client::ApiClient;
use super::errors::ApiError;
use crate::library::{AllClusterStatuses, ClusterLibraryStatuses, Library};

/// Operations on cluster libraries.
pub trait LibrariesApi {
    /// Status of every library on every cluster.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn all_cluster_statuses(&self) -> Result<AllClusterStatuses, ApiError>;

    /// Status of every library on one cluster.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn cluster_status(&self, cluster_id: &str) -> Result<ClusterLibraryStatuses, ApiError>;

    /// Queue libraries for installation on a cluster.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or HTTP failure.
    fn install_libraries(&self, cluster_id: &str, libraries: &[Library]) -> Result<(), ApiError>;

    /// Mark libraries for removal on the cluster's next restart.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or HTTP failure.
    fn uninstall_libraries(&self, cluster_id: &str, libraries: &[Library])
    -> Result<(), ApiError>;
}

#[derive(Serialize)]
struct LibrariesRequest<'a> {
    cluster_id: &'a str,
    libraries: &'a [Library],
}

impl LibrariesApi for ApiClient {
    fn all_cluster_statuses(&self) -> Result<AllClusterStatuses, ApiError> {
        self.get("/libraries/all-cluster-statuses", &[])
    }

    fn cluster_status(&self, cluster_id: &str) -> Result<ClusterLibraryStatuses, ApiError> {
        self.get(
            "/libraries/cluster-status",
            &[("cluster_id", cluster_id.to_owned())],
        )
    }

    fn install_libraries(&self, cluster_id: &str, libraries: &[Library]) -> Result<(), ApiError> {
        let _: Value = self.post(
            "/libraries/install",
            &LibrariesRequest {
                cluster_id,
                libraries,
            },
        )?;
        Ok(())
    }

    fn uninstall_libraries(
        &self,
        cluster_id: &str,
        libraries: &[Library],
    ) -> Result<(), ApiError> {
        let _: Value = self.post(
            "/libraries/uninstall",
            &LibrariesRequest {
                cluster_id,
                libraries,
            },
        )?;
        Ok(())
    }
}
