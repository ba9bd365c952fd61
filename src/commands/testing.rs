/// Test doubles shared by the command tests: a recording API fake and a parse helper.
use std::cell::RefCell;

use clap::{CommandFactory, FromArgMatches};
use serde_json::{Value, json};

use crate::api::{ApiError, JobList, JobsApi, LibrariesApi, RunNowRequest};
use crate::cli::Cli;
use crate::library::{AllClusterStatuses, ClusterLibraryStatuses, Library};
use crate::options::ProvidedOptions;

/// One recorded API call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AllClusterStatuses,
    ClusterStatus(String),
    Install(String, Vec<Library>),
    Uninstall(String, Vec<Library>),
    CreateJob(Value),
    ListJobs,
    ResetJob(i64, Value),
    GetJob(i64),
    DeleteJob(i64),
    RunNow(RunNowRequest),
}

/// In-memory API that records every call and answers with canned payloads.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub cluster_status: Option<ClusterLibraryStatuses>,
    pub jobs: JobList,
    /// When set, every call fails with an HTTP 500 carrying this message.
    pub fail_with: Option<String>,
}

impl FakeApi {
    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match &self.fail_with {
            Some(message) => Err(ApiError::Http {
                endpoint: "/fake".to_owned(),
                status: 500,
                error_code: None,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }

    /// Snapshot of the calls made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl LibrariesApi for FakeApi {
    fn all_cluster_statuses(&self) -> Result<AllClusterStatuses, ApiError> {
        self.record(Call::AllClusterStatuses)?;
        Ok(AllClusterStatuses {
            statuses: self.cluster_status.clone().into_iter().collect(),
        })
    }

    fn cluster_status(&self, cluster_id: &str) -> Result<ClusterLibraryStatuses, ApiError> {
        self.record(Call::ClusterStatus(cluster_id.to_owned()))?;
        Ok(self
            .cluster_status
            .clone()
            .unwrap_or_else(|| ClusterLibraryStatuses {
                cluster_id: cluster_id.to_owned(),
                library_statuses: Vec::new(),
            }))
    }

    fn install_libraries(&self, cluster_id: &str, libraries: &[Library]) -> Result<(), ApiError> {
        self.record(Call::Install(cluster_id.to_owned(), libraries.to_vec()))
    }

    fn uninstall_libraries(
        &self,
        cluster_id: &str,
        libraries: &[Library],
    ) -> Result<(), ApiError> {
        self.record(Call::Uninstall(cluster_id.to_owned(), libraries.to_vec()))
    }
}

impl JobsApi for FakeApi {
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError> {
        self.record(Call::CreateJob(settings.clone()))?;
        Ok(json!({"job_id": 5}))
    }

    fn list_jobs(&self) -> Result<JobList, ApiError> {
        self.record(Call::ListJobs)?;
        Ok(self.jobs.clone())
    }

    fn reset_job(&self, job_id: i64, new_settings: &Value) -> Result<(), ApiError> {
        self.record(Call::ResetJob(job_id, new_settings.clone()))
    }

    fn get_job(&self, job_id: i64) -> Result<Value, ApiError> {
        self.record(Call::GetJob(job_id))?;
        Ok(json!({"job_id": job_id, "settings": {"name": "test_job"}}))
    }

    fn delete_job(&self, job_id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteJob(job_id))
    }

    fn run_now(&self, request: &RunNowRequest) -> Result<Value, ApiError> {
        self.record(Call::RunNow(request.clone()))?;
        Ok(json!({"number_in_job": 1, "run_id": 1}))
    }
}

/// Parse a full command line the way `main` does.
pub fn parse(args: &[&str]) -> (Cli, ProvidedOptions) {
    let argv = std::iter::once("databricks").chain(args.iter().copied());
    let matches = Cli::command().try_get_matches_from(argv).unwrap();
    let cli = Cli::from_arg_matches(&matches).unwrap();
    (cli, ProvidedOptions::from_matches(&matches))
}
