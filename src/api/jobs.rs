/// Jobs service: job definitions and on-demand runs.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::client::ApiClient;
use super::errors::ApiError;

/// One entry of `jobs/list`. Fields we do not render are carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub job_id: i64,
    #[serde(default)]
    pub settings: JobSettings,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The subset of job settings the table view needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSettings {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Response of `jobs/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobList {
    #[serde(default)]
    pub jobs: Vec<JobSummary>,
}

/// Body of `jobs/run-now`. Parameter kinds the user did not supply are left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunNowRequest {
    pub job_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jar_params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notebook_params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_params: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spark_submit_params: Option<Value>,
}

/// Operations on jobs.
pub trait JobsApi {
    /// Create a job from a settings document; returns `{"job_id": …}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError>;

    /// List every job in the workspace.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn list_jobs(&self) -> Result<JobList, ApiError>;

    /// Overwrite a job's settings.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or HTTP failure.
    fn reset_job(&self, job_id: i64, new_settings: &Value) -> Result<(), ApiError>;

    /// Fetch one job definition.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn get_job(&self, job_id: i64) -> Result<Value, ApiError>;

    /// Delete a job.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or HTTP failure.
    fn delete_job(&self, job_id: i64) -> Result<(), ApiError>;

    /// Trigger a run; returns `{"run_id": …, "number_in_job": …}`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, HTTP, or decode failure.
    fn run_now(&self, request: &RunNowRequest) -> Result<Value, ApiError>;
}

#[derive(Serialize)]
struct ResetRequest<'a> {
    job_id: i64,
    new_settings: &'a Value,
}

#[derive(Serialize)]
struct JobIdRequest {
    job_id: i64,
}

impl JobsApi for ApiClient {
    fn create_job(&self, settings: &Value) -> Result<Value, ApiError> {
        self.post("/jobs/create", settings)
    }

    fn list_jobs(&self) -> Result<JobList, ApiError> {
        self.get("/jobs/list", &[])
    }

    fn reset_job(&self, job_id: i64, new_settings: &Value) -> Result<(), ApiError> {
        let _: Value = self.post(
            "/jobs/reset",
            &ResetRequest {
                job_id,
                new_settings,
            },
        )?;
        Ok(())
    }

    fn get_job(&self, job_id: i64) -> Result<Value, ApiError> {
        self.get("/jobs/get", &[("job_id", job_id.to_string())])
    }

    fn delete_job(&self, job_id: i64) -> Result<(), ApiError> {
        let _: Value = self.post("/jobs/delete", &JobIdRequest { job_id })?;
        Ok(())
    }

    fn run_now(&self, request: &RunNowRequest) -> Result<Value, ApiError> {
        self.post("/jobs/run-now", request)
    }
}
