/// Remote API layer: HTTP transport and the libraries/jobs services on top of it.
pub mod client;
pub mod errors;
pub mod jobs;
pub mod libraries;

pub use client::ApiClient;
pub use errors::ApiError;
pub use jobs::{JobList, JobsApi, RunNowRequest};
pub use libraries::LibrariesApi;
