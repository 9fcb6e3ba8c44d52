use crate::error::AppError;
use crate::model::responses::{Job, JobDetails};
use async_trait::async_trait;

/// Interface for the master's job cache
#[async_trait]
pub trait JobService: Send + Sync {
    /// Lists jobs in the job cache, sorted by jid
    async fn jobs(&self) -> Result<Vec<Job>, AppError>;

    /// Gets the metadata and per-minion results of a job
    ///
    /// # Arguments
    /// * `jid` - Job id
    async fn job(&self, jid: &str) -> Result<JobDetails, AppError>;
}
