use crate::error::AppError;
use crate::model::requests::JobRequest;
use crate::model::responses::{AsyncJob, Minion};
use async_trait::async_trait;

/// Interface for querying minions and publishing jobs to them
#[async_trait]
pub trait MinionService: Send + Sync {
    /// Gets the grains of a single minion
    ///
    /// # Arguments
    /// * `id` - Minion id
    ///
    /// # Returns
    /// * `Ok(Some(Minion))` - The minion answered with its grains
    /// * `Ok(None)` - The minion is unknown or did not answer
    async fn minion(&self, id: &str) -> Result<Option<Minion>, AppError>;

    /// Gets all minions that answered, sorted by id
    async fn minions(&self) -> Result<Vec<Minion>, AppError>;

    /// Starts a job asynchronously and returns its jid
    ///
    /// Fails with [`AppError::NoMinionsMatched`] when the master issued no jid,
    /// which is how Salt answers a target that matched nothing.
    async fn submit_job(&self, job: &JobRequest) -> Result<AsyncJob, AppError>;
}
