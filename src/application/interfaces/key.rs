use crate::error::AppError;
use crate::model::responses::KeyLists;
use async_trait::async_trait;

/// Interface for the master's key management
#[async_trait]
pub trait KeyService: Send + Sync {
    /// Lists minion keys grouped by acceptance state
    async fn keys(&self) -> Result<KeyLists, AppError>;
}
