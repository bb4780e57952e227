use deadpool_redis::redis::AsyncCommands;

use crate::{
    ValqError, codec,
    job_data::{JobData, JobId},
    storage_keys::StorageKeys,
};

/// Key-value storage of individual job records, keyed by job identifier.
///
/// Writes go through the store's single-key `SET`, so no partial-write state
/// is ever visible.
#[derive(Clone, Debug)]
pub(crate) struct JobStore {
    pool: deadpool_redis::Pool,
}

impl JobStore {
    pub(crate) fn new(pool: deadpool_redis::Pool) -> Self {
        Self { pool }
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, ValqError> {
        Ok(self.pool.get().await?)
    }

    pub(crate) async fn get(&self, id: &JobId) -> Result<JobData, ValqError> {
        let mut redis = self.connection().await?;
        let bytes: Option<Vec<u8>> = redis.get(StorageKeys::job(id)).await?;
        match bytes {
            Some(bytes) => codec::decode(&bytes),
            None => Err(ValqError::JobNotFound(id.clone())),
        }
    }

    pub(crate) async fn set(&self, id: &JobId, data: &JobData) -> Result<(), ValqError> {
        let bytes = codec::encode(data)?;
        let mut redis = self.connection().await?;
        let _: () = redis.set(StorageKeys::job(id), bytes).await?;
        Ok(())
    }

    /// Deleting an identifier with no record is a no-op.
    pub(crate) async fn delete(&self, id: &JobId) -> Result<(), ValqError> {
        let mut redis = self.connection().await?;
        let _: () = redis.del(StorageKeys::job(id)).await?;
        Ok(())
    }
}
