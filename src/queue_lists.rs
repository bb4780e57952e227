use deadpool_redis::redis::{self, AsyncCommands};

use crate::{ValqError, job_data::JobId, storage_keys::StorageKeys};

/// The ready/processing list protocol for one namespace.
///
/// All cross-worker safety lives here. A claim is a single `LMOVE` from the
/// ready tail to the processing head, so two concurrent callers can never
/// observe the same element, and `push` scrubs stale processing entries so a
/// re-queued job cannot remain falsely claimed. No other locking exists or is
/// needed.
#[derive(Clone, Debug)]
pub(crate) struct QueueLists {
    pool: deadpool_redis::Pool,
    keys: StorageKeys,
}

impl QueueLists {
    pub(crate) fn new(pool: deadpool_redis::Pool, keys: StorageKeys) -> Self {
        Self { pool, keys }
    }

    pub(crate) fn namespace(&self) -> &str {
        &self.keys.namespace
    }

    async fn connection(&self) -> Result<deadpool_redis::Connection, ValqError> {
        Ok(self.pool.get().await?)
    }

    /// Appends `id` to the head of the ready list, then removes every
    /// occurrence of `id` from the processing list. The cleanup covers jobs
    /// being re-queued — after a delay, or by a reaper — which must not keep
    /// their old claim. One pipeline round-trip; ordering matters, atomicity
    /// does not.
    pub(crate) async fn push(&self, queue: &str, id: &JobId) -> Result<(), ValqError> {
        let mut redis = self.connection().await?;
        let _: () = redis::pipe()
            .lpush(self.keys.ready(queue), id)
            .lrem(self.keys.processing(queue), 0, id)
            .query_async(&mut redis)
            .await?;
        Ok(())
    }

    /// Atomically moves one identifier from the tail of the ready list to
    /// the head of the processing list and returns it, or `None` when the
    /// queue is idle. Paired with `push`'s `LPUSH`, popping from the tail
    /// preserves enqueue order.
    pub(crate) async fn pop(&self, queue: &str) -> Result<Option<JobId>, ValqError> {
        let mut redis = self.connection().await?;
        let element: Option<Vec<u8>> = redis
            .lmove(
                self.keys.ready(queue),
                self.keys.processing(queue),
                redis::Direction::Right,
                redis::Direction::Left,
            )
            .await?;
        match element {
            Some(raw) => {
                let id = String::from_utf8(raw).map_err(ValqError::MalformedIdentifier)?;
                Ok(Some(id))
            }
            None => Ok(None),
        }
    }

    /// Removes every occurrence of `id` from the processing list. The ready
    /// list is untouched, and clearing an unclaimed id is a no-op.
    pub(crate) async fn clear(&self, queue: &str, id: &JobId) -> Result<(), ValqError> {
        let mut redis = self.connection().await?;
        let _: () = redis.lrem(self.keys.processing(queue), 0, id).await?;
        Ok(())
    }

    pub(crate) async fn ready_len(&self, queue: &str) -> Result<usize, ValqError> {
        let mut redis = self.connection().await?;
        let count: i64 = redis.llen(self.keys.ready(queue)).await?;
        Ok(count as usize)
    }

    /// Inspection only; the delivery protocol never reads whole lists.
    pub(crate) async fn ready_ids(&self, queue: &str) -> Result<Vec<JobId>, ValqError> {
        let mut redis = self.connection().await?;
        Ok(redis.lrange(self.keys.ready(queue), 0, -1).await?)
    }

    pub(crate) async fn processing_ids(&self, queue: &str) -> Result<Vec<JobId>, ValqError> {
        let mut redis = self.connection().await?;
        Ok(redis.lrange(self.keys.processing(queue), 0, -1).await?)
    }
}
