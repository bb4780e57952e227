use crate::{
    ValqError,
    job_data::{JobData, JobId},
    job_store::JobStore,
    queue_builder::QueueBuilder,
    queue_lists::QueueLists,
    storage_keys::StorageKeys,
};

/// One named job queue: durable record storage plus the ready/processing
/// delivery protocol, behind the operations a worker loop consumes.
///
/// `Queue` is cheap to clone and safe to share; every clone issues commands
/// through the same connection pool, and all cross-worker coordination
/// happens server-side.
///
/// # Examples
///
/// ```rust,no_run
/// use valq::{JobData, Queue};
///
/// async fn example() -> Result<(), valq::ValqError> {
///     let queue = Queue::builder().from_env()?.queue("emails").build()?;
///
///     let id = queue.enqueue(&JobData::new("SendEmail", vec![])).await?;
///
///     if let Some(id) = queue.pop().await? {
///         let job = queue.get(&id).await?;
///         // ... run the handler for job.job_name ...
///         queue.clear(&id).await?;
///     }
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Queue {
    name: String,
    store: JobStore,
    lists: QueueLists,
}

impl Queue {
    /// Creates a new [`QueueBuilder`] for configuring and building a queue.
    pub fn builder() -> QueueBuilder {
        QueueBuilder::new()
    }

    pub(crate) fn new(
        pool: deadpool_redis::Pool,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let keys = StorageKeys::new(namespace);
        Self {
            name: name.into(),
            store: JobStore::new(pool.clone()),
            lists: QueueLists::new(pool, keys),
        }
    }

    /// The queue name, e.g. `emails`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The persistence prefix scoping this queue's keys.
    pub fn namespace(&self) -> &str {
        self.lists.namespace()
    }

    /// Loads and decodes the record stored for `id`.
    ///
    /// Fails with [`ValqError::JobNotFound`] when no record exists and
    /// [`ValqError::JobDecodeFailed`] when the stored bytes are corrupt. A
    /// record that fails to decode after its id was claimed stays in the
    /// processing list; requeueing it is the reaper's call, not this
    /// layer's.
    pub async fn get(&self, id: &JobId) -> Result<JobData, ValqError> {
        self.store.get(id).await
    }

    /// Writes (or overwrites) the record for `id`.
    pub async fn set(&self, id: &JobId, data: &JobData) -> Result<(), ValqError> {
        self.store.set(id, data).await
    }

    /// Hands `id` to the ready list and scrubs any stale claim it still
    /// holds in the processing list.
    pub async fn push(&self, id: &JobId) -> Result<(), ValqError> {
        tracing::trace!(job_id = %id, queue = %self.name, "Queueing job");
        self.lists.push(&self.name, id).await
    }

    /// Claims the oldest ready identifier, or returns `None` when idle.
    ///
    /// The claim is a single atomic move into the processing list; the job
    /// stays claimed until [`Queue::clear`] or a re-[`Queue::push`].
    pub async fn pop(&self) -> Result<Option<JobId>, ValqError> {
        let claimed = self.lists.pop(&self.name).await?;
        if let Some(id) = &claimed {
            tracing::trace!(job_id = %id, queue = %self.name, "Claimed job");
        }
        Ok(claimed)
    }

    /// Acknowledges `id`: drops its processing-list claim, then deletes its
    /// record.
    ///
    /// The two steps are separate store calls, list first. A crash in
    /// between leaves an unreferenced record for a TTL sweep to collect —
    /// never a record that still looks claimed.
    pub async fn clear(&self, id: &JobId) -> Result<(), ValqError> {
        self.lists.clear(&self.name, id).await?;
        self.store.delete(id).await
    }

    /// Stores `data` under a fresh identifier and hands it to the ready
    /// list: exactly [`Queue::set`] followed by [`Queue::push`].
    pub async fn enqueue(&self, data: &JobData) -> Result<JobId, ValqError> {
        let id: JobId = uuid::Uuid::new_v4().to_string();
        tracing::trace!(job_id = %id, job = %data.job_name, queue = %self.name, "Enqueuing job");
        self.set(&id, data).await?;
        self.push(&id).await?;
        Ok(id)
    }

    /// Number of identifiers awaiting a claim.
    pub async fn ready_len(&self) -> Result<usize, ValqError> {
        self.lists.ready_len(&self.name).await
    }

    /// Identifiers awaiting a claim, newest first. Inspection only.
    pub async fn ready_ids(&self) -> Result<Vec<JobId>, ValqError> {
        self.lists.ready_ids(&self.name).await
    }

    /// Identifiers currently claimed. Inspection only: an entry that
    /// outlives its worker is what an external reaper looks for.
    pub async fn processing_ids(&self) -> Result<Vec<JobId>, ValqError> {
        self.lists.processing_ids(&self.name).await
    }
}
