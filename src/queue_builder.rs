use crate::{ValqError, queue::Queue};

/// Configures and builds [`Queue`] instances.
///
/// The backing pool is always handed over explicitly — built here from a URL
/// or the environment, or injected ready-made with
/// [`QueueBuilder::build_from_pool`]. There is no process-wide store handle.
///
/// # Examples
///
/// ```rust,no_run
/// let queue = valq::Queue::builder()
///     .url("redis://localhost:6379")
///     .namespace("myapp")
///     .queue("emails")
///     .build()?;
/// # Ok::<(), valq::ValqError>(())
/// ```
#[derive(Debug, Default)]
pub struct QueueBuilder {
    url: Option<String>,
    namespace: Option<String>,
    queue: Option<String>,
}

impl QueueBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the connection URL from `REDIS_URL`, falling back to
    /// `VALKEY_URL`.
    pub fn from_env(mut self) -> Result<Self, ValqError> {
        let url = std::env::var("REDIS_URL")
            .or_else(|_| std::env::var("VALKEY_URL"))
            .map_err(|_| ValqError::Config("neither REDIS_URL nor VALKEY_URL is set".into()))?;
        self.url = Some(url);
        Ok(self)
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Persistence prefix scoping every key this queue touches. Defaults to
    /// `valq`.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Queue name. Defaults to `default`.
    pub fn queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    /// Builds a pool from the configured URL, then the queue.
    pub fn build(mut self) -> Result<Queue, ValqError> {
        let url = self
            .url
            .take()
            .ok_or_else(|| ValqError::Config("no connection URL; call url() or from_env()".into()))?;
        let cfg = deadpool_redis::Config::from_url(url);
        let pool = cfg.create_pool(Some(deadpool_redis::Runtime::Tokio1))?;
        Ok(self.build_from_pool(pool))
    }

    /// Builds the queue on an existing pool, shared with the rest of the
    /// application.
    pub fn build_from_pool(self, pool: deadpool_redis::Pool) -> Queue {
        Queue::new(
            pool,
            self.namespace.unwrap_or_default(),
            self.queue.unwrap_or_else(|| "default".to_string()),
        )
    }
}
