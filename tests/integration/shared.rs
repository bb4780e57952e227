use rand::distr::{Alphanumeric, SampleString};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub fn setup() -> deadpool_redis::Pool {
    dotenvy::from_filename(".env.test").ok();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();

    redis_pool()
}

pub fn redis_pool() -> deadpool_redis::Pool {
    let redis_url = std::env::var("REDIS_URL")
        .or_else(|_| std::env::var("VALKEY_URL"))
        .expect("REDIS_URL is not set");
    let mut cfg = deadpool_redis::Config::from_url(redis_url);
    cfg.pool = Some(deadpool_redis::PoolConfig {
        max_size: 10,
        timeouts: deadpool_redis::Timeouts {
            wait: Some(std::time::Duration::from_millis(500)),
            create: Some(std::time::Duration::from_millis(500)),
            recycle: Some(std::time::Duration::from_millis(500)),
        },
        ..Default::default()
    });
    cfg.create_pool(Some(deadpool_redis::Runtime::Tokio1))
        .expect("Failed to create Redis pool")
}

pub fn random_string() -> String {
    Alphanumeric.sample_string(&mut rand::rng(), 16)
}

/// A queue under a throwaway namespace, so tests sharing one server never
/// see each other's keys.
pub fn queue(pool: deadpool_redis::Pool, name: &str) -> valq::Queue {
    valq::Queue::builder()
        .namespace(random_string())
        .queue(name)
        .build_from_pool(pool)
}

pub fn sample_job(job_name: &str) -> valq::JobData {
    valq::JobData::new(job_name, br#"{"to":"person@example.com"}"#.to_vec())
}
