use chrono::DateTime;
use deadpool_redis::redis::AsyncCommands;
use testresult::TestResult;

use crate::shared::{queue, sample_job, setup};

/// The stored byte shape is a contract with external dashboards and
/// inspection tools; these tests pin it down as other systems would read it.

#[tokio::test]
async fn stored_records_use_integer_epoch_seconds() -> TestResult {
    let pool = setup();
    let queue = queue(pool.clone(), "emails");
    let data = sample_job("DelayedJob")
        .delayed_until(DateTime::from_timestamp(1_609_477_200, 0).unwrap()); // Jan 1, 2021

    let id = queue.enqueue(&data).await?;

    let mut redis = pool.get().await?;
    let raw: Vec<u8> = redis.get(format!("job:{id}")).await?;
    let value: serde_json::Value = serde_json::from_slice(&raw)?;

    assert_eq!(value["jobName"], serde_json::json!("DelayedJob"));
    assert!(value["delayUntil"].is_i64());
    assert_eq!(value["delayUntil"].as_i64(), Some(1_609_477_200));
    assert!(value["queuedAt"].is_i64());

    Ok(())
}

#[tokio::test]
async fn stored_bytes_are_exactly_the_codec_output() -> TestResult {
    let pool = setup();
    let queue = queue(pool.clone(), "emails");
    let data = sample_job("SendEmail");

    let id = queue.enqueue(&data).await?;

    let mut redis = pool.get().await?;
    let raw: Vec<u8> = redis.get(format!("job:{id}")).await?;

    assert_eq!(raw, valq::codec::encode(&data)?);
    assert_eq!(valq::codec::decode(&raw)?, data);

    Ok(())
}

#[tokio::test]
async fn list_keys_follow_the_published_layout() -> TestResult {
    let pool = setup();
    let queue = valq::Queue::builder()
        .namespace(crate::shared::random_string())
        .queue("emails")
        .build_from_pool(pool.clone());

    let id = queue.enqueue(&sample_job("SendEmail")).await?;
    queue.pop().await?;

    let mut redis = pool.get().await?;
    let processing: Vec<String> = redis
        .lrange(
            format!("{}[emails]-processing", queue.namespace()),
            0,
            -1,
        )
        .await?;

    assert_eq!(processing, vec![id]);

    Ok(())
}
