mod utils;
use utils::*;

use stampede::prelude::*;
use std::time::Duration;

fn reliable_target(delay_ms: u64) -> String {
    format!("{GATEWAY}/api/payment/reliable/{delay_ms}")
}

#[tokio::test]
async fn zero_users_yields_degenerate_run() {
    init().await;

    let history = TestHistory::new();
    let summary = run_load_test(
        &reliable_target(10),
        0,
        Duration::from_secs(10),
        &history,
    )
    .await;

    assert_eq!(summary.total_requests, 0);
    assert_eq!(summary.success_rate, 0.0);
    assert_eq!(summary.requests_per_second, 0.0);
    assert_eq!(summary.avg_response_time, 0.0);
    assert_eq!(history.len(), 1);
}

#[tokio::test]
async fn five_users_against_fast_target_all_succeed() {
    init().await;

    let history = TestHistory::new();
    let summary = LoadTest::new(&reliable_target(10))
        .users(5)
        .duration(Duration::from_secs(1))
        .run(&history)
        .await;

    assert_eq!(summary.total_requests, 5);
    assert_eq!(summary.successful_requests, 5);
    assert_eq!(summary.failed_requests, 0);
    assert_eq!(summary.success_rate, 100.0);

    assert!(summary.min_response_time <= summary.avg_response_time);
    assert!(summary.avg_response_time <= summary.max_response_time);
    assert!(summary.p95_response_time <= summary.p99_response_time);
    assert!(summary.requests_per_second > 0.0);
}

#[tokio::test]
async fn unreachable_target_records_failures_not_errors() {
    init().await;

    // Nothing listens here; every request is a transport failure, but the
    // run still completes with a full latency accounting.
    let history = TestHistory::new();
    let summary = LoadTest::new("http://127.0.0.1:39999/api/payment/process")
        .users(3)
        .duration(Duration::from_secs(1))
        .run(&history)
        .await;

    assert_eq!(summary.total_requests, 3);
    assert_eq!(summary.successful_requests, 0);
    assert_eq!(summary.failed_requests, 3);
    assert_eq!(summary.success_rate, 0.0);
}

#[tokio::test]
async fn history_and_aggregate_track_runs() {
    init().await;

    let history = TestHistory::new();
    for _ in 0..2 {
        LoadTest::new(&reliable_target(5))
            .users(2)
            .duration(Duration::from_secs(1))
            .run(&history)
            .await;
    }

    let runs = history.list_all();
    assert_eq!(runs.len(), 2);
    // Oldest first.
    assert!(runs[0].start_time.unwrap() <= runs[1].start_time.unwrap());

    let metrics = history.aggregate().expect("two runs stored");
    assert_eq!(metrics.total_tests, 2);
    assert_eq!(metrics.total_requests, 4);
    assert_eq!(metrics.total_successful, 4);
    assert_eq!(metrics.total_failed, 0);
    assert_eq!(metrics.avg_success_rate, 100.0);
}

#[tokio::test]
async fn summary_round_trips_through_json() -> anyhow::Result<()> {
    init().await;

    let history = TestHistory::new();
    let summary = LoadTest::new(&reliable_target(5))
        .users(2)
        .duration(Duration::from_secs(1))
        .run(&history)
        .await;

    let json = serde_json::to_value(&summary)?;
    assert!(json["start_time"].as_str().unwrap().contains('T'));
    assert_eq!(json["concurrent_users"], 2);
    assert_eq!(json["test_duration"], 1);

    let back: RunSummary = serde_json::from_value(json)?;
    assert_eq!(back.total_requests, summary.total_requests);
    assert_eq!(back.success_rate, summary.success_rate);
    Ok(())
}
