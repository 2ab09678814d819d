//! Load-test orchestration: spawn the virtual-user fleet, wait it out,
//! finalize and publish the result.

use crate::config::{JOIN_GRACE, RAMP_UP_STAGGER, TestConfig};
use crate::history::TestHistory;
use crate::result::{RunResult, RunSummary};
use crate::user::simulate_user;
use reqwest::Client;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use time::OffsetDateTime;
use tokio::time::timeout;
#[allow(unused_imports)]
use tracing::{debug, error, info, warn};

/// One load-test invocation against a target endpoint.
///
/// Configured fluently and consumed by [`run`](LoadTest::run). Holds no state
/// between invocations; each `LoadTest` is independent.
///
/// # Example
/// ```no_run
/// use stampede::prelude::*;
/// use std::time::Duration;
///
/// # async fn example() {
/// let history = TestHistory::new();
/// let summary = LoadTest::new("http://localhost:5000/api/payment/process")
///     .users(50)
///     .duration(Duration::from_secs(60))
///     .run(&history)
///     .await;
/// # }
/// ```
pub struct LoadTest {
    config: TestConfig,
}

impl LoadTest {
    pub fn new(target: &str) -> Self {
        Self {
            config: TestConfig::new(target),
        }
    }

    /// Number of virtual users to spawn. Each issues exactly one request.
    /// Zero is accepted and produces a degenerate all-zero run.
    pub fn users(mut self, users: u32) -> Self {
        self.config.users = users;
        self
    }

    /// Nominal test duration. Advisory: it sizes the completion wait window
    /// (`duration + 5s` per task) but never cuts off in-flight requests.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.config.duration = duration;
        self
    }

    /// Run the test to completion and publish the summary into `history`.
    ///
    /// Infallible: per-request failures are folded into the result, so a
    /// summary comes back even if every request failed.
    pub async fn run(self, history: &TestHistory) -> RunSummary {
        let config = self.config;
        info!(
            "Starting load test with {} users for {}s against {}",
            config.users,
            config.duration.as_secs(),
            config.target
        );

        let result = Arc::new(Mutex::new(RunResult::new(
            config.users,
            config.duration.as_secs(),
        )));
        let client = Client::new();

        let mut tasks = Vec::with_capacity(config.users as usize);
        for user_id in 1..=config.users {
            tasks.push(tokio::spawn(simulate_user(
                user_id,
                client.clone(),
                config.target.clone(),
                result.clone(),
            )));
            tokio::time::sleep(RAMP_UP_STAGGER).await;
        }

        // Best-effort join: each handle gets at most duration + grace. A
        // straggler is logged and left running; the snapshot below is taken
        // without it, and its late record is discarded with the shared
        // result.
        let wait_window = config.duration + JOIN_GRACE;
        for (index, task) in tasks.into_iter().enumerate() {
            match timeout(wait_window, task).await {
                Ok(Ok(())) => {}
                Ok(Err(err)) => error!("User {} task panicked: {err}", index + 1),
                Err(_) => warn!(
                    "User {} did not complete within {:?}",
                    index + 1,
                    wait_window
                ),
            }
        }

        let summary = {
            let mut result = result.lock().expect("run result lock poisoned");
            result.end_time = Some(OffsetDateTime::now_utc());
            result.summarize()
        };

        history.record(summary.clone());

        info!("Load test completed: {summary}");
        summary
    }
}

/// Plain entry point over [`LoadTest`] for callers that already hold raw
/// parameters (e.g. a web layer deserializing a request body).
pub async fn run_load_test(
    target: &str,
    users: u32,
    duration: Duration,
    history: &TestHistory,
) -> RunSummary {
    LoadTest::new(target)
        .users(users)
        .duration(duration)
        .run(history)
        .await
}
