use crate::config::REQUEST_TIMEOUT;
use crate::error::RequestError;
use crate::result::RunResult;
use rand::Rng;
use reqwest::Client;
use serde::Serialize;
use std::sync::{Arc, Mutex};
use std::time::Instant;
use time::OffsetDateTime;
use tracing::{error, warn};

/// Synthetic payment payload sent by each virtual user. Card fields are fixed
/// test fixtures, not real financial data.
#[derive(Debug, Serialize)]
struct PaymentRequest {
    amount: u32,
    card_number: &'static str,
    expiry: &'static str,
    cvv: &'static str,
    user_id: u32,
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

impl PaymentRequest {
    fn synthetic(user_id: u32) -> Self {
        Self {
            amount: rand::thread_rng().gen_range(10..=1000),
            card_number: "4111111111111111",
            expiry: "12/25",
            cvv: "123",
            user_id,
            timestamp: OffsetDateTime::now_utc(),
        }
    }
}

/// One simulated user: a single timed request, then exactly one locked update
/// into the shared result. Failures of any kind (non-2xx, timeout, transport)
/// still contribute an elapsed-to-failure latency data point. No retries.
pub(crate) async fn simulate_user(
    user_id: u32,
    client: Client,
    target: String,
    result: Arc<Mutex<RunResult>>,
) {
    let start = Instant::now();
    let outcome = issue_request(user_id, &client, &target).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;

    let success = match outcome {
        Ok(()) => true,
        Err(err @ RequestError::Status(_)) => {
            warn!("User {user_id}: {err}");
            false
        }
        Err(err) => {
            error!("User {user_id}: {err}");
            false
        }
    };

    #[cfg(feature = "metrics")]
    {
        metrics::histogram!("stampede.request.latency").record(latency_ms);
        if success {
            metrics::counter!("stampede.request.success").increment(1);
        } else {
            metrics::counter!("stampede.request.error").increment(1);
        }
    }

    result
        .lock()
        .expect("run result lock poisoned")
        .record(success, latency_ms);
}

async fn issue_request(user_id: u32, client: &Client, target: &str) -> Result<(), RequestError> {
    let payload = PaymentRequest::synthetic(user_id);
    let response = client
        .post(target)
        .timeout(REQUEST_TIMEOUT)
        .json(&payload)
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(RequestError::Status(response.status()))
    }
}
