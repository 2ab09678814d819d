//! Mock payment processor used as a load-test target: variable latency and a
//! fixed random failure rate, plus a deterministic route for tests that need
//! predictable outcomes.

use axum::{debug_handler, extract::Path, http::StatusCode, routing::post, Json, Router};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info, warn};

const FAILURE_RATE: f64 = 0.05;

pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router()).await?;
    Ok(())
}

pub fn router() -> Router {
    Router::new()
        .route("/api/payment/process", post(process_payment))
        .route("/api/payment/reliable/:delay_ms", post(reliable))
}

#[derive(Debug, Deserialize)]
pub struct PaymentRequest {
    pub amount: u32,
    pub card_number: String,
    pub expiry: String,
    pub cvv: String,
    pub user_id: u32,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct PaymentResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub processing_time: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Simulated gateway: 100-500ms processing time, 5% failure rate.
#[debug_handler]
pub async fn process_payment(
    Json(payment): Json<PaymentRequest>,
) -> (StatusCode, Json<PaymentResponse>) {
    debug!(
        "Processing payment: user_id={} amount={}",
        payment.user_id, payment.amount
    );

    // Draw before the await; thread_rng is not Send.
    let (processing_time, failed) = {
        let mut rng = rand::thread_rng();
        (rng.gen_range(0.1..0.5), rng.gen_bool(FAILURE_RATE))
    };
    tokio::time::sleep(Duration::from_secs_f64(processing_time)).await;

    if failed {
        warn!("Payment processing failed (simulated) - Time: {processing_time:.3}s");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(PaymentResponse {
                status: "failed",
                message: "Payment processing failed",
                processing_time,
                transaction_id: None,
            }),
        );
    }

    let transaction_id = format!("TXN{}", rand::thread_rng().gen_range(100_000..=999_999));
    info!("Payment processed successfully - Time: {processing_time:.3}s");
    (
        StatusCode::OK,
        Json(PaymentResponse {
            status: "success",
            message: "Payment processed successfully",
            processing_time,
            transaction_id: Some(transaction_id),
        }),
    )
}

/// Deterministic variant: always succeeds after a fixed delay.
#[debug_handler]
pub async fn reliable(
    Path(delay_ms): Path<u64>,
    Json(payment): Json<PaymentRequest>,
) -> Json<PaymentResponse> {
    debug!("Reliable payment: user_id={}", payment.user_id);
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    Json(PaymentResponse {
        status: "success",
        message: "Payment processed successfully",
        processing_time: delay_ms as f64 / 1000.0,
        transaction_id: Some(format!("TXN{:06}", payment.user_id)),
    })
}
