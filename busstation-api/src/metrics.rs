use axum::{extract::State, http::header, response::IntoResponse, routing::get, Router};
use prometheus::{opts, IntCounterVec, Registry, TextEncoder};

use crate::error::AppError;
use crate::state::AppState;

pub const OUTCOMES: [&str; 6] = [
    "greeting",
    "answered",
    "fallback",
    "rejected",
    "upstream_error",
    "misconfigured",
];

/// Help-chat request counters, exposed on `/metrics`.
pub struct ChatMetrics {
    registry: Registry,
    requests: IntCounterVec,
}

impl ChatMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            opts!(
                "help_chat_requests_total",
                "Help chat requests by outcome"
            ),
            &["outcome"],
        )?;
        registry.register(Box::new(requests.clone()))?;

        // Every outcome is exported from the start, at zero
        for outcome in OUTCOMES {
            requests.with_label_values(&[outcome]);
        }

        Ok(Self { registry, requests })
    }

    pub fn record(&self, outcome: &str) {
        self.requests.with_label_values(&[outcome]).inc();
    }

    pub fn count(&self, outcome: &str) -> u64 {
        self.requests.with_label_values(&[outcome]).get()
    }

    pub fn export(&self) -> Result<String, prometheus::Error> {
        TextEncoder::new().encode_to_string(&self.registry.gather())
    }
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/metrics", get(export_metrics))
}

async fn export_metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .export()
        .map_err(|e| AppError::Internal(format!("Metrics encoding failed: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}
