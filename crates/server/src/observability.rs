use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};
use service::errors::ServiceError;

// Prometheus metrics (default registry)
pub static PEOPLE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "people_operations_total",
        "People directory operations by outcome",
        &["operation", "outcome"]
    )
    .expect("register people_operations_total")
});

fn outcome(err: Option<&ServiceError>) -> &'static str {
    match err {
        None => "ok",
        Some(ServiceError::NotFound(_)) => "not_found",
        Some(ServiceError::AlreadyExists(_)) => "already_exists",
        Some(ServiceError::InvalidInput(_)) => "invalid_input",
    }
}

/// Count one directory operation by its result.
pub fn record<T>(operation: &str, result: &Result<T, ServiceError>) {
    PEOPLE_OPERATIONS_TOTAL
        .with_label_values(&[operation, outcome(result.as_ref().err())])
        .inc();
}

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}
