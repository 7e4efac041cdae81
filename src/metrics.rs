use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
    routing::get,
};
use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

static METRICS_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if metrics are enabled via the METRICS_ENABLED env var
pub fn is_metrics_enabled() -> bool {
    *METRICS_ENABLED.get_or_init(|| {
        std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true)
    })
}

/// Installs the Prometheus recorder and spawns its upkeep task.
/// Returns `Ok(None)` when metrics are disabled.
pub fn init_metrics() -> Result<Option<PrometheusHandle>, BuildError> {
    if !is_metrics_enabled() {
        return Ok(None);
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full("http_request_duration_seconds".to_string()),
            &[
                0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
            ],
        )?
        .install_recorder()?;

    let upkeep_handle = handle.clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            upkeep_handle.run_upkeep();
        }
    });

    Ok(Some(handle))
}

/// Metrics middleware to track HTTP requests
pub async fn metrics_middleware(req: Request, next: Next) -> Response {
    if !is_metrics_enabled() {
        return next.run(req).await;
    }

    let start = Instant::now();
    let method = req.method().as_str().to_owned();
    let uri_path = req.uri().path().to_owned();

    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_owned())
        .unwrap_or(uri_path);

    gauge!("http_requests_active").increment(1.0);

    let response = next.run(req).await;

    let latency = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!("http_requests_total", "method" => method.clone(), "path" => path.clone(), "status" => status).increment(1);
    histogram!("http_request_duration_seconds", "method" => method, "path" => path).record(latency);

    gauge!("http_requests_active").decrement(1.0);

    response
}

/// Router exposing the Prometheus scrape endpoint
pub fn metrics_app(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// Business metrics helpers

pub fn track_user_created() {
    if !is_metrics_enabled() {
        return;
    }
    counter!("users_created_total").increment(1);
}

pub fn track_jwt_issued() {
    if !is_metrics_enabled() {
        return;
    }
    counter!("jwt_tokens_issued_total").increment(1);
}

pub fn track_payment_recorded() {
    if !is_metrics_enabled() {
        return;
    }
    counter!("payments_recorded_total").increment(1);
}

pub fn track_enrollment() {
    if !is_metrics_enabled() {
        return;
    }
    counter!("class_enrollments_total").increment(1);
}
