//! Prometheus metrics for ask-gateway.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

struct GatewayMetrics {
    registry: Registry,
    ask_requests_total: IntCounterVec,
    completion_latency_seconds: HistogramVec,
    completion_errors_total: IntCounterVec,
    completion_tokens_total: IntCounterVec,
}

static METRICS: OnceLock<GatewayMetrics> = OnceLock::new();

/// Initialize all metrics. Safe to call more than once.
pub fn init_metrics() -> Result<(), prometheus::Error> {
    if METRICS.get().is_some() {
        return Ok(());
    }

    let metrics = build_metrics()?;
    if METRICS.set(metrics).is_err() {
        tracing::debug!("Metrics registry initialized concurrently; keeping the first");
        return Ok(());
    }

    tracing::info!("Prometheus metrics initialized");
    Ok(())
}

fn build_metrics() -> Result<GatewayMetrics, prometheus::Error> {
    let registry = Registry::new();

    let ask_requests_total = IntCounterVec::new(
        Opts::new("ask_requests_total", "Total /ask requests by outcome"),
        &["outcome"],
    )?;

    let completion_latency_seconds = HistogramVec::new(
        HistogramOpts::new(
            "completion_latency_seconds",
            "Completion service latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0, 30.0, 60.0, 120.0]),
        &["provider", "model"],
    )?;

    let completion_errors_total = IntCounterVec::new(
        Opts::new("completion_errors_total", "Total completion service errors"),
        &["provider", "error_type"],
    )?;

    let completion_tokens_total = IntCounterVec::new(
        Opts::new("completion_tokens_total", "Total tokens reported by the completion service"),
        &["model", "type"], // type: input, output
    )?;

    registry.register(Box::new(ask_requests_total.clone()))?;
    registry.register(Box::new(completion_latency_seconds.clone()))?;
    registry.register(Box::new(completion_errors_total.clone()))?;
    registry.register(Box::new(completion_tokens_total.clone()))?;

    Ok(GatewayMetrics {
        registry,
        ask_requests_total,
        completion_latency_seconds,
        completion_errors_total,
        completion_tokens_total,
    })
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let metrics = match METRICS.get() {
        Some(m) => m,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    if let Err(e) = encoder.encode(&metrics.registry.gather(), &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

// Helper functions for recording metrics

/// Record a finished `/ask` request; `outcome` is `success` or `error`.
pub fn record_ask(outcome: &str) {
    if let Some(m) = METRICS.get() {
        m.ask_requests_total.with_label_values(&[outcome]).inc();
    }
}

pub fn record_completion_latency(provider: &str, model: &str, duration_secs: f64) {
    if let Some(m) = METRICS.get() {
        m.completion_latency_seconds
            .with_label_values(&[provider, model])
            .observe(duration_secs);
    }
}

pub fn record_completion_error(provider: &str, error_type: &str) {
    if let Some(m) = METRICS.get() {
        m.completion_errors_total
            .with_label_values(&[provider, error_type])
            .inc();
    }
}

pub fn record_tokens(model: &str, input_tokens: u64, output_tokens: u64) {
    if let Some(m) = METRICS.get() {
        m.completion_tokens_total
            .with_label_values(&[model, "input"])
            .inc_by(input_tokens);
        m.completion_tokens_total
            .with_label_values(&[model, "output"])
            .inc_by(output_tokens);
    }
}
