// Prometheus metrics for the request-defense layer
//
// Exported by the embedding service on its /metrics endpoint:
// - Admission decisions (counters)
// - Tracked identifiers (gauge)
// - Sweep evictions (counter)
// - Issued CSRF tokens (counter)

use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, IntGauge, Registry, TextEncoder};
use std::sync::Arc;

lazy_static! {
    pub static ref REGISTRY: Arc<Registry> = Arc::new(Registry::new());

    // Admission metrics
    pub static ref REQUESTS_ALLOWED_TOTAL: IntCounter = IntCounter::new(
        "rate_limit_allowed_total",
        "Total number of requests admitted by the rate limiter"
    ).expect("Failed to create allowed requests metric");

    pub static ref REQUESTS_DENIED_TOTAL: IntCounter = IntCounter::new(
        "rate_limit_denied_total",
        "Total number of requests denied by the rate limiter"
    ).expect("Failed to create denied requests metric");

    // Registry metrics
    pub static ref TRACKED_IDENTIFIERS: IntGauge = IntGauge::new(
        "rate_limit_tracked_identifiers",
        "Number of identifiers currently tracked by the rate limiter"
    ).expect("Failed to create tracked identifiers metric");

    pub static ref SWEEP_EVICTIONS_TOTAL: IntCounter = IntCounter::new(
        "rate_limit_sweep_evictions_total",
        "Total number of stale entries evicted by the sweep"
    ).expect("Failed to create sweep evictions metric");

    // CSRF metrics
    pub static ref CSRF_TOKENS_ISSUED_TOTAL: IntCounter = IntCounter::new(
        "csrf_tokens_issued_total",
        "Total number of CSRF tokens generated"
    ).expect("Failed to create CSRF tokens metric");
}

/// Initialize metrics registry - must be called once at service startup
pub fn init() -> prometheus::Result<()> {
    REGISTRY.register(Box::new(REQUESTS_ALLOWED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(REQUESTS_DENIED_TOTAL.clone()))?;
    REGISTRY.register(Box::new(TRACKED_IDENTIFIERS.clone()))?;
    REGISTRY.register(Box::new(SWEEP_EVICTIONS_TOTAL.clone()))?;
    REGISTRY.register(Box::new(CSRF_TOKENS_ISSUED_TOTAL.clone()))?;
    Ok(())
}

/// Gather all metrics in Prometheus text format
pub fn gather_metrics() -> anyhow::Result<String> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to encode metrics: {}", e))?;
    String::from_utf8(buffer).map_err(|e| anyhow::anyhow!("Invalid UTF-8 in metrics: {}", e))
}
