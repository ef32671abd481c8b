//! Relay-specific metrics, recorded through the process-wide recorder
//! installed by `service_core::middleware::metrics::init_metrics`.

use metrics::counter;

/// Count one webhook call by its outcome label.
pub fn record_webhook_outcome(outcome: &'static str) {
    counter!("webhook_requests_total", "outcome" => outcome).increment(1);
}
