//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder (e.g. prometheus,
//! statsd); without a recorder installed, all metric calls are no-ops.
//!
//! All metrics are prefixed with `ml_gateway_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `provider`: provider name (e.g. "fixed-sentiment", "facebook")
//! - `operation`: capability invoked ("sentiment", "classification", "keywords", "optimize")
//! - `status`: outcome, "ok" or "error"

/// Total requests dispatched through the provider registry.
///
/// Labels: `provider`, `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "ml_gateway_requests_total";

/// Dispatch duration in seconds.
///
/// Labels: `provider`, `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "ml_gateway_request_duration_seconds";

/// Requests rejected before dispatch because of invalid input.
///
/// Labels: `operation`.
pub const REJECTED_TOTAL: &str = "ml_gateway_rejected_total";
