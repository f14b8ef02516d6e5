//! Telemetry metric name constants.
//!
//! Centralised metric names for enka operations. Consumers install their own
//! `metrics` recorder (e.g. prometheus, statsd); without a recorder
//! installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `enka_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `status`: outcome: "ok" or the HTTP status code of a failed call
//! - `table`: asset table name (e.g. "characters", "text map")

/// Total showcase requests that reached the network.
///
/// Labels: `status` ("ok" | HTTP status code | "error").
pub const REQUESTS_TOTAL: &str = "enka_requests_total";

/// Showcase request duration in seconds, cache hits excluded.
pub const REQUEST_DURATION_SECONDS: &str = "enka_request_duration_seconds";

/// Total response cache hits.
pub const CACHE_HITS_TOTAL: &str = "enka_cache_hits_total";

/// Total response cache misses.
pub const CACHE_MISSES_TOTAL: &str = "enka_cache_misses_total";

/// Total asset table loads.
///
/// Labels: `table`, `status` ("ok" | "error").
pub const ASSET_LOADS_TOTAL: &str = "enka_asset_loads_total";
