//! Telemetry metric name constants.
//!
//! Consumers install their own `metrics` recorder; without one every metric
//! call is a no-op.
//!
//! All metrics are prefixed with `bench_router_`. Counters end in `_total`.
//!
//! # Common labels
//!
//! - `cache`: `"leaderboard"` or `"catalog"`
//! - `upstream`: `"leaderboard"`, `"catalog"` or `"chat"`
//! - `status`: `"ok"` or `"error"`
//! - `source`: the resolution tier, `"static"`, `"dynamic"`, `"fuzzy"`,
//!   `"excluded"` or `"none"`

/// Cache lookups answered from a fresh entry.
///
/// Labels: `cache`.
pub const CACHE_HITS_TOTAL: &str = "bench_router_cache_hits_total";

/// Cache lookups that had to run the producer.
///
/// Labels: `cache`.
pub const CACHE_MISSES_TOTAL: &str = "bench_router_cache_misses_total";

/// Requests sent to an upstream API.
///
/// Labels: `upstream`, `status`.
pub const UPSTREAM_REQUESTS_TOTAL: &str = "bench_router_upstream_requests_total";

/// Identifier resolutions, by outcome.
///
/// Labels: `source`.
pub const RESOLUTIONS_TOTAL: &str = "bench_router_resolutions_total";

/// Tokens consumed by chat completions.
///
/// Labels: `direction` (`"prompt"` | `"completion"`).
pub const TOKENS_TOTAL: &str = "bench_router_tokens_total";
