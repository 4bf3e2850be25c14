//! Data models for usage state snapshots

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Processed usage metrics for the current monitoring window
///
/// Produced by an upstream aggregation component; this crate only renders it.
/// Missing counters default to 0 so a partially-populated record still
/// produces a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UsageMetrics {
    pub tokens_used: u64,
    pub token_limit: u64,
    /// Token usage percentage as precomputed upstream. When present it is
    /// copied into the snapshot verbatim instead of being recomputed from
    /// `tokens_used` / `token_limit`, so the published value never disagrees
    /// with what the display layer showed (including values above 100).
    pub usage_percentage: Option<f64>,
    pub session_cost: f64,
    pub cost_limit: f64,
    pub sent_messages: u32,
    pub messages_limit: u32,
    /// Token burn rate (tokens per minute)
    pub burn_rate: f64,
    /// Message burn rate; treated as 0 when the aggregator does not supply it
    pub messages_burn_rate: Option<f64>,
    /// Upstream-computed reset deadline. When absent, no snapshot is written.
    pub reset_time: Option<DateTime<FixedOffset>>,
}

/// Clock rendering preference for the formatted reset time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    Hour12,
    #[default]
    #[serde(rename = "24h")]
    Hour24,
}

/// Presentation settings supplied per call by the host monitor
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonitorSettings {
    /// IANA timezone identifier (e.g. "Europe/Warsaw"); unknown values fall
    /// back to UTC rather than failing the publish
    pub timezone: String,
    pub time_format: TimeFormat,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            timezone: "UTC".to_string(),
            time_format: TimeFormat::Hour24,
        }
    }
}

/// One usage group of the snapshot: consumed amount, limit, and percent
///
/// Generic over the counter type so integer counters (tokens, messages) stay
/// JSON integers while monetary values stay floats. Consumers type-check
/// these fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageGroup<T> {
    pub used: T,
    pub limit: T,
    pub percent: f64,
}

/// Reset deadline details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetInfo {
    /// ISO-8601 rendering of the upstream deadline, offset preserved
    pub timestamp: String,
    pub seconds_remaining: i64,
    /// Deadline in the configured timezone, "HH:MM" or "hh:MM AM/PM"
    pub formatted_time: String,
}

/// Consumption rates per resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnRateInfo {
    pub tokens: f64,
    pub messages: f64,
}

/// Canonical usage snapshot published to `current.json`
///
/// Rebuilt from scratch on every refresh tick and discarded after writing;
/// the file on disk is the only persisted state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub messages: UsageGroup<u32>,
    pub tokens: UsageGroup<u64>,
    pub cost: UsageGroup<f64>,
    pub reset: ResetInfo,
    pub burn_rate: BurnRateInfo,
    pub last_update: String,
}
