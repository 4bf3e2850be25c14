//! Metric normalization into the canonical snapshot shape

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use chrono_tz::Tz;
use log::debug;

use crate::models::{
    BurnRateInfo, MonitorSettings, ResetInfo, Snapshot, TimeFormat, UsageGroup, UsageMetrics,
};

/// Zone used when the configured timezone identifier does not parse
const FALLBACK_ZONE: Tz = chrono_tz::UTC;

/// Build a snapshot from processed usage metrics
///
/// Returns None when the metrics carry no reset deadline; that is the single
/// early-exit condition, and the caller writes nothing in that case. The
/// deadline is rendered exactly as supplied by the upstream aggregator, never
/// recomputed from a reset-hour policy.
pub fn build_snapshot(metrics: &UsageMetrics, settings: &MonitorSettings) -> Option<Snapshot> {
    let reset_time = metrics.reset_time?;
    let now = Utc::now();

    // Upstream-precomputed token percentage wins over a local recomputation
    // so the snapshot matches what the display layer showed
    let token_percent = match metrics.usage_percentage {
        Some(percent) => percent,
        None => ratio_percent(metrics.tokens_used as f64, metrics.token_limit as f64),
    };

    let seconds_remaining = (reset_time.with_timezone(&Utc) - now).num_seconds().max(0);

    Some(Snapshot {
        messages: UsageGroup {
            used: metrics.sent_messages,
            limit: metrics.messages_limit,
            percent: ratio_percent(metrics.sent_messages as f64, metrics.messages_limit as f64),
        },
        tokens: UsageGroup {
            used: metrics.tokens_used,
            limit: metrics.token_limit,
            percent: token_percent,
        },
        cost: UsageGroup {
            used: metrics.session_cost,
            limit: metrics.cost_limit,
            percent: ratio_percent(metrics.session_cost, metrics.cost_limit),
        },
        reset: ResetInfo {
            timestamp: reset_time.to_rfc3339(),
            seconds_remaining,
            formatted_time: format_reset_time(&reset_time, settings),
        },
        burn_rate: BurnRateInfo {
            tokens: round2(metrics.burn_rate),
            messages: round2(metrics.messages_burn_rate.unwrap_or(0.0)),
        },
        last_update: now.to_rfc3339_opts(SecondsFormat::Micros, false),
    })
}

/// Percentage of used over limit, rounded to 2 decimals
/// A limit of exactly 0 yields 0 rather than dividing; values above 100 pass
/// through unclamped.
fn ratio_percent(used: f64, limit: f64) -> f64 {
    if limit == 0.0 {
        return 0.0;
    }
    round2(used / limit * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Render the reset deadline in the configured timezone and clock format
fn format_reset_time(reset_time: &DateTime<FixedOffset>, settings: &MonitorSettings) -> String {
    let zone: Tz = settings.timezone.parse().unwrap_or_else(|_| {
        debug!(
            "Unknown timezone {:?}, falling back to {}",
            settings.timezone, FALLBACK_ZONE
        );
        FALLBACK_ZONE
    });

    let local = reset_time.with_timezone(&zone);
    match settings.time_format {
        TimeFormat::Hour24 => local.format("%H:%M").to_string(),
        TimeFormat::Hour12 => local.format("%I:%M %p").to_string(),
    }
}
