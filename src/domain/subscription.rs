//! Subscription types returned by `/user/getSubscribe`.

use chrono::{DateTime, Local, TimeZone};
use serde::Deserialize;

use super::plan::PurchasePlan;

/// Bytes per gigabyte as the dashboard reports traffic (binary units).
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

// ============================================================================
// Timestamps
// ============================================================================

/// A backend timestamp that may arrive as unix seconds or as preformatted text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Unix(i64),
    Text(String),
}

impl Timestamp {
    /// Formats the timestamp as a local date (`YYYY-MM-DD`).
    ///
    /// Text values are shown as-is.
    #[must_use]
    pub fn display_date(&self) -> String {
        match self {
            Self::Unix(secs) => format_unix_date(*secs),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Formats unix seconds as a local calendar date.
#[must_use]
pub fn format_unix_date(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .single()
        .map(|dt: DateTime<Local>| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| secs.to_string())
}

// ============================================================================
// Subscription
// ============================================================================

/// The user's active subscription.
#[allow(dead_code)] // Full backend payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subscription {
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub expired_at: Option<Timestamp>,
    /// Uploaded bytes.
    #[serde(default)]
    pub u: u64,
    /// Downloaded bytes.
    #[serde(default)]
    pub d: u64,
    /// Traffic quota in bytes.
    #[serde(default)]
    pub transfer_enable: u64,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub plan: Option<PurchasePlan>,
    /// Base subscription URL; opaque to the dashboard.
    #[serde(default)]
    pub subscribe_url: String,
    #[serde(default)]
    pub reset_day: Option<i64>,
}

impl Subscription {
    /// Plan name, or a placeholder when there is no plan.
    #[must_use]
    pub fn plan_name(&self) -> &str {
        self.plan
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or("No active subscription")
    }

    #[must_use]
    pub fn has_plan(&self) -> bool {
        self.plan.is_some()
    }

    /// Expiry date, or `Never` when the subscription does not expire.
    #[must_use]
    pub fn expiry_label(&self) -> String {
        match &self.expired_at {
            Some(Timestamp::Text(text)) if text.is_empty() => "Never".to_string(),
            Some(ts) => ts.display_date(),
            None => "Never".to_string(),
        }
    }

    #[must_use]
    pub fn usage(&self) -> TrafficUsage {
        TrafficUsage {
            used: self.u.saturating_add(self.d),
            total: self.transfer_enable,
        }
    }
}

// ============================================================================
// Traffic Usage
// ============================================================================

/// Used versus available traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrafficUsage {
    pub used: u64,
    pub total: u64,
}

impl TrafficUsage {
    /// Percentage used, not capped. A zero quota reports 0.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.used as f64 / self.total as f64 * 100.0
        }
    }

    /// Ratio for a progress bar, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn bar_ratio(&self) -> f64 {
        (self.percent() / 100.0).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn used_gb(&self) -> String {
        format_gb(self.used)
    }

    #[must_use]
    pub fn total_gb(&self) -> String {
        format_gb(self.total)
    }

    /// Label such as `42.5% Used`.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.1}% Used", self.percent())
    }
}

/// Formats a byte count as gigabytes with two decimals.
#[must_use]
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2} GB", bytes as f64 / BYTES_PER_GB)
}

// ============================================================================
// Tests
// ============================================================================
