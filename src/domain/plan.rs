//! Purchasable plans and the billing-period view over them.

use serde::Deserialize;

// ============================================================================
// Purchase Plan
// ============================================================================

/// A plan as listed by `/user/plan/fetch`. Prices are in cents.
#[allow(dead_code)] // Full backend payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PurchasePlan {
    pub id: i64,
    #[serde(default)]
    pub group_id: Option<i64>,
    #[serde(default)]
    pub transfer_enable: Option<u64>,
    pub name: String,
    #[serde(default)]
    pub speed_limit: Option<u64>,
    #[serde(default)]
    pub show: i64,
    #[serde(default)]
    pub sort: i64,
    #[serde(default)]
    pub renew: i64,
    /// HTML description.
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub month_price: Option<u64>,
    #[serde(default)]
    pub quarter_price: Option<u64>,
    #[serde(default)]
    pub half_year_price: Option<u64>,
    #[serde(default)]
    pub year_price: Option<u64>,
    #[serde(default)]
    pub two_year_price: Option<u64>,
    #[serde(default)]
    pub three_year_price: Option<u64>,
    #[serde(default)]
    pub onetime_price: Option<u64>,
    #[serde(default)]
    pub reset_price: Option<u64>,
    #[serde(default)]
    pub reset_traffic_method: Option<i64>,
    #[serde(default)]
    pub capacity_limit: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl PurchasePlan {
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.show == 1
    }

    /// Price for `period` in currency units, zero when the plan has none.
    #[must_use]
    pub fn price_for(&self, period: BillingPeriod) -> f64 {
        let cents = match period {
            BillingPeriod::Monthly => self.month_price,
            BillingPeriod::Yearly => self.year_price,
        };
        cents.map_or(0.0, |c| c as f64 / 100.0)
    }

    /// Plain-text lines of the HTML description.
    #[must_use]
    pub fn content_lines(&self) -> Vec<String> {
        html_to_lines(&self.content)
    }
}

// ============================================================================
// Billing Period
// ============================================================================

/// Which prices the plan listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingPeriod {
    #[default]
    Monthly,
    Yearly,
}

impl BillingPeriod {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Monthly => "Monthly billing",
            Self::Yearly => "Annual billing",
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Monthly => "month",
            Self::Yearly => "year",
        }
    }

    /// Whether `plan` is listed under this period.
    ///
    /// The annual view only lists plans that are sold yearly and not monthly.
    #[must_use]
    pub const fn includes(self, plan: &PurchasePlan) -> bool {
        match self {
            Self::Monthly => plan.month_price.is_some(),
            Self::Yearly => plan.year_price.is_some() && plan.month_price.is_none(),
        }
    }
}

/// Keeps visible plans and orders them by their `sort` key.
#[must_use]
pub fn visible_plans(plans: Vec<PurchasePlan>) -> Vec<PurchasePlan> {
    let mut plans: Vec<PurchasePlan> = plans.into_iter().filter(PurchasePlan::is_visible).collect();
    plans.sort_by_key(|p| p.sort);
    plans
}

/// Plans shown for `period`, borrowing from an already visible list.
#[must_use]
pub fn plans_for_period(plans: &[PurchasePlan], period: BillingPeriod) -> Vec<&PurchasePlan> {
    plans.iter().filter(|p| period.includes(p)).collect()
}

// ============================================================================
// HTML Content
// ============================================================================

/// Reduces an HTML fragment to trimmed, non-empty text lines.
///
/// Block-level closing tags and `<br>` start a new line; all other tags are
/// dropped. A handful of common entities are decoded.
#[must_use]
pub fn html_to_lines(html: &str) -> Vec<String> {
    let mut text = String::with_capacity(html.len());
    let mut tag = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match (in_tag, c) {
            (false, '<') => {
                in_tag = true;
                tag.clear();
            }
            (true, '>') => {
                in_tag = false;
                let name = tag
                    .trim_start_matches('/')
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .trim_end_matches('/')
                    .to_ascii_lowercase();
                let breaks = matches!(name.as_str(), "br" | "p" | "div" | "li" | "ul" | "h1" | "h2" | "h3" | "h4");
                if breaks {
                    text.push('\n');
                }
            }
            (true, c) => tag.push(c),
            (false, c) => text.push(c),
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
        .lines()
        .map(|l| l.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|l| !l.is_empty())
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
