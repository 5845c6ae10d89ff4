//! Account information returned by `/user/info`.

use serde::Deserialize;

use super::subscription::{Timestamp, format_unix_date};

/// Placeholder shown instead of the UUID until the user reveals it.
pub const MASKED_UUID: &str = "••••••••-••••-••••-••••-••••••••••••";

/// The logged-in user's account.
#[allow(dead_code)] // Full backend payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserInfo {
    pub email: String,
    #[serde(default)]
    pub transfer_enable: u64,
    #[serde(default)]
    pub last_login_at: Option<i64>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub banned: i64,
    #[serde(default)]
    pub remind_expire: i64,
    #[serde(default)]
    pub remind_traffic: i64,
    #[serde(default)]
    pub expired_at: Option<Timestamp>,
    /// Balance in cents.
    #[serde(default)]
    pub balance: i64,
    /// Commission balance in cents.
    #[serde(default)]
    pub commission_balance: i64,
    #[serde(default)]
    pub plan_id: Option<i64>,
    #[serde(default)]
    pub discount: Option<i64>,
    #[serde(default)]
    pub commission_rate: Option<i64>,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl UserInfo {
    /// UUID, or the mask when `revealed` is false.
    #[must_use]
    pub fn uuid_display(&self, revealed: bool) -> &str {
        if revealed { &self.uuid } else { MASKED_UUID }
    }

    #[must_use]
    pub fn balance_label(&self) -> String {
        format_cents(self.balance)
    }

    #[must_use]
    pub fn commission_label(&self) -> String {
        format_cents(self.commission_balance)
    }

    #[must_use]
    pub fn member_since(&self) -> String {
        format_unix_date(self.created_at)
    }

    /// A zero or missing Telegram id means not linked.
    #[must_use]
    pub fn telegram_connected(&self) -> bool {
        self.telegram_id.is_some_and(|id| id != 0)
    }
}

/// Formats cents as `¥12.34`.
#[must_use]
pub fn format_cents(cents: i64) -> String {
    format!("¥{:.2}", cents as f64 / 100.0)
}

/// Response body of `/user/uuid/reset`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResetUuid {
    pub uuid: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(json: serde_json::Value) -> UserInfo {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_uuid_masking() {
        let info = user(serde_json::json!({"email": "a@b.c", "uuid": "1234"}));
        assert_eq!(info.uuid_display(false), MASKED_UUID);
        assert_eq!(info.uuid_display(true), "1234");
    }

    #[test]
    fn test_money_labels() {
        let info = user(serde_json::json!({
            "email": "a@b.c", "balance": 1234, "commission_balance": 5
        }));
        assert_eq!(info.balance_label(), "¥12.34");
        assert_eq!(info.commission_label(), "¥0.05");
    }

    #[test]
    fn test_telegram_connected() {
        assert!(!user(serde_json::json!({"email": "x"})).telegram_connected());
        assert!(!user(serde_json::json!({"email": "x", "telegram_id": 0})).telegram_connected());
        assert!(user(serde_json::json!({"email": "x", "telegram_id": 42})).telegram_connected());
    }
}
