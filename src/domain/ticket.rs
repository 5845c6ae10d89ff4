//! Support tickets from `/user/ticket/fetch`.

use serde::Deserialize;

use super::subscription::format_unix_date;

/// A support ticket summary.
#[allow(dead_code)] // Full backend payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    #[serde(deserialize_with = "status_from_any")]
    pub status: String,
    #[serde(default)]
    pub created_at: i64,
}

/// Rendering class of a ticket's status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Open,
    Pending,
    Other,
}

impl Ticket {
    #[must_use]
    pub fn status_kind(&self) -> TicketStatus {
        match self.status.as_str() {
            "open" => TicketStatus::Open,
            "pending" => TicketStatus::Pending,
            _ => TicketStatus::Other,
        }
    }

    #[must_use]
    pub fn created_date(&self) -> String {
        format_unix_date(self.created_at)
    }
}

/// Some backends send the status as a number; keep it as text either way.
fn status_from_any<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::open("open", TicketStatus::Open)]
    #[case::pending("pending", TicketStatus::Pending)]
    #[case::closed("closed", TicketStatus::Other)]
    fn test_status_kind(#[case] status: &str, #[case] expected: TicketStatus) {
        let ticket = Ticket {
            id: 1,
            subject: "help".to_string(),
            status: status.to_string(),
            created_at: 0,
        };
        assert_eq!(ticket.status_kind(), expected);
    }

    #[test]
    fn test_numeric_status_is_kept_as_text() {
        let ticket: Ticket =
            serde_json::from_str(r#"{"id": 1, "subject": "s", "status": 1, "created_at": 0}"#)
                .unwrap();
        assert_eq!(ticket.status, "1");
        assert_eq!(ticket.status_kind(), TicketStatus::Other);
    }
}
