//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.

use crate::client::{ApiClient, HttpClient, SessionContext};
use crate::domain::{
    KnowledgeArticle, KnowledgeBase, NodeCatalog, PurchasePlan, Subscription, Ticket, UserInfo,
};
use crate::state::{App, Loadable};

/// Subscription URL used across tests.
pub const TEST_SUBSCRIBE_URL: &str = "https://sub.example.com/abc";

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct SubscriptionMother;

impl SubscriptionMother {
    /// 12.5 GiB used out of 100 GiB on the "Pro" plan.
    #[must_use]
    pub fn active() -> Subscription {
        serde_json::from_value(serde_json::json!({
            "plan_id": 1,
            "token": "tok",
            "expired_at": 1_893_456_000,
            "u": 5_368_709_120u64,
            "d": 8_053_063_680u64,
            "transfer_enable": 107_374_182_400u64,
            "email": "user@example.com",
            "uuid": "11111111-2222-3333-4444-555555555555",
            "plan": { "id": 1, "name": "Pro", "show": 1, "month_price": 1500 },
            "subscribe_url": TEST_SUBSCRIBE_URL,
        }))
        .unwrap()
    }

    #[must_use]
    pub fn without_plan() -> Subscription {
        serde_json::from_value(serde_json::json!({ "subscribe_url": TEST_SUBSCRIBE_URL }))
            .unwrap()
    }
}

pub struct UserMother;

impl UserMother {
    #[must_use]
    pub fn regular() -> UserInfo {
        serde_json::from_value(serde_json::json!({
            "email": "user@example.com",
            "created_at": 1_700_000_000,
            "balance": 1234,
            "commission_balance": 50,
            "telegram_id": 42,
            "uuid": "11111111-2222-3333-4444-555555555555",
        }))
        .unwrap()
    }
}

pub struct PlanMother;

impl PlanMother {
    #[must_use]
    pub fn monthly(id: i64, name: &str, sort: i64, cents: u64) -> PurchasePlan {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": name, "show": 1, "sort": sort, "month_price": cents,
            "content": "<p>Unlimited devices</p><p>Priority support</p>",
        }))
        .unwrap()
    }

    #[must_use]
    pub fn yearly(id: i64, name: &str, sort: i64, cents: u64) -> PurchasePlan {
        serde_json::from_value(serde_json::json!({
            "id": id, "name": name, "show": 1, "sort": sort, "year_price": cents,
        }))
        .unwrap()
    }
}

pub struct KnowledgeMother;

impl KnowledgeMother {
    #[must_use]
    pub fn base() -> KnowledgeBase {
        let article = |id: i64, category: &str, title: &str| KnowledgeArticle {
            id,
            category: category.to_string(),
            title: title.to_string(),
            updated_at: None,
        };
        [
            (
                "Getting started".to_string(),
                vec![
                    article(1, "Getting started", "Install a client"),
                    article(2, "Getting started", "Import your subscription"),
                ],
            ),
            (
                "Troubleshooting".to_string(),
                vec![article(3, "Troubleshooting", "Slow connections")],
            ),
        ]
        .into_iter()
        .collect()
    }
}

pub struct TicketMother;

impl TicketMother {
    #[must_use]
    pub fn with_status(id: i64, subject: &str, status: &str) -> Ticket {
        serde_json::from_value(serde_json::json!({
            "id": id, "subject": subject, "status": status, "created_at": 1_700_000_000,
        }))
        .unwrap()
    }
}

pub struct AppMother;

impl AppMother {
    /// App with no data loaded and an in-memory session.
    #[must_use]
    pub fn empty() -> App {
        let client = ApiClient::new(
            "http://127.0.0.1:9",
            HttpClient::new().unwrap(),
            SessionContext::in_memory(Some("test-token".to_string())),
        );
        App::new(NodeCatalog::default(), client)
    }

    /// App with every panel loaded.
    #[must_use]
    pub fn loaded() -> App {
        let mut app = Self::empty();
        app.data.subscription = Loadable::Loaded(SubscriptionMother::active());
        app.data.user = Loadable::Loaded(UserMother::regular());
        app.data.knowledge = Loadable::Loaded(KnowledgeMother::base());
        app.data.tickets = Loadable::Loaded(vec![
            TicketMother::with_status(1, "Cannot connect", "open"),
            TicketMother::with_status(2, "Billing question", "pending"),
        ]);
        app.data.set_plans(Loadable::Loaded(vec![
            PlanMother::monthly(1, "Pro", 2, 1500),
            PlanMother::monthly(2, "Lite", 1, 800),
            PlanMother::yearly(3, "Annual", 3, 15000),
        ]));
        app
    }
}
