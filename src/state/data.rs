//! Data state for the dashboard panels.
//!
//! Each backend source loads independently, so every field tracks its own
//! loading/failed/loaded state.

use crate::domain::plan::visible_plans;
use crate::domain::{KnowledgeBase, PurchasePlan, Subscription, Ticket, UserInfo};

// ============================================================================
// Loadable
// ============================================================================

/// Lifecycle of one remote data source.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    Loading,
    Loaded(T),
    /// Fetch failed with the given message.
    Failed(String),
}

impl<T> Loadable<T> {
    #[must_use]
    pub const fn as_loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Converts a fetch result, keeping only the error text.
    pub fn from_result<E: std::fmt::Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

// ============================================================================
// Data State
// ============================================================================

/// Everything fetched from the backend.
#[derive(Debug, Default)]
pub struct DataState {
    pub subscription: Loadable<Subscription>,
    pub knowledge: Loadable<KnowledgeBase>,
    pub tickets: Loadable<Vec<Ticket>>,
    pub user: Loadable<UserInfo>,
    /// Visible plans, already ordered by their sort key.
    pub plans: Loadable<Vec<PurchasePlan>>,
}

impl DataState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks every source as loading again (before a refresh).
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Stores a plan listing, dropping hidden plans.
    pub fn set_plans(&mut self, plans: Loadable<Vec<PurchasePlan>>) {
        self.plans = match plans {
            Loadable::Loaded(plans) => Loadable::Loaded(visible_plans(plans)),
            other => other,
        };
    }

    /// Base subscription URL, once known and non-empty.
    #[must_use]
    pub fn subscribe_url(&self) -> Option<&str> {
        self.subscription
            .as_loaded()
            .map(|s| s.subscribe_url.as_str())
            .filter(|url| !url.is_empty())
    }

    /// Replaces the account UUID after a successful reset.
    pub fn set_uuid(&mut self, uuid: String) {
        if let Loadable::Loaded(user) = &mut self.user {
            user.uuid = uuid.clone();
        }
        if let Loadable::Loaded(subscription) = &mut self.subscription {
            subscription.uuid = uuid;
        }
    }
}
