//! Domain types for the subscription dashboard.
//!
//! # Module Organization
//!
//! - [`error`] - Error type shared by client, session store and CLI
//! - [`node`] - Regional entrance nodes and the catalog
//! - [`selection`] - The user's current regional filter
//! - [`link`] - Filtered URL and client deep link composition
//! - [`subscription`] - Subscription, traffic usage, timestamps
//! - [`account`] - Account information
//! - [`knowledge`] - Knowledge-base listing
//! - [`ticket`] - Support tickets
//! - [`plan`] - Purchasable plans

// ============================================================================
// Module Declarations
// ============================================================================

pub mod account;
pub mod error;
pub mod knowledge;
pub mod link;
pub mod node;
pub mod plan;
pub mod selection;
pub mod subscription;
pub mod ticket;

// ============================================================================
// Re-exports
// ============================================================================

pub use account::{ResetUuid, UserInfo};
pub use error::DashError;
pub use knowledge::{KnowledgeArticle, KnowledgeBase};
pub use link::{ClientTarget, LinkEncoding, SubscriptionLinks, compose_filtered};
pub use node::{NodeCatalog, RegionalNode};
pub use plan::{BillingPeriod, PurchasePlan};
pub use selection::SelectionSet;
pub use subscription::{Subscription, TrafficUsage};
pub use ticket::{Ticket, TicketStatus};
