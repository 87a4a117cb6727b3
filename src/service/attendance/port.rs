//! Collaborator interfaces the attendance workflow is constructed with.
//!
//! Production implementations live in `service::{registry, character, badge}` and
//! `bot::{reply, logger}`; tests substitute in-memory fakes.

use alloy::primitives::{Address, TxHash};
use async_trait::async_trait;
use url::Url;

use crate::{
    error::AppError,
    model::{
        cohort::Cohort,
        eligibility::{AccountLookup, IdentityResolution},
        notification::AttendanceNotification,
    },
};

/// Off-chain member registry mapping Discord tags to verified addresses.
#[async_trait]
pub trait MemberRegistry: Send + Sync {
    /// Resolves every tag in every requested cohort. Tags without a verified address are
    /// listed as unresolved for that cohort.
    async fn resolve_addresses(
        &self,
        tags: &[String],
        cohorts: &[Cohort],
    ) -> Result<IdentityResolution, AppError>;
}

/// Character ownership index of one game deployment.
#[async_trait]
pub trait CharacterDirectory: Send + Sync {
    async fn resolve_accounts(
        &self,
        players: &[Address],
        game_address: Address,
        subgraph_url: &Url,
    ) -> Result<AccountLookup, AppError>;
}

/// Submits the batched attendance badge drop.
#[async_trait]
pub trait BadgeDropper: Send + Sync {
    async fn drop_badges(&self, accounts: &[Address])
        -> Result<Box<dyn PendingBadgeDrop>, AppError>;
}

/// A submitted badge drop awaiting its receipt.
#[async_trait]
pub trait PendingBadgeDrop: Send {
    /// Hash known as soon as the transaction is accepted by the node.
    fn tx_hash(&self) -> TxHash;

    /// Waits for the receipt and reports its status.
    async fn confirm(self: Box<Self>) -> Result<bool, AppError>;
}

/// Destination for the user-facing notifications of one run.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn notify(&self, notification: AttendanceNotification) -> Result<(), AppError>;
}

/// Operational diagnostics sink. Never fails; delivery problems are only traced.
#[async_trait]
pub trait OperationalLog: Send + Sync {
    async fn error(&self, message: &str);
}
