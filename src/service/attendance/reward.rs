use alloy::primitives::{Address, TxHash};
use dioxus_logger::tracing;
use std::time::Duration;

use crate::error::{chain::ChainError, AppError};

use super::port::{BadgeDropper, PendingBadgeDrop};

/// Submits the badge drop and waits for its receipt under a deadline.
pub struct RewardSubmitter<'a> {
    dropper: &'a dyn BadgeDropper,
    confirmation_timeout: Duration,
}

impl<'a> RewardSubmitter<'a> {
    pub fn new(dropper: &'a dyn BadgeDropper, confirmation_timeout: Duration) -> Self {
        Self {
            dropper,
            confirmation_timeout,
        }
    }

    pub async fn submit(
        &self,
        accounts: &[Address],
    ) -> Result<Box<dyn PendingBadgeDrop>, AppError> {
        let pending = self.dropper.drop_badges(accounts).await?;

        tracing::info!(
            "Submitted attendance badge drop {} for {} accounts",
            pending.tx_hash(),
            accounts.len()
        );

        Ok(pending)
    }

    /// Waits for the receipt.
    ///
    /// # Returns
    /// - `Ok(true)` - Receipt status is success
    /// - `Ok(false)` - Transaction reverted
    /// - `Err(AppError::ChainErr)` - RPC failure or no receipt before the deadline
    pub async fn confirm(&self, pending: Box<dyn PendingBadgeDrop>) -> Result<bool, AppError> {
        let tx_hash: TxHash = pending.tx_hash();

        match tokio::time::timeout(self.confirmation_timeout, pending.confirm()).await {
            Ok(status) => status,
            Err(_) => Err(ChainError::ConfirmationTimeout {
                tx_hash: tx_hash.to_string(),
                seconds: self.confirmation_timeout.as_secs(),
            }
            .into()),
        }
    }
}
