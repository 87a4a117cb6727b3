//! On-chain attendance badge drop.
//!
//! Badges are dropped as CharacterSheets loot: one `dropLoot` call on the main game contract
//! gives each character account one unit of the configured badge item.

use alloy::{
    network::{EthereumWallet, ReceiptResponse},
    primitives::{Address, TxHash, U256},
    providers::{DynProvider, PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    sol,
    sol_types::SolCall,
};
use async_trait::async_trait;
use dioxus_logger::tracing;
use url::Url;

use crate::{
    error::{chain::ChainError, config::ConfigError, AppError},
    service::attendance::port::{BadgeDropper, PendingBadgeDrop},
};

sol! {
    function dropLoot(address[] characterAccounts, uint256[][] itemIds, uint256[][] amounts);
}

pub struct ChainBadgeDropper {
    provider: DynProvider,
    game_address: Address,
    badge_item_id: U256,
}

impl ChainBadgeDropper {
    /// Builds a signing provider for the attendance wallet.
    ///
    /// # Returns
    /// - `Ok(ChainBadgeDropper)` - Provider ready to submit transactions
    /// - `Err(AppError::ConfigErr)` - The private key is not a valid secp256k1 key
    pub fn connect(
        rpc_url: Url,
        private_key: &str,
        game_address: Address,
        badge_item_id: U256,
    ) -> Result<Self, AppError> {
        let signer: PrivateKeySigner =
            private_key
                .trim()
                .parse()
                .map_err(|e: alloy::signers::local::LocalSignerError| {
                    ConfigError::InvalidEnvVar {
                        name: "ATTENDANCE_SIGNER_PRIVATE_KEY".to_string(),
                        reason: e.to_string(),
                    }
                })?;
        let wallet = EthereumWallet::from(signer);

        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(rpc_url)
            .erased();

        Ok(Self {
            provider,
            game_address,
            badge_item_id,
        })
    }

    /// Warns when the RPC endpoint serves a different chain than the main cohort is configured
    /// for. Startup continues either way.
    pub async fn check_chain_id(&self, configured: u64) {
        match self.provider.get_chain_id().await {
            Ok(served) => {
                if let Some(message) = chain_id_mismatch(configured, served) {
                    tracing::warn!("{}", message);
                }
            }
            Err(e) => tracing::warn!("Failed to read chain id from the RPC endpoint: {}", e),
        }
    }
}

fn chain_id_mismatch(configured: u64, served: u64) -> Option<String> {
    (configured != served).then(|| {
        format!(
            "RPC endpoint serves chain {} but the main cohort is configured for chain {}; badge drops will target the wrong network",
            served, configured
        )
    })
}

#[async_trait]
impl BadgeDropper for ChainBadgeDropper {
    async fn drop_badges(
        &self,
        accounts: &[Address],
    ) -> Result<Box<dyn PendingBadgeDrop>, AppError> {
        let call = drop_loot_call(accounts, self.badge_item_id);
        let tx = TransactionRequest::default()
            .to(self.game_address)
            .input(call.abi_encode().into());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(ChainError::from)?;

        Ok(Box::new(ChainPendingBadgeDrop { pending }))
    }
}

struct ChainPendingBadgeDrop {
    pending: PendingTransactionBuilder<alloy::network::Ethereum>,
}

#[async_trait]
impl PendingBadgeDrop for ChainPendingBadgeDrop {
    fn tx_hash(&self) -> TxHash {
        *self.pending.tx_hash()
    }

    async fn confirm(self: Box<Self>) -> Result<bool, AppError> {
        let receipt = self
            .pending
            .get_receipt()
            .await
            .map_err(ChainError::from)?;

        Ok(receipt.status())
    }
}

/// One badge per account, as parallel `itemIds` and `amounts` arrays.
fn drop_loot_call(accounts: &[Address], badge_item_id: U256) -> dropLootCall {
    dropLootCall {
        characterAccounts: accounts.to_vec(),
        itemIds: accounts.iter().map(|_| vec![badge_item_id]).collect(),
        amounts: accounts.iter().map(|_| vec![U256::from(1)]).collect(),
    }
}
