use thiserror::Error;

/// Errors raised while submitting or confirming the attendance badge transaction.
#[derive(Error, Debug)]
pub enum ChainError {
    /// RPC transport failure while sending the transaction.
    #[error(transparent)]
    Transport(#[from] alloy::transports::TransportError),

    /// The pending transaction could not be watched to completion.
    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),

    /// No receipt arrived within the configured confirmation timeout.
    ///
    /// The transaction may still be mined later. No ledger entry is written for it.
    #[error("Transaction {tx_hash} was not confirmed within {seconds} seconds")]
    ConfirmationTimeout {
        /// Hash of the submitted transaction
        tx_hash: String,
        /// Timeout that elapsed
        seconds: u64,
    },
}
