//! Shared submit-and-confirm primitive.
//!
//! Every state-changing path goes through [`Funder::send_and_confirm`]
//! so that submission serialization, the confirmation wait, and the
//! failure contract are identical everywhere a transaction leaves the
//! funding account.

use std::sync::Arc;

use alloy::primitives::TxHash;
use alloy::providers::{PendingTransactionError, Provider, WatchTxError};
use alloy::rpc::types::TransactionRequest;
use tokio::sync::Mutex;

use crate::chain::{Chain, ChainId};
use crate::error::{FundingError, FundingResult};
use crate::funding::funder::Funder;

impl Funder {
    /// Submit a transaction and block until it is mined.
    ///
    /// The per-chain lock is held across nonce assignment and
    /// submission only; it is released before the confirmation wait so
    /// unrelated operations are not serialized behind slow blocks.
    /// A reverted receipt or send failure is
    /// [`FundingError::TransactionFailed`]; exceeding the configured
    /// wait is [`FundingError::ConfirmationTimeout`].
    pub(crate) async fn send_and_confirm<P: Provider>(
        &self,
        provider: &P,
        chain: &Chain,
        tx: TransactionRequest,
        op: &'static str,
    ) -> FundingResult<TxHash> {
        let lock = self.chain_lock(chain.id);
        let pending = {
            let _guard = lock.lock().await;
            provider
                .send_transaction(tx)
                .await
                .map_err(|e| FundingError::TransactionFailed(e.to_string()))?
        };

        let tx_hash = *pending.tx_hash();
        tracing::info!(op, chain = %chain.name, %tx_hash, "transaction submitted");

        let timeout = self.confirmation_timeout;
        let receipt = pending
            .with_timeout(Some(timeout))
            .get_receipt()
            .await
            .map_err(|e| match e {
                PendingTransactionError::TxWatcher(WatchTxError::Timeout) => {
                    FundingError::ConfirmationTimeout(timeout)
                }
                other => FundingError::TransactionFailed(other.to_string()),
            })?;

        if !receipt.status() {
            return Err(FundingError::TransactionFailed(format!(
                "transaction {tx_hash} reverted"
            )));
        }

        tracing::debug!(op, chain = %chain.name, %tx_hash, block = ?receipt.block_number, "transaction confirmed");
        Ok(tx_hash)
    }

    /// Submission lock for a chain, created on first use.
    pub(crate) fn chain_lock(&self, id: ChainId) -> Arc<Mutex<()>> {
        self.locks.entry(id).or_default().clone()
    }
}
