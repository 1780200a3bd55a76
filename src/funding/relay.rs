//! Transaction relay through the funding account.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;

use crate::chain::Chain;
use crate::error::FundingResult;
use crate::funding::funder::Funder;

impl Funder {
    /// Relay an opaque payload from the funding account to
    /// `destination`, with no value attached. The submitted hash is
    /// logged before the confirmation wait; the call returns only once
    /// the transaction is mined.
    pub async fn relay(
        &self,
        chain: &Chain,
        destination: Address,
        payload: Bytes,
    ) -> FundingResult<TxHash> {
        let provider = self.provider_for(chain)?;
        self.relay_with(&provider, chain, destination, payload).await
    }

    /// [`Self::relay`] against a caller-supplied provider.
    pub async fn relay_with<P: Provider>(
        &self,
        provider: &P,
        chain: &Chain,
        destination: Address,
        payload: Bytes,
    ) -> FundingResult<TxHash> {
        let tx = relay_request(destination, payload);
        self.send_and_confirm(provider, chain, tx, "relay").await
    }
}

pub(crate) fn relay_request(destination: Address, payload: Bytes) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(destination)
        .with_input(payload)
}
