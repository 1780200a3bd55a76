//! Balance-gated funding operations.
//!
//! # Responsibilities
//! - Resolve per-asset default amounts by network class
//! - Read target balances and apply the funding threshold gate
//! - Submit transfer transactions from the funding account
//!
//! The gate is binary: an operation transfers the full resolved amount
//! iff the target's balance is below half of it, and is a no-op
//! otherwise. It never tops up to an exact target; existing test flows
//! depend on that exact semantic.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::Mutex;

use crate::chain::{Chain, ChainId, ChainRegistry};
use crate::config::FundingConfig;
use crate::error::{FundingError, FundingResult};
use crate::funding::account::FundingAccount;
use crate::funding::erc20::{IERC20, IWeth};

/// Default maximum wait for a transaction receipt.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(60);

/// The three fundable asset classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Asset {
    /// The chain's native currency.
    Native,
    /// Wrapped-native token (WETH), 18 decimals.
    WrappedNative,
    /// Stablecoin (USDC), 6 decimals.
    Stablecoin,
}

impl Asset {
    /// Decimal precision of the asset's smallest unit.
    pub const fn decimals(self) -> u8 {
        match self {
            Asset::Native | Asset::WrappedNative => 18,
            Asset::Stablecoin => 6,
        }
    }

    /// Default funding amount by network class, in the asset's
    /// smallest unit. Existing test flows depend on these exact values.
    pub fn default_amount(self, testnet: bool) -> U256 {
        let raw: u64 = match (self, testnet) {
            (Asset::Native, true) => 1_000_000_000_000_000, // 0.001 ether
            (Asset::Native, false) => 50_000_000_000_000,   // 0.00005 ether
            (Asset::WrappedNative, true) => 2_000_000_000_000_000, // 0.002 ether
            (Asset::WrappedNative, false) => 220_000_000_000_000, // 0.00022 ether
            (Asset::Stablecoin, true) => 100_000,           // 0.1 USDC
            (Asset::Stablecoin, false) => 1_000_000,        // 1 USDC
        };
        U256::from(raw)
    }
}

/// Result of a funding operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FundingOutcome {
    /// A transfer was submitted and confirmed.
    Funded { tx_hash: TxHash },
    /// The target's balance already met the threshold; nothing sent.
    Skipped { balance: U256 },
}

/// Balance-gated funder and transaction relay.
///
/// Holds the single funding account and the chain registry. Operations
/// may run concurrently; transaction submission is serialized per chain
/// (see [`crate::funding::submit`]), everything else is not.
pub struct Funder {
    account: FundingAccount,
    registry: ChainRegistry,
    pub(crate) locks: DashMap<ChainId, Arc<Mutex<()>>>,
    pub(crate) confirmation_timeout: Duration,
}

impl Funder {
    /// Create a funder from an account and registry.
    pub fn new(account: FundingAccount, registry: ChainRegistry) -> Self {
        Self {
            account,
            registry,
            locks: DashMap::new(),
            confirmation_timeout: DEFAULT_CONFIRMATION_TIMEOUT,
        }
    }

    /// Create a funder from startup configuration, with the default
    /// registry.
    pub fn from_config(config: &FundingConfig) -> FundingResult<Self> {
        let account = FundingAccount::new(config)?;
        Ok(Self::new(account, ChainRegistry::new())
            .with_confirmation_timeout(Duration::from_secs(config.confirmation_timeout_secs)))
    }

    /// Override the confirmation wait.
    pub fn with_confirmation_timeout(mut self, timeout: Duration) -> Self {
        self.confirmation_timeout = timeout;
        self
    }

    /// The funding account.
    pub fn account(&self) -> &FundingAccount {
        &self.account
    }

    /// The chain registry.
    pub fn registry(&self) -> &ChainRegistry {
        &self.registry
    }

    /// Build a wallet-equipped HTTP provider for a chain.
    ///
    /// Every operation resolves its own transport; a single invocation
    /// never mixes endpoints.
    pub fn provider_for(&self, chain: &Chain) -> FundingResult<impl Provider + Clone> {
        let url = self.registry.rpc_url(chain)?;
        let wallet = EthereumWallet::from(self.account.signer().clone());
        Ok(ProviderBuilder::new().wallet(wallet).connect_http(url))
    }

    /// Fund the target's native balance if it is below the threshold.
    pub async fn fund_native(
        &self,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let provider = self.provider_for(chain)?;
        self.fund_native_with(&provider, chain, target, amount).await
    }

    /// [`Self::fund_native`] against a caller-supplied provider. The
    /// provider must be wallet-equipped with the funding account.
    pub async fn fund_native_with<P: Provider>(
        &self,
        provider: &P,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let amount = resolve_amount(Asset::Native, chain, amount);
        let balance = provider
            .get_balance(target)
            .await
            .map_err(|e| FundingError::Rpc(e.to_string()))?;

        if !below_funding_threshold(balance, amount) {
            tracing::debug!(chain = %chain.name, %target, %balance, "native balance sufficient, skipping");
            return Ok(FundingOutcome::Skipped { balance });
        }

        self.ensure_native_funds(provider, amount).await?;

        let tx = native_transfer_request(target, amount);
        let tx_hash = self.send_and_confirm(provider, chain, tx, "fund_native").await?;
        Ok(FundingOutcome::Funded { tx_hash })
    }

    /// Fund the target's wrapped-native balance if it is below the
    /// threshold.
    ///
    /// Two sequential transactions: the funding account wraps its own
    /// native balance via `deposit`, then transfers the wrapped token.
    /// The deposit must confirm before the transfer is attempted; no
    /// wrapped balance exists to send until it lands.
    pub async fn fund_wrapped_native(
        &self,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let provider = self.provider_for(chain)?;
        self.fund_wrapped_native_with(&provider, chain, target, amount)
            .await
    }

    /// [`Self::fund_wrapped_native`] against a caller-supplied provider.
    pub async fn fund_wrapped_native_with<P: Provider + Clone>(
        &self,
        provider: &P,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let amount = resolve_amount(Asset::WrappedNative, chain, amount);
        let wrapped = self.registry.wrapped_native_address(chain)?;

        let balance = IERC20::new(wrapped, provider.clone())
            .balanceOf(target)
            .call()
            .await
            .map_err(|e| FundingError::Rpc(e.to_string()))?;

        if !below_funding_threshold(balance, amount) {
            tracing::debug!(chain = %chain.name, %target, %balance, "wrapped balance sufficient, skipping");
            return Ok(FundingOutcome::Skipped { balance });
        }

        // The deposit spends the funding account's native balance.
        self.ensure_native_funds(provider, amount).await?;

        let deposit = deposit_request(wrapped, amount);
        self.send_and_confirm(provider, chain, deposit, "wrap_native")
            .await?;

        let transfer = token_transfer_request(wrapped, target, amount);
        let tx_hash = self
            .send_and_confirm(provider, chain, transfer, "fund_wrapped_native")
            .await?;
        Ok(FundingOutcome::Funded { tx_hash })
    }

    /// Fund the target's stablecoin balance if it is below the
    /// threshold.
    pub async fn fund_stablecoin(
        &self,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let provider = self.provider_for(chain)?;
        self.fund_stablecoin_with(&provider, chain, target, amount)
            .await
    }

    /// [`Self::fund_stablecoin`] against a caller-supplied provider.
    pub async fn fund_stablecoin_with<P: Provider + Clone>(
        &self,
        provider: &P,
        chain: &Chain,
        target: Address,
        amount: Option<U256>,
    ) -> FundingResult<FundingOutcome> {
        let amount = resolve_amount(Asset::Stablecoin, chain, amount);
        let stablecoin = self.registry.stablecoin_address(chain)?;

        let token = IERC20::new(stablecoin, provider.clone());
        let balance = token
            .balanceOf(target)
            .call()
            .await
            .map_err(|e| FundingError::Rpc(e.to_string()))?;

        if !below_funding_threshold(balance, amount) {
            tracing::debug!(chain = %chain.name, %target, %balance, "stablecoin balance sufficient, skipping");
            return Ok(FundingOutcome::Skipped { balance });
        }

        let own_balance = token
            .balanceOf(self.account.address())
            .call()
            .await
            .map_err(|e| FundingError::Rpc(e.to_string()))?;
        if own_balance < amount {
            return Err(FundingError::InsufficientFundingBalance {
                have: own_balance,
                need: amount,
            });
        }

        let transfer = token_transfer_request(stablecoin, target, amount);
        let tx_hash = self
            .send_and_confirm(provider, chain, transfer, "fund_stablecoin")
            .await?;
        Ok(FundingOutcome::Funded { tx_hash })
    }

    /// Fail early if the funding account's native balance cannot cover
    /// the transfer.
    async fn ensure_native_funds<P: Provider>(
        &self,
        provider: &P,
        amount: U256,
    ) -> FundingResult<()> {
        let have = provider
            .get_balance(self.account.address())
            .await
            .map_err(|e| FundingError::Rpc(e.to_string()))?;
        if have < amount {
            return Err(FundingError::InsufficientFundingBalance { have, need: amount });
        }
        Ok(())
    }
}

/// The funding gate: transfer iff the balance is below half the
/// resolved amount. Integer division, like the on-chain units.
pub(crate) fn below_funding_threshold(balance: U256, amount: U256) -> bool {
    balance < amount / U256::from(2)
}

/// Explicit amount if supplied, otherwise the network-class default.
pub(crate) fn resolve_amount(asset: Asset, chain: &Chain, explicit: Option<U256>) -> U256 {
    explicit.unwrap_or_else(|| asset.default_amount(chain.testnet))
}

pub(crate) fn native_transfer_request(to: Address, amount: U256) -> TransactionRequest {
    TransactionRequest::default().with_to(to).with_value(amount)
}

pub(crate) fn deposit_request(wrapped: Address, amount: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(wrapped)
        .with_value(amount)
        .with_input(IWeth::depositCall {}.abi_encode())
}

pub(crate) fn token_transfer_request(
    token: Address,
    to: Address,
    amount: U256,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(token)
        .with_input(IERC20::transferCall { to, amount }.abi_encode())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::utils::{parse_ether, parse_units};
    use alloy::primitives::TxKind;
    use crate::chain::{ARBITRUM, SEPOLIA};

    #[test]
    fn threshold_gate_boundary() {
        let amount = U256::from(1_000u64);
        // Just under half triggers funding.
        assert!(below_funding_threshold(U256::from(499u64), amount));
        // Exactly half does not.
        assert!(!below_funding_threshold(U256::from(500u64), amount));
        assert!(below_funding_threshold(U256::ZERO, amount));
    }

    #[test]
    fn threshold_gate_floors_odd_amounts() {
        // amount / 2 floors: 7 / 2 == 3.
        let amount = U256::from(7u64);
        assert!(below_funding_threshold(U256::from(2u64), amount));
        assert!(!below_funding_threshold(U256::from(3u64), amount));
    }

    #[test]
    fn default_amount_table() {
        assert_eq!(
            Asset::Native.default_amount(true),
            parse_ether("0.001").unwrap()
        );
        assert_eq!(
            Asset::Native.default_amount(false),
            parse_ether("0.00005").unwrap()
        );
        assert_eq!(
            Asset::WrappedNative.default_amount(true),
            parse_ether("0.002").unwrap()
        );
        assert_eq!(
            Asset::WrappedNative.default_amount(false),
            parse_ether("0.00022").unwrap()
        );
        assert_eq!(
            Asset::Stablecoin.default_amount(true),
            U256::try_from(parse_units("0.1", 6).unwrap()).unwrap()
        );
        assert_eq!(
            Asset::Stablecoin.default_amount(false),
            U256::try_from(parse_units("1", 6).unwrap()).unwrap()
        );
    }

    #[test]
    fn asset_decimals() {
        assert_eq!(Asset::Native.decimals(), 18);
        assert_eq!(Asset::WrappedNative.decimals(), 18);
        assert_eq!(Asset::Stablecoin.decimals(), 6);
    }

    #[test]
    fn explicit_amount_wins_over_defaults() {
        let explicit = U256::from(123u64);
        assert_eq!(
            resolve_amount(Asset::Native, &SEPOLIA, Some(explicit)),
            explicit
        );
        assert_eq!(
            resolve_amount(Asset::Native, &SEPOLIA, None),
            parse_ether("0.001").unwrap()
        );
        assert_eq!(
            resolve_amount(Asset::Stablecoin, &ARBITRUM, None),
            U256::from(1_000_000u64)
        );
    }

    #[test]
    fn native_transfer_carries_value_and_no_data() {
        let to = Address::repeat_byte(0xaa);
        let amount = U256::from(1_000u64);
        let tx = native_transfer_request(to, amount);
        assert_eq!(tx.to, Some(TxKind::Call(to)));
        assert_eq!(tx.value, Some(amount));
        assert!(tx.input.input().is_none());
    }

    #[test]
    fn deposit_attaches_value_to_wrapped_contract() {
        let wrapped = Address::repeat_byte(0xbb);
        let amount = U256::from(2_000u64);
        let tx = deposit_request(wrapped, amount);
        assert_eq!(tx.to, Some(TxKind::Call(wrapped)));
        assert_eq!(tx.value, Some(amount));
        // deposit() selector
        assert_eq!(&tx.input.input().unwrap()[..4], [0xd0, 0xe3, 0x0d, 0xb0]);
    }

    #[test]
    fn token_transfer_carries_no_value() {
        let token = Address::repeat_byte(0xcc);
        let to = Address::repeat_byte(0xdd);
        let tx = token_transfer_request(token, to, U256::from(5u64));
        assert_eq!(tx.to, Some(TxKind::Call(token)));
        assert_eq!(tx.value, None);
        // transfer(address,uint256) selector
        assert_eq!(&tx.input.input().unwrap()[..4], [0xa9, 0x05, 0x9c, 0xbb]);
    }
}
