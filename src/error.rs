//! Error taxonomy for funding and relay operations.
//!
//! No error is caught or retried inside this crate; every failure
//! propagates to the immediate caller. Callers needing resilience
//! wrap the operations themselves.

use std::time::Duration;

use alloy::primitives::U256;
use thiserror::Error;

use crate::chain::ChainId;

/// Errors that can occur during funding and relay operations.
#[derive(Debug, Error)]
pub enum FundingError {
    /// Chain is not in the registry; caller must pick a known chain.
    #[error("unsupported chain: {0}")]
    UnsupportedChain(ChainId),

    /// A required secret is absent at startup. Fatal: the process
    /// must not proceed without it.
    #[error("missing configuration: {0} is not set")]
    MissingConfiguration(&'static str),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// Transaction send or confirmation failed (reverted, underpriced,
    /// network error). Not retried.
    #[error("transaction failed: {0}")]
    TransactionFailed(String),

    /// The funding account itself cannot cover the transfer.
    #[error("funding account balance too low: have {have}, need {need}")]
    InsufficientFundingBalance { have: U256, need: U256 },

    /// Transaction was not confirmed within the configured wait.
    #[error("transaction not confirmed after {0:?}")]
    ConfirmationTimeout(Duration),

    /// Invalid private key format or signer construction failure.
    #[error("wallet error: {0}")]
    Wallet(String),
}

/// Result type for funding operations.
pub type FundingResult<T> = Result<T, FundingError>;
