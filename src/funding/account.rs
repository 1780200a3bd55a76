//! The funding account: one long-lived keypair for all outgoing
//! transactions.
//!
//! # Security
//! - The private key is loaded once from configuration at startup
//! - Keys are never logged or serialized

use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::config::FundingConfig;
use crate::error::{FundingError, FundingResult};

/// The single funding account, constructed once at process start and
/// passed by reference into every operation.
#[derive(Debug, Clone)]
pub struct FundingAccount {
    signer: PrivateKeySigner,
}

impl FundingAccount {
    /// Build the funding account from startup configuration.
    pub fn new(config: &FundingConfig) -> FundingResult<Self> {
        Self::from_private_key(&config.funding_private_key)
    }

    /// Build the funding account from a hex-encoded private key
    /// (with or without `0x` prefix).
    pub fn from_private_key(private_key_hex: &str) -> FundingResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| FundingError::Wallet(format!("invalid private key format: {e}")))?;

        tracing::info!(address = %signer.address(), "funding account initialized");

        Ok(Self { signer })
    }

    /// The funding account's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The underlying signer, for building wallet-equipped providers.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }
}
