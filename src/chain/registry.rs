//! Keyed lookup of per-chain token addresses and RPC transports.

use std::collections::HashMap;

use alloy::primitives::{address, Address};
use url::Url;

use crate::chain::{
    Chain, ChainId, ARBITRUM, ARBITRUM_SEPOLIA, BASE, BASE_SEPOLIA, OPTIMISM, OPTIMISM_SEPOLIA,
    SEPOLIA,
};
use crate::error::{FundingError, FundingResult};

/// Public RPC endpoint used for Sepolia instead of its default transport.
const SEPOLIA_RPC_OVERRIDE: &str = "https://ethereum-sepolia-rpc.publicnode.com";

/// Per-chain constants.
#[derive(Debug, Clone, Copy)]
struct ChainEntry {
    /// Stablecoin (USDC) contract, 6 decimals.
    stablecoin: Address,
    /// Wrapped-native (WETH) contract, 18 decimals.
    wrapped_native: Address,
    /// RPC endpoint override; `None` falls back to the chain's default.
    rpc_override: Option<&'static str>,
}

/// Registry mapping chain ids to network-specific constants.
///
/// The supported set is closed and built at construction. Lookups for
/// any other chain fail with [`FundingError::UnsupportedChain`].
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    entries: HashMap<ChainId, ChainEntry>,
}

impl ChainRegistry {
    /// Build the registry for all supported chains.
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        entries.insert(
            SEPOLIA.id,
            ChainEntry {
                stablecoin: address!("0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238"),
                wrapped_native: address!("0xfFf9976782d46CC05630D1f6eBAb18b2324d6B14"),
                rpc_override: Some(SEPOLIA_RPC_OVERRIDE),
            },
        );
        entries.insert(
            BASE_SEPOLIA.id,
            ChainEntry {
                stablecoin: address!("0x036cbd53842c5426634e7929541ec2318f3dcf7e"),
                wrapped_native: address!("0x4200000000000000000000000000000000000006"),
                rpc_override: None,
            },
        );
        entries.insert(
            ARBITRUM_SEPOLIA.id,
            ChainEntry {
                stablecoin: address!("0x75faf114eafb1BDbe2F0316DF893fd58CE46AA4d"),
                wrapped_native: address!("0x980B62Da83eFf3D4576C647993b0c1D7faf17c73"),
                rpc_override: None,
            },
        );
        entries.insert(
            OPTIMISM_SEPOLIA.id,
            ChainEntry {
                stablecoin: address!("0x5fd84259d66Cd46123540766Be93DFE6D43130D7"),
                wrapped_native: address!("0x4200000000000000000000000000000000000006"),
                rpc_override: None,
            },
        );
        entries.insert(
            BASE.id,
            ChainEntry {
                stablecoin: address!("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913"),
                wrapped_native: address!("0x4200000000000000000000000000000000000006"),
                rpc_override: None,
            },
        );
        entries.insert(
            ARBITRUM.id,
            ChainEntry {
                stablecoin: address!("0xaf88d065e77c8cC2239327C5EDb3A432268e5831"),
                wrapped_native: address!("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
                rpc_override: None,
            },
        );
        entries.insert(
            OPTIMISM.id,
            ChainEntry {
                stablecoin: address!("0x0b2c639c533813f4aa9d7837caf62653d097ff85"),
                wrapped_native: address!("0x4200000000000000000000000000000000000006"),
                rpc_override: None,
            },
        );

        Self { entries }
    }

    /// Whether a chain id is in the supported set.
    pub fn is_supported(&self, id: ChainId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Stablecoin (USDC) contract address for a chain.
    pub fn stablecoin_address(&self, chain: &Chain) -> FundingResult<Address> {
        Ok(self.entry(chain)?.stablecoin)
    }

    /// Wrapped-native (WETH) contract address for a chain.
    pub fn wrapped_native_address(&self, chain: &Chain) -> FundingResult<Address> {
        Ok(self.entry(chain)?.wrapped_native)
    }

    /// RPC endpoint for a chain: the registry override when one exists,
    /// otherwise the chain's own default transport.
    pub fn rpc_url(&self, chain: &Chain) -> FundingResult<Url> {
        let entry = self.entry(chain)?;
        let raw = entry.rpc_override.unwrap_or(chain.rpc_url);
        raw.parse()
            .map_err(|e| FundingError::Rpc(format!("invalid RPC URL '{raw}': {e}")))
    }

    fn entry(&self, chain: &Chain) -> FundingResult<&ChainEntry> {
        self.entries
            .get(&chain.id)
            .ok_or(FundingError::UnsupportedChain(chain.id))
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::new()
    }
}
