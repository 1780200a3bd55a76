//! Chain model and per-chain constant registry.
//!
//! # Responsibilities
//! - Identify the closed set of supported networks
//! - Resolve token contract addresses and RPC transports per chain
//!
//! Chains are plain values supplied by the caller; the registry maps a
//! chain id to its network-specific constants. Adding a chain means
//! adding a table row, not a branch.

pub mod registry;

pub use registry::ChainRegistry;

use std::fmt;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A supported EVM network.
///
/// Immutable value describing identity, network class, and the chain's
/// default RPC endpoint. The registry may override the endpoint for
/// specific chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    /// Numeric chain id (EIP-155).
    pub id: ChainId,
    /// Human-readable name for logging.
    pub name: &'static str,
    /// True for test networks; selects the testnet funding defaults.
    pub testnet: bool,
    /// Default public RPC endpoint.
    pub rpc_url: &'static str,
}

/// Ethereum Sepolia (L1 testnet).
pub const SEPOLIA: Chain = Chain {
    id: ChainId(11155111),
    name: "sepolia",
    testnet: true,
    rpc_url: "https://rpc.sepolia.org",
};

/// Base Sepolia (L2 testnet).
pub const BASE_SEPOLIA: Chain = Chain {
    id: ChainId(84532),
    name: "base-sepolia",
    testnet: true,
    rpc_url: "https://sepolia.base.org",
};

/// Arbitrum Sepolia (L2 testnet).
pub const ARBITRUM_SEPOLIA: Chain = Chain {
    id: ChainId(421614),
    name: "arbitrum-sepolia",
    testnet: true,
    rpc_url: "https://sepolia-rollup.arbitrum.io/rpc",
};

/// Optimism Sepolia (L2 testnet).
pub const OPTIMISM_SEPOLIA: Chain = Chain {
    id: ChainId(11155420),
    name: "optimism-sepolia",
    testnet: true,
    rpc_url: "https://sepolia.optimism.io",
};

/// Base mainnet.
pub const BASE: Chain = Chain {
    id: ChainId(8453),
    name: "base",
    testnet: false,
    rpc_url: "https://mainnet.base.org",
};

/// Arbitrum One mainnet.
pub const ARBITRUM: Chain = Chain {
    id: ChainId(42161),
    name: "arbitrum",
    testnet: false,
    rpc_url: "https://arb1.arbitrum.io/rpc",
};

/// Optimism mainnet.
pub const OPTIMISM: Chain = Chain {
    id: ChainId(10),
    name: "optimism",
    testnet: false,
    rpc_url: "https://mainnet.optimism.io",
};

/// All supported chains, testnets first.
pub const SUPPORTED_CHAINS: [Chain; 7] = [
    SEPOLIA,
    BASE_SEPOLIA,
    ARBITRUM_SEPOLIA,
    OPTIMISM_SEPOLIA,
    BASE,
    ARBITRUM,
    OPTIMISM,
];
