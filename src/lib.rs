//! Balance-gated test-account funding and relay for EVM chains.
//!
//! Bootstraps accounts used by account-abstraction test and demo flows:
//! given a chain and a target address, conditionally tops up native
//! currency, wrapped-native token, and a stablecoin from one funding
//! account, and relays arbitrary payloads through that account.
//!
//! # Data Flow
//! ```text
//! Environment (funding key, API keys)
//!     → config (startup validation)
//!     → chain (registry: token addresses, RPC transports)
//!     → funding (balance-gated transfers, relay, confirmation wait)
//! ```
//!
//! # Funding Semantics
//! Each operation reads the target's balance and transfers the full
//! resolved amount iff the balance is below half of it; otherwise it is
//! a no-op. Failures propagate unretried. Calls return only after the
//! submitted transaction is mined.
//!
//! # Example
//! ```no_run
//! use alloy::primitives::address;
//! use prefunder::{chain, Funder, FundingConfig};
//!
//! # async fn run() -> prefunder::FundingResult<()> {
//! let config = FundingConfig::from_env()?;
//! let funder = Funder::from_config(&config)?;
//! let target = address!("0x0000000000000000000000000000000000001234");
//! funder.fund_native(&chain::SEPOLIA, target, None).await?;
//! funder.fund_stablecoin(&chain::SEPOLIA, target, None).await?;
//! # Ok(())
//! # }
//! ```

pub mod chain;
pub mod config;
pub mod error;
pub mod funding;

pub use chain::{Chain, ChainId, ChainRegistry};
pub use config::FundingConfig;
pub use error::{FundingError, FundingResult};
pub use funding::account::FundingAccount;
pub use funding::funder::{Asset, Funder, FundingOutcome};
pub use funding::keys::{derive_key, derive_signer};
