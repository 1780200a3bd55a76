//! Funding and relay subsystem.
//!
//! # Data Flow
//! ```text
//! Environment (funding key, API keys)
//!     → config (startup validation)
//!     → account.rs (funding account, signing)
//!     → funder.rs (balance-gated funding per asset)
//!     → submit.rs (serialized submission + confirmation wait)
//! ```
//!
//! # Security Constraints
//! - The funding key is loaded once at startup and never logged
//! - Transaction submission is serialized per chain; confirmation
//!   waits are not

pub mod account;
pub mod erc20;
pub mod funder;
pub mod keys;
pub mod relay;
pub mod submit;

pub use account::FundingAccount;
pub use funder::{Asset, Funder, FundingOutcome};
pub use keys::{derive_key, derive_signer};
