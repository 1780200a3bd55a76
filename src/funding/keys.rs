//! Deterministic sub-key derivation for generating test accounts.
//!
//! Many distinct throwaway accounts are derived from one seed string
//! without persisting each private key: the key for `(seed, index)` is
//! the Keccak-256 hash of the seed's UTF-8 bytes followed by the
//! minimal big-endian encoding of the index.

use alloy::primitives::{keccak256, B256};
use alloy::signers::local::PrivateKeySigner;

use crate::error::{FundingError, FundingResult};

/// Derive a 32-byte key from a seed string and an index.
///
/// Deterministic: the same `(seed, index)` always yields the same key,
/// and distinct indices yield distinct keys for a fixed seed.
pub fn derive_key(seed: &str, index: u64) -> B256 {
    let index_bytes = minimal_be_bytes(index);
    let mut preimage = Vec::with_capacity(seed.len() + index_bytes.len());
    preimage.extend_from_slice(seed.as_bytes());
    preimage.extend_from_slice(&index_bytes);
    keccak256(&preimage)
}

/// Derive a local signer for a test account.
pub fn derive_signer(seed: &str, index: u64) -> FundingResult<PrivateKeySigner> {
    let key = derive_key(seed, index);
    PrivateKeySigner::from_bytes(&key)
        .map_err(|e| FundingError::Wallet(format!("derived key is not a valid signing key: {e}")))
}

/// Big-endian byte encoding with leading zeros stripped; zero encodes
/// as a single zero byte. Injective over u64, so distinct indices
/// produce distinct preimages.
fn minimal_be_bytes(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes
        .iter()
        .position(|b| *b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}
