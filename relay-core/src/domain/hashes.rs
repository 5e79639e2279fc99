use crate::foundation::{Fingerprint, Identity};
use alloy::primitives::{keccak256, Address, U256};
use alloy::sol_types::SolValue;

/// Computes the replay-protection fingerprint of an inbound delivery.
///
/// Digest is `keccak256(abi.encode(address sender, string content, uint256 timestamp))`, the same
/// value EVM-side relayer tooling derives, so a relayer can hash with either stack.
pub fn fingerprint(original_sender: &Identity, content: &str, timestamp: u64) -> Fingerprint {
    Fingerprint::new(keccak256(abi_encode_delivery(original_sender, content, timestamp)).0)
}

/// Standard ABI encoding of `(address, string, uint256)` as top-level parameters.
pub fn abi_encode_delivery(original_sender: &Identity, content: &str, timestamp: u64) -> Vec<u8> {
    (Address::from(*original_sender.as_bytes()), content.to_string(), U256::from(timestamp)).abi_encode_params()
}
