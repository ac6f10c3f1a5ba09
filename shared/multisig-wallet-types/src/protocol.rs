//! Protocol-level constants shared by the contract and off-chain tooling.

/// Version string advertised by every wallet instance and bound into the
/// EIP-712 domain. Changing it invalidates all previously collected signatures.
pub const CONTRACT_VERSION: &str = "0.1.1";

/// EIP-712 domain type string.
pub const DOMAIN_TYPE: &[u8] =
    b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// EIP-712 struct type string for an authorized request.
///
/// The replay counter is a `uint96`; the digest still encodes it as a full
/// 32-byte word per EIP-712 rules.
pub const TRANSACTION_TYPE: &[u8] =
    b"Transaction(address to,uint256 value,bytes data,uint256 gas,uint96 nonce)";

/// Hard cap on the number of owners a wallet can hold (owner count and
/// threshold are `uint16` on-chain).
pub const MAX_OWNER_COUNT: u16 = u16::MAX;

/// Floor for inactivity windows in the ownership continuity module: 7 days.
/// Per-owner windows and the instance-level minimum can never go below this.
pub const MIN_INACTIVITY_WINDOW_SECS: u64 = 7 * 24 * 60 * 60;
