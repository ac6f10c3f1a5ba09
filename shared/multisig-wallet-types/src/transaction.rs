//! The request description an owner signs.

use alloc::vec::Vec;

use alloy_primitives::{aliases::U96, Address, U256};

/// A single outbound request, as covered by the EIP-712 digest.
///
/// `gas` is the caller-declared ceiling for the sub-call; `nonce` must equal
/// the wallet's live replay counter at submission time or the digest (and
/// therefore every signature over it) is void.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub to: Address,
    pub value: U256,
    pub data: Vec<u8>,
    pub gas: U256,
    pub nonce: U96,
}
