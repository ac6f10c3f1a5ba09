//! Canonical EIP-712 digest construction.
//!
//! This is the object owners actually sign. Every request field and the
//! instance identity (name, version, chain, contract address) are bound into
//! the digest, so no two distinct requests in a wallet's lifetime can share
//! one.
//!
//! The host-side encoder mirrors this construction with `sha3`; the type
//! strings live in `multisig-wallet-types` to keep both in sync.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{aliases::U96, keccak256, Address, FixedBytes, U256};

use multisig_wallet_types::{CONTRACT_VERSION, DOMAIN_TYPE, TRANSACTION_TYPE};

/// EIP-712 domain separator for one wallet instance.
pub fn domain_separator(
    chain_id: u64,
    verifying_contract: Address,
    name: &str,
) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(32 * 5);
    buf.extend_from_slice(keccak256(DOMAIN_TYPE).as_slice());
    buf.extend_from_slice(keccak256(name.as_bytes()).as_slice());
    buf.extend_from_slice(keccak256(CONTRACT_VERSION.as_bytes()).as_slice());
    buf.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    buf.extend_from_slice(&address_word(verifying_contract));
    keccak256(buf)
}

/// Compute the digest a quorum of owners must sign to authorize a request.
///
/// `data` enters through its hash so the typed message stays fixed-size and
/// unambiguous; the counter is encoded as a full word per EIP-712 rules.
pub fn transaction_digest(
    chain_id: u64,
    verifying_contract: Address,
    name: &str,
    to: Address,
    value: U256,
    data: &[u8],
    gas: U256,
    nonce: U96,
) -> FixedBytes<32> {
    let data_hash: FixedBytes<32> = keccak256(data);

    let mut struct_buf = Vec::with_capacity(32 * 6);
    struct_buf.extend_from_slice(keccak256(TRANSACTION_TYPE).as_slice());
    struct_buf.extend_from_slice(&address_word(to));
    struct_buf.extend_from_slice(&value.to_be_bytes::<32>());
    struct_buf.extend_from_slice(data_hash.as_slice());
    struct_buf.extend_from_slice(&gas.to_be_bytes::<32>());
    struct_buf.extend_from_slice(&nonce_word(nonce));
    let struct_hash = keccak256(struct_buf);

    let domain = domain_separator(chain_id, verifying_contract, name);

    // Final digest: keccak256("\x19\x01" || domainSeparator || structHash)
    let mut final_buf = Vec::with_capacity(2 + 32 + 32);
    final_buf.extend_from_slice(b"\x19\x01");
    final_buf.extend_from_slice(domain.as_slice());
    final_buf.extend_from_slice(struct_hash.as_slice());
    keccak256(final_buf)
}

fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(address.as_slice());
    word
}

fn nonce_word(nonce: U96) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[20..32].copy_from_slice(&nonce.to_be_bytes::<12>());
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn base_digest() -> FixedBytes<32> {
        transaction_digest(
            42161,
            Address::from([0xC0; 20]),
            "Treasury",
            Address::from([0x11; 20]),
            U256::from(5u64),
            &[0xDE, 0xAD],
            U256::from(75_000u64),
            U96::from(3u64),
        )
    }

    #[test]
    fn digest_is_deterministic() {
        assert_eq!(base_digest(), base_digest());
    }

    #[test]
    fn every_field_perturbs_the_digest() {
        let base = base_digest();
        let variants = vec![
            transaction_digest(
                1,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC1; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Vault",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x12; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(6u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAE],
                U256::from(75_000u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_001u64),
                U96::from(3u64),
            ),
            transaction_digest(
                42161,
                Address::from([0xC0; 20]),
                "Treasury",
                Address::from([0x11; 20]),
                U256::from(5u64),
                &[0xDE, 0xAD],
                U256::from(75_000u64),
                U96::from(4u64),
            ),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn empty_payload_is_distinct_from_zero_byte() {
        let empty = transaction_digest(
            42161,
            Address::from([0xC0; 20]),
            "Treasury",
            Address::from([0x11; 20]),
            U256::ZERO,
            &[],
            U256::ZERO,
            U96::ZERO,
        );
        let zero = transaction_digest(
            42161,
            Address::from([0xC0; 20]),
            "Treasury",
            Address::from([0x11; 20]),
            U256::ZERO,
            &[0x00],
            U256::ZERO,
            U96::ZERO,
        );
        assert_ne!(empty, zero);
    }
}
