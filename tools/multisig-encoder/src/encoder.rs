//! Digest computation, signing, and bundle assembly.
//!
//! The digest construction here must match the on-chain builder bit-for-bit;
//! the domain and struct type strings are shared through
//! `multisig-wallet-types` to keep both sides in sync.

use alloy_primitives::{Address, FixedBytes, U256};
use k256::ecdsa::{RecoveryId, Signature, SigningKey, VerifyingKey};
use sha3::{Digest, Keccak256};

use multisig_wallet_types::{
    SignatureRecord, Transaction, CONTRACT_VERSION, DOMAIN_TYPE, SIGNATURE_LENGTH,
    TRANSACTION_TYPE,
};

fn keccak256_bytes(bytes: &[u8]) -> FixedBytes<32> {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(out.as_slice());
    FixedBytes(buf)
}

fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(address.as_slice());
    word
}

/// EIP-712 domain separator (must match the on-chain `domain_separator`).
pub fn domain_separator(
    chain_id: u64,
    verifying_contract: Address,
    name: &str,
) -> FixedBytes<32> {
    let mut buf = Vec::with_capacity(32 * 5);
    buf.extend_from_slice(keccak256_bytes(DOMAIN_TYPE).as_slice());
    buf.extend_from_slice(keccak256_bytes(name.as_bytes()).as_slice());
    buf.extend_from_slice(keccak256_bytes(CONTRACT_VERSION.as_bytes()).as_slice());
    buf.extend_from_slice(&U256::from(chain_id).to_be_bytes::<32>());
    buf.extend_from_slice(&address_word(verifying_contract));
    keccak256_bytes(&buf)
}

/// Compute the wallet digest for a request (must match the on-chain
/// `transaction_digest`).
pub fn transaction_digest(
    chain_id: u64,
    verifying_contract: Address,
    name: &str,
    txn: &Transaction,
) -> FixedBytes<32> {
    let data_hash = keccak256_bytes(&txn.data);

    let mut struct_buf = Vec::with_capacity(32 * 6);
    struct_buf.extend_from_slice(keccak256_bytes(TRANSACTION_TYPE).as_slice());
    struct_buf.extend_from_slice(&address_word(txn.to));
    struct_buf.extend_from_slice(&txn.value.to_be_bytes::<32>());
    struct_buf.extend_from_slice(data_hash.as_slice());
    struct_buf.extend_from_slice(&txn.gas.to_be_bytes::<32>());
    let mut nonce_word = [0u8; 32];
    nonce_word[20..32].copy_from_slice(&txn.nonce.to_be_bytes::<12>());
    struct_buf.extend_from_slice(&nonce_word);
    let struct_hash = keccak256_bytes(&struct_buf);

    let domain = domain_separator(chain_id, verifying_contract, name);

    let mut final_buf = Vec::with_capacity(2 + 32 + 32);
    final_buf.extend_from_slice(b"\x19\x01");
    final_buf.extend_from_slice(domain.as_slice());
    final_buf.extend_from_slice(struct_hash.as_slice());
    keccak256_bytes(&final_buf)
}

/// Derive the Ethereum address for a verifying key.
pub fn signer_address(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    // Skip the 0x04 uncompressed-point tag.
    let hash = keccak256_bytes(&point.as_bytes()[1..]);
    Address::from_slice(&hash.as_slice()[12..32])
}

/// Sign a digest, producing one 65-byte wallet record with `v` in {27, 28}.
pub fn sign_digest(
    key: &SigningKey,
    digest: FixedBytes<32>,
) -> Result<SignatureRecord, k256::ecdsa::Error> {
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice())?;
    let bytes = signature.to_bytes();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&bytes[..32]);
    s.copy_from_slice(&bytes[32..]);
    Ok(SignatureRecord {
        r,
        s,
        v: 27 + recovery_id.to_byte(),
    })
}

/// Recover the signer address from a digest and a record. `None` for records
/// the wallet would reject before recovery (contract-signature flag, bad `v`).
pub fn recover_address(digest: FixedBytes<32>, record: &SignatureRecord) -> Option<Address> {
    let v = record.normalized_v()?;
    let recovery_id = RecoveryId::from_byte(v - 27)?;
    let signature = Signature::from_scalars(record.r, record.s).ok()?;
    let key =
        VerifyingKey::recover_from_prehash(digest.as_slice(), &signature, recovery_id).ok()?;
    Some(signer_address(&key))
}

/// Concatenate records in strictly ascending signer-address order, the only
/// order the wallet accepts.
pub fn assemble_bundle(mut signed: Vec<(Address, SignatureRecord)>) -> Vec<u8> {
    signed.sort_by_key(|(signer, _)| *signer);
    let mut bundle = Vec::with_capacity(signed.len() * SIGNATURE_LENGTH);
    for (_, record) in &signed {
        bundle.extend_from_slice(&record.to_bytes());
    }
    bundle
}

/// Hex-encode a bundle the way submission tooling expects it.
pub fn bundle_to_hex(bundle: &[u8]) -> String {
    format!("0x{}", hex::encode(bundle))
}

/// Sign a request with every key and assemble the submission-ready bundle.
pub fn collect_signatures(
    keys: &[SigningKey],
    chain_id: u64,
    verifying_contract: Address,
    name: &str,
    txn: &Transaction,
) -> Result<Vec<u8>, k256::ecdsa::Error> {
    let digest = transaction_digest(chain_id, verifying_contract, name, txn);
    let mut signed = Vec::with_capacity(keys.len());
    for key in keys {
        let record = sign_digest(key, digest)?;
        signed.push((signer_address(key.verifying_key()), record));
    }
    Ok(assemble_bundle(signed))
}
