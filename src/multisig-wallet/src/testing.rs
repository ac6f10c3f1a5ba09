//! Test fixtures shared across the contract test modules.
//!
//! Signature records in tests are fabricated: each record gets a unique `r`
//! and the `ecrecover` precompile is mocked to map (digest, record) to the
//! intended signer, which keeps every verification path deterministic without
//! real key material. The real digest → sign → recover pipeline is exercised
//! host-side in the encoder crate.

use stylus_sdk::alloy_primitives::{Address, FixedBytes};
use stylus_sdk::testing::*;

use multisig_wallet_types::SignatureRecord;

use crate::utils::crypto;
use crate::wallet::MultiSigWallet;

pub(crate) const WALLET_NAME: &str = "Treasury";
pub(crate) const DEFAULT_GAS: u64 = 75_000;
pub(crate) const START_TIME: u64 = 1_700_000_000;

/// Deterministic address with `n` as its low byte; ascending in `n`.
pub(crate) fn addr(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = n;
    Address::from(bytes)
}

pub(crate) fn wallet_address() -> Address {
    addr(0xC0)
}

pub(crate) fn submitter() -> Address {
    addr(0xA1)
}

/// Three ascending owners.
pub(crate) fn owners() -> [Address; 3] {
    [addr(1), addr(2), addr(3)]
}

pub(crate) fn test_vm() -> TestVM {
    let vm = TestVMBuilder::new()
        .sender(submitter())
        .contract_address(wallet_address())
        .build();
    vm.set_block_timestamp(START_TIME);
    vm
}

pub(crate) fn deploy(vm: &TestVM, threshold: u16, only_owner_request: bool) -> MultiSigWallet {
    let mut wallet = MultiSigWallet::from(vm);
    let result = wallet.initialize(
        WALLET_NAME.into(),
        owners().to_vec(),
        threshold,
        only_owner_request,
    );
    assert!(result.is_ok());
    wallet
}

/// Fabricate a record unique to `index` and register a recovery mock mapping
/// it to `signer` for `digest`.
pub(crate) fn mock_signature(
    vm: &TestVM,
    digest: FixedBytes<32>,
    index: u8,
    signer: Address,
) -> SignatureRecord {
    let record = SignatureRecord {
        r: [index; 32],
        s: [0x5A; 32],
        v: 27,
    };
    let input = crypto::ecrecover_input(digest, 27, &record.r, &record.s);
    let mut word = [0u8; 32];
    word[12..32].copy_from_slice(signer.as_slice());
    vm.mock_call(
        crypto::ecrecover_precompile(),
        input.to_vec(),
        Ok(word.to_vec()),
    );
    record
}

/// Bundle with one mocked record per signer, concatenated in the given order.
pub(crate) fn signed_bundle(vm: &TestVM, digest: FixedBytes<32>, signers: &[Address]) -> Vec<u8> {
    let mut bundle = Vec::new();
    for (i, signer) in signers.iter().enumerate() {
        let record = mock_signature(vm, digest, i as u8 + 1, *signer);
        bundle.extend_from_slice(&record.to_bytes());
    }
    bundle
}
