//! Signer recovery for signature records.
//!
//! Recovery goes through the EVM `ecrecover` precompile at address `0x01`,
//! one record at a time. The caller is responsible for `v` triage (contract
//! signatures and malformed values are rejected before reaching this module).

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes},
    call::RawCall,
};

/// Gas cap for one precompile invocation.
pub const ECRECOVER_GAS: u64 = 50_000;

/// Address of the `ecrecover` precompile.
pub fn ecrecover_precompile() -> Address {
    let mut precompile = [0u8; 20];
    precompile[19] = 1;
    Address::from_slice(&precompile)
}

/// Recover an EOA address from a 32-byte digest and a normalized signature.
///
/// `v` must already be 27 or 28. A failed precompile call, short return data,
/// or a zero recovery all reject the record.
pub fn ecrecover_address(
    digest: FixedBytes<32>,
    v: u8,
    r: &[u8; 32],
    s: &[u8; 32],
) -> Result<Address, ()> {
    let input = ecrecover_input(digest, v, r, s);
    let out = unsafe {
        RawCall::new_static()
            .gas(ECRECOVER_GAS)
            .call(ecrecover_precompile(), &input)
    }
    .map_err(|_| ())?;
    if out.len() < 32 {
        return Err(());
    }
    // precompile returns a 32-byte word with the address in the low 20 bytes.
    let recovered = Address::from_slice(&out[12..32]);
    if recovered == Address::ZERO {
        return Err(());
    }
    Ok(recovered)
}

/// Precompile calldata layout: `digest || v (32-byte word) || r || s`.
pub fn ecrecover_input(digest: FixedBytes<32>, v: u8, r: &[u8; 32], s: &[u8; 32]) -> [u8; 128] {
    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    input[63] = v;
    input[64..96].copy_from_slice(r);
    input[96..128].copy_from_slice(s);
    input
}
