//! Fixed-size signature records and bundle splitting.
//!
//! A bundle is the plain concatenation of 65-byte `r || s || v` records, one
//! per signer, assembled off-chain in strictly ascending signer-address order.
//! The contract enforces the ordering; this module only handles the framing.

use alloc::vec::Vec;

/// Length of one signature record in bytes: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// Errors during bundle framing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BundleError {
    /// Bundle length is not a multiple of [`SIGNATURE_LENGTH`].
    Misaligned,
}

/// One decoded signature record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SignatureRecord {
    pub r: [u8; 32],
    pub s: [u8; 32],
    pub v: u8,
}

impl SignatureRecord {
    /// Decode a record from exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != SIGNATURE_LENGTH {
            return None;
        }
        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);
        Some(Self { r, s, v: bytes[64] })
    }

    /// Encode the record back to its wire form.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut out = [0u8; SIGNATURE_LENGTH];
        out[0..32].copy_from_slice(&self.r);
        out[32..64].copy_from_slice(&self.s);
        out[64] = self.v;
        out
    }

    /// A `v` of zero flags an EIP-1271 contract signature, which this wallet
    /// does not support.
    pub fn is_contract_signature(&self) -> bool {
        self.v == 0
    }

    /// Normalize `v` to the `ecrecover` convention. Accepts 1, 27 and 28;
    /// anything else (including the contract-signature flag 0) is invalid.
    pub fn normalized_v(&self) -> Option<u8> {
        match self.v {
            27 | 28 => Some(self.v),
            1 => Some(28),
            _ => None,
        }
    }
}

/// Split a bundle into records. Rejects bundles whose length is not
/// record-aligned; an empty bundle yields an empty list.
pub fn split_bundle(bytes: &[u8]) -> Result<Vec<SignatureRecord>, BundleError> {
    if bytes.len() % SIGNATURE_LENGTH != 0 {
        return Err(BundleError::Misaligned);
    }
    let mut records = Vec::with_capacity(bytes.len() / SIGNATURE_LENGTH);
    for chunk in bytes.chunks_exact(SIGNATURE_LENGTH) {
        // chunks_exact guarantees the length, so from_slice cannot fail here.
        if let Some(record) = SignatureRecord::from_slice(chunk) {
            records.push(record);
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn splits_aligned_bundles() {
        let mut bundle = vec![0u8; 2 * SIGNATURE_LENGTH];
        bundle[64] = 27;
        bundle[SIGNATURE_LENGTH + 64] = 28;
        let records = split_bundle(&bundle).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].v, 27);
        assert_eq!(records[1].v, 28);
    }

    #[test]
    fn rejects_misaligned_bundles() {
        let bundle = vec![0u8; SIGNATURE_LENGTH + 1];
        assert_eq!(split_bundle(&bundle), Err(BundleError::Misaligned));
    }

    #[test]
    fn empty_bundle_is_empty() {
        assert!(split_bundle(&[]).unwrap().is_empty());
    }

    #[test]
    fn record_round_trips() {
        let record = SignatureRecord {
            r: [0xAA; 32],
            s: [0xBB; 32],
            v: 28,
        };
        let decoded = SignatureRecord::from_slice(&record.to_bytes()).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn v_normalization() {
        let mk = |v| SignatureRecord {
            r: [0; 32],
            s: [0; 32],
            v,
        };
        assert_eq!(mk(27).normalized_v(), Some(27));
        assert_eq!(mk(28).normalized_v(), Some(28));
        assert_eq!(mk(1).normalized_v(), Some(28));
        assert_eq!(mk(0).normalized_v(), None);
        assert_eq!(mk(29).normalized_v(), None);
        assert!(mk(0).is_contract_signature());
    }
}
