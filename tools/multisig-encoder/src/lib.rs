//! Host-side tooling for the Stylus multisig wallet: canonical digest
//! computation, recoverable ECDSA signing, and bundle assembly in the
//! strictly-ascending signer order the wallet verifies.
//!
//! Off-chain signature collection must pre-sort records by signer address
//! before submission; that contract lives here, not in the wallet.

mod encoder;

pub use encoder::{
    assemble_bundle, bundle_to_hex, collect_signatures, domain_separator, recover_address,
    sign_digest, signer_address, transaction_digest,
};
