//! Shared types for the multisig wallet: protocol constants, the signed
//! transaction description, and the fixed-size signature record format.
//!
//! Everything here is `no_std` + `alloc` so the same definitions serve the
//! Stylus contract and the host-side tooling.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod protocol;
pub mod signature;
pub mod transaction;

pub use protocol::{
    CONTRACT_VERSION, DOMAIN_TYPE, MAX_OWNER_COUNT, MIN_INACTIVITY_WINDOW_SECS, TRANSACTION_TYPE,
};
pub use signature::{split_bundle, BundleError, SignatureRecord, SIGNATURE_LENGTH};
pub use transaction::Transaction;
