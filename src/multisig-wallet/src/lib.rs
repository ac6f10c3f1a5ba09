//! Stylus threshold multi-signature wallet.
//!
//! A set of mutually-trusting owners jointly authorizes outbound calls by
//! collecting off-chain signatures over a canonical EIP-712 digest; any party
//! then submits the aggregated bundle for on-chain verification and execution.
//!
//! Design notes:
//! - Quorum signatures are the only authority. Owner-set and threshold changes
//!   travel as self-targeted payloads through the same `execute` path as any
//!   other request and are dispatched in-process (`dispatch` module).
//! - The replay counter advances before the sub-call, and a failed sub-call
//!   never rolls it back: a bad target cannot force signature reuse or block
//!   the wallet from making progress.
//! - The ownership continuity module (`takeOverOwnership`) is the single path
//!   that bypasses signature verification; its soundness rests entirely on the
//!   per-owner inactivity window.

#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod registry;
pub mod utils;
pub mod wallet;

#[cfg(test)]
pub(crate) mod testing;

pub use wallet::MultiSigWallet;
