//! The wallet entrypoint: storage, the public ABI surface, and the
//! authorization/execution engine.
//!
//! Authorization flow for `execute`:
//! 1. submitter policy (optional owners-only gate)
//! 2. digest over the live replay counter
//! 3. signature verification against the current owner set
//! 4. gas-ceiling check (fatal if the declared ceiling cannot be covered)
//! 5. counter advance, *then* the sub-call: a reentrant or failing target
//!    can never make the same bundle authorize twice
//! 6. `TransactionExecuted` / `TransactionFailed` signal
//!
//! `takeOverOwnership` is the single state-changing path that bypasses step 3;
//! it is gated on the per-owner inactivity window instead.

use alloc::{string::String, vec, vec::Vec};

use stylus_sdk::{
    alloy_primitives::{
        aliases::{U16, U96},
        Address, FixedBytes, U256,
    },
    prelude::*,
};

use multisig_wallet_types::{split_bundle, MAX_OWNER_COUNT, CONTRACT_VERSION};

use crate::{
    errors::*,
    events::*,
    utils::{crypto, digest, gas},
};

sol_storage! {
    /// One wallet instance. All state is mutated exclusively through the
    /// instance's own authorized call paths.
    #[entrypoint]
    pub struct MultiSigWallet {
        /// Human-readable instance name, fixed at initialization and bound
        /// into the EIP-712 domain.
        string name;
        bool initialized;
        /// When set, only owners may submit `execute` calls.
        bool allow_only_owner_request;
        /// Minimum distinct owner signatures per authorized request.
        uint16 threshold;
        uint16 owner_count;
        /// Anti-replay counter; +1 per authorized top-level request.
        uint96 nonce;
        mapping(address => bool) owners;

        /// Floor for per-owner inactivity windows; raised only through the
        /// authorized self-call path.
        uint256 inactivity_minimum;
        mapping(address => uint256) inactivity_window_of;
        mapping(address => address) delegatee_of;
        mapping(address => uint256) last_active_of;
    }
}

#[public]
impl MultiSigWallet {
    /// One-shot setup, called by the factory right after instantiation.
    pub fn initialize(
        &mut self,
        name: String,
        owners: Vec<Address>,
        threshold: u16,
        allow_only_owner_request: bool,
    ) -> Result<(), WalletError> {
        if self.initialized.get() {
            return Err(WalletError::AlreadyInitialized(AlreadyInitialized {}));
        }
        if owners.is_empty() {
            return Err(WalletError::InvalidSetup(InvalidSetup {}));
        }
        if owners.len() > MAX_OWNER_COUNT as usize {
            return Err(WalletError::TooManyOwners(TooManyOwners {}));
        }
        if threshold == 0 {
            return Err(WalletError::ThresholdIsZero(ThresholdIsZero {}));
        }
        if threshold as usize > owners.len() {
            return Err(WalletError::ThresholdAboveOwnerCount(
                ThresholdAboveOwnerCount {
                    threshold,
                    ownerCount: owners.len() as u16,
                },
            ));
        }

        let now = U256::from(self.vm().block_timestamp());
        for owner in &owners {
            if *owner == Address::ZERO {
                return Err(WalletError::NewOwnerIsZero(NewOwnerIsZero {}));
            }
            if self.owners.get(*owner) {
                return Err(WalletError::NewOwnerAlreadyOwner(NewOwnerAlreadyOwner {
                    owner: *owner,
                }));
            }
            self.owners.insert(*owner, true);
            self.last_active_of.insert(*owner, now);
        }

        self.name.set_str(&name);
        self.threshold.set(U16::from(threshold));
        self.owner_count.set(U16::from(owners.len() as u16));
        self.allow_only_owner_request.set(allow_only_owner_request);
        self.inactivity_minimum
            .set(U256::from(multisig_wallet_types::MIN_INACTIVITY_WINDOW_SECS));
        self.initialized.set(true);
        Ok(())
    }

    // ---- Read surface ------------------------------------------------------

    pub fn name(&self) -> String {
        self.name.get_string()
    }

    pub fn version(&self) -> String {
        CONTRACT_VERSION.into()
    }

    pub fn threshold(&self) -> u16 {
        self.threshold.get().to::<u16>()
    }

    pub fn owner_count(&self) -> u16 {
        self.owner_count.get().to::<u16>()
    }

    pub fn nonce(&self) -> U96 {
        self.nonce.get()
    }

    pub fn is_owner(&self, account: Address) -> bool {
        self.owners.get(account)
    }

    pub fn allow_only_owner_request(&self) -> bool {
        self.allow_only_owner_request.get()
    }

    /// Continuity settings for one owner: (window, delegatee, last active).
    pub fn owner_settings(&self, owner: Address) -> (U256, Address, U256) {
        (
            self.inactivity_window_of.get(owner),
            self.delegatee_of.get(owner),
            self.last_active_of.get(owner),
        )
    }

    /// The digest a quorum must sign for the given request fields. Exposed so
    /// off-chain signers can cross-check what they are about to sign.
    pub fn request_digest(
        &self,
        to: Address,
        value: U256,
        data: Vec<u8>,
        txn_gas: U256,
        nonce: U96,
    ) -> FixedBytes<32> {
        self.request_digest_inner(to, value, &data, txn_gas, nonce)
    }

    /// Off-chain pre-validation: would this bundle reach quorum for the given
    /// request at the given counter value? Mutates nothing; any rejection
    /// reason collapses to `false`.
    pub fn is_valid_signature(
        &self,
        to: Address,
        value: U256,
        data: Vec<u8>,
        txn_gas: U256,
        nonce: U96,
        signatures: Vec<u8>,
    ) -> bool {
        if !self.initialized.get() {
            return false;
        }
        let digest = self.request_digest_inner(to, value, &data, txn_gas, nonce);
        self.verify_signatures(digest, &signatures).is_ok()
    }

    // ---- Execution engine --------------------------------------------------

    /// Authorize and perform one request.
    ///
    /// Quorum rejections revert with the specific reason (the counter has not
    /// moved, nothing irreversible happened). Once quorum is verified the
    /// counter advances and stays advanced: a failing sub-call is reported via
    /// `TransactionFailed` instead of reverting.
    pub fn execute(
        &mut self,
        to: Address,
        value: U256,
        data: Vec<u8>,
        txn_gas: U256,
        signatures: Vec<u8>,
    ) -> Result<(), WalletError> {
        self.ensure_initialized()?;
        let sender = self.vm().msg_sender();
        if self.allow_only_owner_request.get() && !self.owners.get(sender) {
            return Err(WalletError::SenderNotOwner(SenderNotOwner { sender }));
        }

        let nonce = self.nonce.get();
        let digest = self.request_digest_inner(to, value, &data, txn_gas, nonce);
        let signers = self.verify_signatures(digest, &signatures)?;
        self.ensure_gas_budget(txn_gas)?;

        // Advance the counter before dispatch so the bundle can never
        // authorize a second time, even if the target reenters.
        self.nonce.set(nonce + U96::from(1u8));
        self.record_activity(&signers);

        self.perform_call(sender, to, value, &data, txn_gas);
        Ok(())
    }

    // ---- Ownership continuity ----------------------------------------------

    /// Owner self-service: declare an inactivity window and a successor.
    ///
    /// Not quorum-gated: an owner only ever binds their own seat, and the
    /// window can never undercut the instance-level minimum.
    pub fn set_owner_settings(
        &mut self,
        window: U256,
        delegatee: Address,
    ) -> Result<(), WalletError> {
        self.ensure_initialized()?;
        let caller = self.vm().msg_sender();
        if !self.owners.get(caller) {
            return Err(WalletError::CallerNotOwner(CallerNotOwner { caller }));
        }
        let minimum = self.inactivity_minimum.get();
        if window < minimum {
            return Err(WalletError::WindowBelowMinimum(WindowBelowMinimum {
                window,
                minimum,
            }));
        }
        if self.owners.get(delegatee) {
            return Err(WalletError::DelegateeIsOwner(DelegateeIsOwner { delegatee }));
        }

        self.inactivity_window_of.insert(caller, window);
        self.delegatee_of.insert(caller, delegatee);
        self.last_active_of
            .insert(caller, U256::from(self.vm().block_timestamp()));
        log(
            self.vm(),
            OwnerSettingsChanged {
                owner: caller,
                window,
                delegatee,
            },
        );
        Ok(())
    }

    /// Claim the seat of an inactive owner. Caller must be the owner's
    /// declared delegatee and the owner's inactivity window must have fully
    /// elapsed since their last authorized activity.
    pub fn take_over_ownership(&mut self, owner: Address) -> Result<(), WalletError> {
        self.ensure_initialized()?;
        let sender = self.vm().msg_sender();
        if sender != self.delegatee_of.get(owner) {
            return Err(WalletError::SenderNotDelegatee(SenderNotDelegatee {
                sender,
            }));
        }
        if !self.owners.get(owner) {
            return Err(WalletError::OldOwnerNotOwner(OldOwnerNotOwner { owner }));
        }
        let window = self.inactivity_window_of.get(owner);
        let last_active = self.last_active_of.get(owner);
        let now = U256::from(self.vm().block_timestamp());
        if now < last_active.saturating_add(window) {
            return Err(WalletError::OwnerStillActive(OwnerStillActive { owner }));
        }

        self.replace_owner(owner, sender)?;
        log(
            self.vm(),
            OwnershipTakenOver {
                previousOwner: owner,
                newOwner: sender,
            },
        );
        Ok(())
    }

    /// Plain value transfers fund the wallet.
    #[receive]
    #[payable]
    pub fn receive(&mut self) -> Result<(), Vec<u8>> {
        Ok(())
    }
}

impl MultiSigWallet {
    fn ensure_initialized(&self) -> Result<(), WalletError> {
        if !self.initialized.get() {
            return Err(WalletError::NotInitialized(NotInitialized {}));
        }
        Ok(())
    }

    fn request_digest_inner(
        &self,
        to: Address,
        value: U256,
        data: &[u8],
        txn_gas: U256,
        nonce: U96,
    ) -> FixedBytes<32> {
        digest::transaction_digest(
            self.vm().chain_id(),
            self.vm().contract_address(),
            &self.name.get_string(),
            to,
            value,
            data,
            txn_gas,
            nonce,
        )
    }

    /// Validate a signature bundle against the digest and the current owner
    /// set. Returns the recovered signers on success.
    ///
    /// Records must recover to strictly ascending owner addresses; the single
    /// comparison against the previous signer rejects duplicates and enforces
    /// the canonical bundle order at once. Off-chain collection must pre-sort
    /// by signer address; that is a caller contract, not an engine choice.
    fn verify_signatures(
        &self,
        digest: FixedBytes<32>,
        signatures: &[u8],
    ) -> Result<Vec<Address>, WalletError> {
        let records = split_bundle(signatures).map_err(|_| {
            WalletError::SignaturesNotAligned(SignaturesNotAligned {
                length: U256::from(signatures.len()),
            })
        })?;

        let threshold = self.threshold.get().to::<u16>() as usize;
        if records.len() < threshold {
            return Err(WalletError::ThresholdNotReached(ThresholdNotReached {
                provided: U256::from(records.len()),
                threshold: U256::from(threshold),
            }));
        }

        let mut signers = Vec::with_capacity(records.len());
        let mut last = Address::ZERO;
        for record in &records {
            if record.is_contract_signature() {
                return Err(WalletError::ContractSignaturesUnsupported(
                    ContractSignaturesUnsupported {},
                ));
            }
            let v = record
                .normalized_v()
                .ok_or(WalletError::InvalidSignature(InvalidSignature {}))?;
            let signer = crypto::ecrecover_address(digest, v, &record.r, &record.s)
                .map_err(|_| WalletError::InvalidSignature(InvalidSignature {}))?;
            if signer <= last {
                return Err(WalletError::OwnerAlreadySigned(OwnerAlreadySigned {
                    owner: signer,
                }));
            }
            if !self.owners.get(signer) {
                return Err(WalletError::InvalidOwner(InvalidOwner { signer }));
            }
            last = signer;
            signers.push(signer);
        }

        // Every record checked out, and the record-count gate above already
        // guaranteed quorum.
        Ok(signers)
    }

    fn ensure_gas_budget(&self, txn_gas: U256) -> Result<(), WalletError> {
        let available = U256::from(self.vm().evm_gas_left());
        let required = gas::required_gas(txn_gas);
        if available < required {
            return Err(WalletError::NotEnoughGas(NotEnoughGas {
                available,
                required,
            }));
        }
        Ok(())
    }

    /// Stamp last-active for every signer of a just-authorized request.
    /// Co-signing is the liveness signal the continuity module watches.
    fn record_activity(&mut self, signers: &[Address]) {
        let now = U256::from(self.vm().block_timestamp());
        for signer in signers {
            self.last_active_of.insert(*signer, now);
        }
    }
}
