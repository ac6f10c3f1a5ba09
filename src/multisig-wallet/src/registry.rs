//! Owner-set registry: membership, threshold, and instance policy mutations.
//!
//! None of these operations have an external ABI surface. They are reachable
//! only as self-targeted payloads through `execute` (see `dispatch`), so every
//! mutation inherits the quorum-signature requirement; there is no separate
//! admin authority. The one exception is `replace_owner` when invoked by the
//! continuity module, which substitutes the inactivity-window check for the
//! quorum check.

use stylus_sdk::{
    alloy_primitives::{aliases::U16, Address, U256},
    prelude::*,
};

use multisig_wallet_types::{MAX_OWNER_COUNT, MIN_INACTIVITY_WINDOW_SECS};

use crate::{errors::*, events::*, wallet::MultiSigWallet};

impl MultiSigWallet {
    /// Admit a new owner. The live count may never exceed the `uint16` cap.
    pub(crate) fn add_owner(&mut self, owner: Address) -> Result<(), WalletError> {
        if owner == Address::ZERO {
            return Err(WalletError::NewOwnerIsZero(NewOwnerIsZero {}));
        }
        if self.owners.get(owner) {
            return Err(WalletError::NewOwnerAlreadyOwner(NewOwnerAlreadyOwner {
                owner,
            }));
        }
        let count = self.owner_count.get();
        if count >= U16::from(MAX_OWNER_COUNT) {
            return Err(WalletError::TooManyOwners(TooManyOwners {}));
        }

        self.owners.insert(owner, true);
        self.owner_count.set(count + U16::from(1u8));
        self.last_active_of
            .insert(owner, U256::from(self.vm().block_timestamp()));
        log(self.vm(), OwnerAdded { owner });
        Ok(())
    }

    /// Retire an owner. Rejected if the remaining set could no longer reach
    /// the current threshold (which also keeps the set non-empty).
    pub(crate) fn remove_owner(&mut self, owner: Address) -> Result<(), WalletError> {
        if !self.owners.get(owner) {
            return Err(WalletError::OldOwnerNotOwner(OldOwnerNotOwner { owner }));
        }
        let count = self.owner_count.get();
        if count - U16::from(1u8) < self.threshold.get() {
            return Err(WalletError::CannotRemoveBelowThreshold(
                CannotRemoveBelowThreshold {},
            ));
        }

        self.clear_owner(owner);
        self.owner_count.set(count - U16::from(1u8));
        log(self.vm(), OwnerRemoved { owner });
        Ok(())
    }

    /// Atomic remove-and-add with the combined validation of both primitives.
    /// The live count is unchanged, so the threshold invariant cannot break.
    pub(crate) fn replace_owner(
        &mut self,
        old_owner: Address,
        new_owner: Address,
    ) -> Result<(), WalletError> {
        if new_owner == Address::ZERO {
            return Err(WalletError::NewOwnerIsZero(NewOwnerIsZero {}));
        }
        if self.owners.get(new_owner) {
            return Err(WalletError::NewOwnerAlreadyOwner(NewOwnerAlreadyOwner {
                owner: new_owner,
            }));
        }
        if !self.owners.get(old_owner) {
            return Err(WalletError::OldOwnerNotOwner(OldOwnerNotOwner {
                owner: old_owner,
            }));
        }

        self.clear_owner(old_owner);
        self.owners.insert(new_owner, true);
        self.last_active_of
            .insert(new_owner, U256::from(self.vm().block_timestamp()));
        log(self.vm(), OwnerRemoved { owner: old_owner });
        log(self.vm(), OwnerAdded { owner: new_owner });
        Ok(())
    }

    /// Move the quorum requirement. Must stay within `1..=owner_count`.
    pub(crate) fn change_threshold(&mut self, threshold: u16) -> Result<(), WalletError> {
        if threshold == 0 {
            return Err(WalletError::ThresholdIsZero(ThresholdIsZero {}));
        }
        let count = self.owner_count.get().to::<u16>();
        if threshold > count {
            return Err(WalletError::ThresholdAboveOwnerCount(
                ThresholdAboveOwnerCount {
                    threshold,
                    ownerCount: count,
                },
            ));
        }

        self.threshold.set(U16::from(threshold));
        log(self.vm(), ThresholdChanged { threshold });
        Ok(())
    }

    /// Toggle the owners-only submitter policy.
    pub(crate) fn set_only_owner_request(&mut self, allow: bool) -> Result<(), WalletError> {
        self.allow_only_owner_request.set(allow);
        log(
            self.vm(),
            OnlyOwnerRequestChanged {
                allowOnlyOwnerRequest: allow,
            },
        );
        Ok(())
    }

    /// Raise or lower the instance-level floor for per-owner inactivity
    /// windows. The protocol floor of 7 days is non-negotiable.
    pub(crate) fn set_inactivity_minimum(&mut self, window: U256) -> Result<(), WalletError> {
        let floor = U256::from(MIN_INACTIVITY_WINDOW_SECS);
        if window < floor {
            return Err(WalletError::WindowBelowMinimum(WindowBelowMinimum {
                window,
                minimum: floor,
            }));
        }

        self.inactivity_minimum.set(window);
        log(self.vm(), InactivityMinimumChanged { window });
        Ok(())
    }

    /// Drop a seat and the continuity settings bound to it.
    fn clear_owner(&mut self, owner: Address) {
        self.owners.insert(owner, false);
        self.inactivity_window_of.insert(owner, U256::ZERO);
        self.delegatee_of.insert(owner, Address::ZERO);
        self.last_active_of.insert(owner, U256::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn add_owner_validations() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);

        assert!(matches!(
            wallet.add_owner(Address::ZERO),
            Err(WalletError::NewOwnerIsZero(_))
        ));
        assert!(matches!(
            wallet.add_owner(addr(1)),
            Err(WalletError::NewOwnerAlreadyOwner(_))
        ));

        assert!(wallet.add_owner(addr(5)).is_ok());
        assert!(wallet.is_owner(addr(5)));
        assert_eq!(wallet.owner_count(), 4);
    }

    #[test]
    fn add_owner_respects_hard_cap() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);

        wallet.owner_count.set(U16::from(MAX_OWNER_COUNT));
        assert!(matches!(
            wallet.add_owner(addr(5)),
            Err(WalletError::TooManyOwners(_))
        ));
    }

    #[test]
    fn remove_owner_keeps_threshold_reachable() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);
        let [o1, o2, o3] = owners();

        assert!(wallet.remove_owner(o3).is_ok());
        assert_eq!(wallet.owner_count(), 2);
        assert!(!wallet.is_owner(o3));

        // 2 owners at threshold 2: nobody else may leave.
        assert!(matches!(
            wallet.remove_owner(o2),
            Err(WalletError::CannotRemoveBelowThreshold(_))
        ));
        assert!(wallet.is_owner(o1));
        assert!(wallet.is_owner(o2));

        assert!(matches!(
            wallet.remove_owner(addr(9)),
            Err(WalletError::OldOwnerNotOwner(_))
        ));
    }

    #[test]
    fn replace_owner_swaps_atomically() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);
        let [o1, o2, _] = owners();

        assert!(matches!(
            wallet.replace_owner(o1, o2),
            Err(WalletError::NewOwnerAlreadyOwner(_))
        ));
        assert!(matches!(
            wallet.replace_owner(addr(9), addr(5)),
            Err(WalletError::OldOwnerNotOwner(_))
        ));
        assert!(matches!(
            wallet.replace_owner(o1, Address::ZERO),
            Err(WalletError::NewOwnerIsZero(_))
        ));

        assert!(wallet.replace_owner(o1, addr(5)).is_ok());
        assert!(!wallet.is_owner(o1));
        assert!(wallet.is_owner(addr(5)));
        assert_eq!(wallet.owner_count(), 3);
    }

    #[test]
    fn change_threshold_bounds() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);

        assert!(matches!(
            wallet.change_threshold(0),
            Err(WalletError::ThresholdIsZero(_))
        ));
        assert!(matches!(
            wallet.change_threshold(4),
            Err(WalletError::ThresholdAboveOwnerCount(_))
        ));

        assert!(wallet.change_threshold(3).is_ok());
        assert_eq!(wallet.threshold(), 3);
    }

    #[test]
    fn inactivity_minimum_floor() {
        let vm = test_vm();
        let mut wallet = deploy(&vm, 2, false);
        let day = U256::from(24 * 60 * 60u64);

        assert!(matches!(
            wallet.set_inactivity_minimum(day),
            Err(WalletError::WindowBelowMinimum(_))
        ));
        assert!(wallet.set_inactivity_minimum(day * U256::from(31u8)).is_ok());
    }
}
