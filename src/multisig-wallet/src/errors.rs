//! Typed errors for every rejection the wallet can surface.
//!
//! Authorization, policy, resource and continuity rejections revert the call
//! that raised them. Sub-call failures are *not* errors: they are reported via
//! the `TransactionFailed` event so a bad target cannot force replay of a
//! signature bundle (see `wallet::MultiSigWallet::execute`).

use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

sol! {
    // Lifecycle.
    error AlreadyInitialized();
    error NotInitialized();
    error InvalidSetup();

    // Authorization: abort with no state change, counter untouched.
    error SenderNotOwner(address sender);
    error SignaturesNotAligned(uint256 length);
    error ThresholdNotReached(uint256 provided, uint256 threshold);
    error ContractSignaturesUnsupported();
    error InvalidSignature();
    error OwnerAlreadySigned(address owner);
    error InvalidOwner(address signer);

    // Resource: the declared gas ceiling would starve verification bookkeeping.
    error NotEnoughGas(uint256 available, uint256 required);

    // Owner-set policy.
    error TooManyOwners();
    error NewOwnerAlreadyOwner(address owner);
    error NewOwnerIsZero();
    error OldOwnerNotOwner(address owner);
    error CannotRemoveBelowThreshold();
    error ThresholdIsZero();
    error ThresholdAboveOwnerCount(uint16 threshold, uint16 ownerCount);

    // Ownership continuity.
    error CallerNotOwner(address caller);
    error WindowBelowMinimum(uint256 window, uint256 minimum);
    error DelegateeIsOwner(address delegatee);
    error OwnerStillActive(address owner);
    error SenderNotDelegatee(address sender);

    // Self-call dispatch.
    error UnknownSelfCall();
    error BatchArityMismatch();
}

#[derive(SolidityError)]
pub enum WalletError {
    AlreadyInitialized(AlreadyInitialized),
    NotInitialized(NotInitialized),
    InvalidSetup(InvalidSetup),
    SenderNotOwner(SenderNotOwner),
    SignaturesNotAligned(SignaturesNotAligned),
    ThresholdNotReached(ThresholdNotReached),
    ContractSignaturesUnsupported(ContractSignaturesUnsupported),
    InvalidSignature(InvalidSignature),
    OwnerAlreadySigned(OwnerAlreadySigned),
    InvalidOwner(InvalidOwner),
    NotEnoughGas(NotEnoughGas),
    TooManyOwners(TooManyOwners),
    NewOwnerAlreadyOwner(NewOwnerAlreadyOwner),
    NewOwnerIsZero(NewOwnerIsZero),
    OldOwnerNotOwner(OldOwnerNotOwner),
    CannotRemoveBelowThreshold(CannotRemoveBelowThreshold),
    ThresholdIsZero(ThresholdIsZero),
    ThresholdAboveOwnerCount(ThresholdAboveOwnerCount),
    CallerNotOwner(CallerNotOwner),
    WindowBelowMinimum(WindowBelowMinimum),
    DelegateeIsOwner(DelegateeIsOwner),
    OwnerStillActive(OwnerStillActive),
    SenderNotDelegatee(SenderNotDelegatee),
    UnknownSelfCall(UnknownSelfCall),
    BatchArityMismatch(BatchArityMismatch),
}
