//! Structured signals emitted by the wallet.
//!
//! `TransactionExecuted`/`TransactionFailed` carry identical fields so that
//! indexers can reconstruct every authorized request regardless of outcome.

use alloy_sol_types::sol;

sol! {
    event OwnerAdded(address indexed owner);
    event OwnerRemoved(address indexed owner);
    event ThresholdChanged(uint16 threshold);

    event TransactionExecuted(
        address indexed sender,
        address indexed to,
        uint256 value,
        bytes data,
        uint256 txnGas
    );
    event TransactionFailed(
        address indexed sender,
        address indexed to,
        uint256 value,
        bytes data,
        uint256 txnGas
    );

    event OnlyOwnerRequestChanged(bool allowOnlyOwnerRequest);
    event InactivityMinimumChanged(uint256 window);
    event OwnerSettingsChanged(address indexed owner, uint256 window, address indexed delegatee);
    event OwnershipTakenOver(address indexed previousOwner, address indexed newOwner);
}
