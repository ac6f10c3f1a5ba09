//! Sub-call dispatch: external calls, self-targeted admin payloads, and the
//! batch coordinator.
//!
//! Self-targeted payloads are decoded against the `ISelfAdmin` ABI and
//! dispatched in-process instead of through a real external call. The only
//! privilege is the quorum signature that already authorized the request, so
//! a round trip through the call stack would add nothing.

use alloc::vec::Vec;

use alloy_sol_types::{sol, SolInterface};
use stylus_sdk::{
    alloy_primitives::{Address, Bytes, U256},
    call::RawCall,
    prelude::*,
};

use crate::{errors::*, events::*, wallet::MultiSigWallet};

sol! {
    /// Administrative surface reachable only as a self-targeted payload
    /// through `execute`.
    interface ISelfAdmin {
        function addOwner(address owner) external;
        function removeOwner(address owner) external;
        function replaceOwner(address oldOwner, address newOwner) external;
        function changeThreshold(uint16 threshold) external;
        function multiRequest(address[] to, uint256[] value, bytes[] data, uint256[] txnGas) external;
        function setOnlyOwnerRequest(bool allowOnlyOwnerRequest) external;
        function setTransferInactiveOwnershipAfter(uint256 window) external;
    }
}

use ISelfAdmin::ISelfAdminCalls;

impl MultiSigWallet {
    /// Perform one authorized (target, value, payload, gas ceiling) tuple and
    /// emit the matching signal. Failure is reported, never propagated: the
    /// counter has already advanced and a bad target must not block progress.
    pub(crate) fn perform_call(
        &mut self,
        sender: Address,
        to: Address,
        value: U256,
        data: &[u8],
        txn_gas: U256,
    ) {
        let ok = if to == self.vm().contract_address() {
            self.dispatch_self_call(data).is_ok()
        } else {
            let gas = u64::try_from(txn_gas).unwrap_or(u64::MAX);
            unsafe { RawCall::new_with_value(value).gas(gas).call(to, data) }.is_ok()
        };

        let signal_data = Bytes::copy_from_slice(data);
        if ok {
            log(
                self.vm(),
                TransactionExecuted {
                    sender,
                    to,
                    value,
                    data: signal_data,
                    txnGas: txn_gas,
                },
            );
        } else {
            log(
                self.vm(),
                TransactionFailed {
                    sender,
                    to,
                    value,
                    data: signal_data,
                    txnGas: txn_gas,
                },
            );
        }
    }

    /// Decode and run a self-targeted payload. An empty payload is a plain
    /// value transfer to the wallet itself and succeeds as a no-op.
    pub(crate) fn dispatch_self_call(&mut self, data: &[u8]) -> Result<(), WalletError> {
        if data.is_empty() {
            return Ok(());
        }
        let call = ISelfAdminCalls::abi_decode(data, true)
            .map_err(|_| WalletError::UnknownSelfCall(UnknownSelfCall {}))?;
        match call {
            ISelfAdminCalls::addOwner(call) => self.add_owner(call.owner),
            ISelfAdminCalls::removeOwner(call) => self.remove_owner(call.owner),
            ISelfAdminCalls::replaceOwner(call) => {
                self.replace_owner(call.oldOwner, call.newOwner)
            }
            ISelfAdminCalls::changeThreshold(call) => self.change_threshold(call.threshold),
            ISelfAdminCalls::multiRequest(call) => {
                self.multi_request(call.to, call.value, call.data, call.txnGas)
            }
            ISelfAdminCalls::setOnlyOwnerRequest(call) => {
                self.set_only_owner_request(call.allowOnlyOwnerRequest)
            }
            ISelfAdminCalls::setTransferInactiveOwnershipAfter(call) => {
                self.set_inactivity_minimum(call.window)
            }
        }
    }

    /// Batch coordinator: one authorized unit, sequential dispatch.
    ///
    /// A failing item is reported through its own `TransactionFailed` signal
    /// and the remainder still runs; rollback granularity is per item. The
    /// single counter increment happened in the outer `execute`.
    fn multi_request(
        &mut self,
        to: Vec<Address>,
        value: Vec<U256>,
        data: Vec<Bytes>,
        txn_gas: Vec<U256>,
    ) -> Result<(), WalletError> {
        if to.len() != value.len() || to.len() != data.len() || to.len() != txn_gas.len() {
            return Err(WalletError::BatchArityMismatch(BatchArityMismatch {}));
        }

        let sender = self.vm().msg_sender();
        for i in 0..to.len() {
            self.perform_call(sender, to[i], value[i], &data[i], txn_gas[i]);
        }
        Ok(())
    }
}
