//! Gas-ceiling accounting for the execution engine.

use stylus_sdk::alloy_primitives::U256;

/// Fixed allowance for engine bookkeeping around the sub-call (counter write,
/// event emission, return handling).
pub const CALL_BOOKKEEPING_GAS: u64 = 2_500;

/// Gas that must still be available for a declared ceiling to be honored.
///
/// EIP-150 forwards at most 63/64 of remaining gas to a call, so the engine
/// retains the complement on top of the ceiling plus its bookkeeping
/// allowance. Declaring a ceiling the current call cannot cover is a fatal
/// condition: verification and the counter advance must never be starved.
pub fn required_gas(txn_gas: U256) -> U256 {
    txn_gas
        .saturating_add(txn_gas / U256::from(63u64))
        .saturating_add(U256::from(CALL_BOOKKEEPING_GAS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ceiling_still_needs_bookkeeping() {
        assert_eq!(required_gas(U256::ZERO), U256::from(CALL_BOOKKEEPING_GAS));
    }

    #[test]
    fn retention_follows_eip150() {
        let required = required_gas(U256::from(63_000u64));
        assert_eq!(
            required,
            U256::from(63_000u64 + 1_000 + CALL_BOOKKEEPING_GAS)
        );
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let required = required_gas(U256::MAX);
        assert_eq!(required, U256::MAX);
    }
}
