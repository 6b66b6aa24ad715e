multiversx_sc::imports!();

use crate::errors::ERR_TRANSFER_TO_TREASURY;

// ============================================================
// Transfer hook — every outbound transfer first gives the
// halving schedule a chance to run, then moves funds.
// ============================================================

#[multiversx_sc::module]
pub trait TransferHookModule:
    crate::ledger::LedgerModule
    + crate::access_control::AccessControlModule
    + crate::pause::PauseModule
    + crate::reentrancy_guard::ReentrancyGuardModule
    + crate::rate_limit::RateLimitModule
    + crate::halving::HalvingModule
{
    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) -> bool {
        self.before_transfer(&to);

        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
        true
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) -> bool {
        self.before_transfer(&to);

        let spender = self.blockchain().get_caller();
        self.spend_allowance(&from, &spender, &amount);
        self.move_balance(&from, &to, &amount);
        true
    }

    // ========================================================
    // INTERNAL: pre-transfer hook
    // Runs to completion before any balance of the current
    // transfer is touched. A halving that cannot burn right
    // now (not due, rate limited, nothing to burn) is skipped
    // rather than failing the transfer.
    // ========================================================

    fn before_transfer(&self, to: &ManagedAddress) {
        self.require_not_paused();
        self.require_not_entered();

        if self.halving_ready() {
            self.execute_halving();
        }

        require!(*to != self.treasury().get(), ERR_TRANSFER_TO_TREASURY);
    }
}
