multiversx_sc::imports!();

use crate::errors::{ERR_EMPTY_TREASURY, ERR_NOT_DUE, ERR_RATE_LIMITED, ERR_ZERO_BURN};
use crate::types::HalvingSchedule;

/// Rates are whole percentages
const PERCENT_DENOMINATOR: u64 = 100;

// ============================================================
// Halving engine — scheduled proportional burn of the treasury
// ============================================================

#[multiversx_sc::module]
pub trait HalvingModule:
    crate::ledger::LedgerModule
    + crate::access_control::AccessControlModule
    + crate::pause::PauseModule
    + crate::reentrancy_guard::ReentrancyGuardModule
    + crate::rate_limit::RateLimitModule
{
    // ========================================================
    // ENDPOINT: executeHalving
    // Anyone can call. Also invoked by the transfer hook.
    // Burns halving_rate% of the treasury balance, rounded down.
    // ========================================================

    #[endpoint(executeHalving)]
    fn execute_halving(&self) {
        self.enter_guard();
        self.require_not_paused();
        require!(self.check_rate_limit(), ERR_RATE_LIMITED);
        require!(self.is_halving_due(), ERR_NOT_DUE);

        let treasury = self.treasury().get();
        let treasury_balance = self.balance_of(&treasury);
        require!(treasury_balance > 0u64, ERR_EMPTY_TREASURY);

        let burn_amount = self.compute_burn(&treasury_balance, self.halving_rate().get());
        require!(burn_amount > 0u64, ERR_ZERO_BURN);

        self.burn(&treasury, &burn_amount);

        // Anchored to now, not to the missed deadline: a late halving
        // pushes the next one a full interval out.
        let now = self.blockchain().get_block_timestamp();
        self.last_halving_time().set(now);
        self.record_operation();

        self.halving_event(&burn_amount, now);
        self.exit_guard();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn compute_burn(&self, treasury_balance: &BigUint, rate: u64) -> BigUint {
        (treasury_balance * rate) / PERCENT_DENOMINATOR
    }

    /// True when `execute_halving` would burn something right now,
    /// ignoring the pause and reentrancy gates the caller checks itself.
    fn halving_ready(&self) -> bool {
        if !self.is_halving_due() || !self.check_rate_limit() {
            return false;
        }
        self.get_expected_burn(self.halving_rate().get()) > 0u64
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isHalvingDue)]
    fn is_halving_due(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        self.get_halving_schedule().is_due(now)
    }

    #[view(getExpectedBurn)]
    fn get_expected_burn(&self, rate: u64) -> BigUint {
        let treasury_balance = self.balance_of(&self.treasury().get());
        self.compute_burn(&treasury_balance, rate)
    }

    /// Returns (next_time, expected_amount, time_remaining).
    #[view(getNextHalvingInfo)]
    fn get_next_halving_info(&self) -> MultiValue3<u64, BigUint, u64> {
        let now = self.blockchain().get_block_timestamp();
        let schedule = self.get_halving_schedule();
        let next_time = schedule.next_halving_time();
        let expected_amount = self.get_expected_burn(schedule.halving_rate);
        let time_remaining = next_time.saturating_sub(now);
        (next_time, expected_amount, time_remaining).into()
    }

    #[view(getHalvingSchedule)]
    fn get_halving_schedule(&self) -> HalvingSchedule {
        HalvingSchedule {
            halving_interval: self.halving_interval().get(),
            halving_rate: self.halving_rate().get(),
            last_halving_time: self.last_halving_time().get(),
        }
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("halving")]
    fn halving_event(&self, #[indexed] burned_amount: &BigUint, timestamp: u64);

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(treasury)]
    #[storage_mapper("treasury")]
    fn treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(halvingInterval)]
    #[storage_mapper("halvingInterval")]
    fn halving_interval(&self) -> SingleValueMapper<u64>;

    #[view(halvingRate)]
    #[storage_mapper("halvingRate")]
    fn halving_rate(&self) -> SingleValueMapper<u64>;

    #[view(lastHalvingTime)]
    #[storage_mapper("lastHalvingTime")]
    fn last_halving_time(&self) -> SingleValueMapper<u64>;
}
