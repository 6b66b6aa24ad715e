multiversx_sc::imports!();

use crate::errors::{
    ERR_INVALID_INTERVAL, ERR_INVALID_RATE, ERR_INVALID_TREASURY, ERR_NO_PENDING_PROPOSAL,
    ERR_TIMELOCK_NOT_ELAPSED,
};
use crate::{MAX_HALVING_INTERVAL, MAX_HALVING_RATE, MIN_HALVING_INTERVAL, MIN_HALVING_RATE};

/// Delay between a proposal and its confirmation: 24 hours in seconds
pub const TIMELOCK_DURATION: u64 = 86_400;

// ============================================================
// Governance timelock — two independent propose/confirm flows
//
//   treasury:        proposeTreasuryUpdate -> confirmTreasuryUpdate
//   halving params:  proposeHalvingParams  -> confirmHalvingParams
//
// An idle slot holds the zero address / zero interval,
// neither of which passes validation, so "idle" can never
// be mistaken for a real proposal.
// ============================================================

#[multiversx_sc::module]
pub trait GovernanceModule:
    crate::ledger::LedgerModule
    + crate::access_control::AccessControlModule
    + crate::pause::PauseModule
    + crate::reentrancy_guard::ReentrancyGuardModule
    + crate::rate_limit::RateLimitModule
    + crate::halving::HalvingModule
{
    // ========================================================
    // ENDPOINT: proposeTreasuryUpdate
    // A newer proposal overwrites the pending one and restarts
    // the timelock.
    // ========================================================

    #[endpoint(proposeTreasuryUpdate)]
    fn propose_treasury_update(&self, new_treasury: ManagedAddress) {
        self.require_admin();
        self.require_valid_treasury(&new_treasury);

        let effective_at = self.timelock_deadline();
        self.pending_treasury().set(&new_treasury);
        self.timelock_expiry().set(effective_at);

        self.treasury_update_proposed_event(&new_treasury, effective_at);
    }

    #[endpoint(confirmTreasuryUpdate)]
    fn confirm_treasury_update(&self) {
        self.require_admin();
        let new_treasury = self.pending_treasury().get();
        require!(!new_treasury.is_zero(), ERR_NO_PENDING_PROPOSAL);
        self.require_timelock_elapsed(self.timelock_expiry().get());

        let old_treasury = self.treasury().get();
        self.pending_treasury().set(ManagedAddress::zero());
        self.timelock_expiry().clear();
        self.treasury().set(&new_treasury);

        self.treasury_updated_event(&old_treasury, &new_treasury);
    }

    // ========================================================
    // ENDPOINT: proposeHalvingParams
    // ========================================================

    #[endpoint(proposeHalvingParams)]
    fn propose_halving_params(&self, interval: u64, rate: u64) {
        self.require_admin();
        self.require_valid_halving_params(interval, rate);

        let effective_at = self.timelock_deadline();
        self.pending_halving_interval().set(interval);
        self.pending_halving_rate().set(rate);
        self.halving_params_timelock_expiry().set(effective_at);

        self.halving_params_proposed_event(interval, rate, effective_at);
    }

    #[endpoint(confirmHalvingParams)]
    fn confirm_halving_params(&self) {
        self.require_admin();
        require!(
            self.pending_halving_interval().get() != 0,
            ERR_NO_PENDING_PROPOSAL
        );
        self.require_timelock_elapsed(self.halving_params_timelock_expiry().get());

        let old_interval = self.halving_interval().get();
        let old_rate = self.halving_rate().get();
        let new_interval = self.pending_halving_interval().take();
        let new_rate = self.pending_halving_rate().take();
        self.halving_params_timelock_expiry().clear();

        self.halving_interval().set(new_interval);
        self.halving_rate().set(new_rate);

        self.halving_params_updated_event(old_interval, old_rate, new_interval, new_rate);
    }

    // ========================================================
    // INTERNAL: validation, shared with init
    // ========================================================

    fn require_valid_treasury(&self, treasury: &ManagedAddress) {
        require!(
            !treasury.is_zero() && *treasury != self.blockchain().get_sc_address(),
            ERR_INVALID_TREASURY
        );
    }

    fn require_valid_halving_params(&self, interval: u64, rate: u64) {
        require!(
            (MIN_HALVING_INTERVAL..=MAX_HALVING_INTERVAL).contains(&interval),
            ERR_INVALID_INTERVAL
        );
        require!(
            (MIN_HALVING_RATE..=MAX_HALVING_RATE).contains(&rate),
            ERR_INVALID_RATE
        );
    }

    fn timelock_deadline(&self) -> u64 {
        self.blockchain().get_block_timestamp() + TIMELOCK_DURATION
    }

    fn require_timelock_elapsed(&self, effective_at: u64) {
        let now = self.blockchain().get_block_timestamp();
        require!(now >= effective_at, ERR_TIMELOCK_NOT_ELAPSED);
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("treasuryUpdateProposed")]
    fn treasury_update_proposed_event(
        &self,
        #[indexed] new_treasury: &ManagedAddress,
        effective_at: u64,
    );

    #[event("treasuryUpdated")]
    fn treasury_updated_event(
        &self,
        #[indexed] old_treasury: &ManagedAddress,
        new_treasury: &ManagedAddress,
    );

    #[event("halvingParamsProposed")]
    fn halving_params_proposed_event(
        &self,
        #[indexed] interval: u64,
        #[indexed] rate: u64,
        effective_at: u64,
    );

    #[event("halvingParamsUpdated")]
    fn halving_params_updated_event(
        &self,
        #[indexed] old_interval: u64,
        #[indexed] old_rate: u64,
        #[indexed] new_interval: u64,
        new_rate: u64,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(pendingTreasury)]
    #[storage_mapper("pendingTreasury")]
    fn pending_treasury(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(timelockExpiry)]
    #[storage_mapper("timelockExpiry")]
    fn timelock_expiry(&self) -> SingleValueMapper<u64>;

    #[view(pendingHalvingInterval)]
    #[storage_mapper("pendingHalvingInterval")]
    fn pending_halving_interval(&self) -> SingleValueMapper<u64>;

    #[view(pendingHalvingRate)]
    #[storage_mapper("pendingHalvingRate")]
    fn pending_halving_rate(&self) -> SingleValueMapper<u64>;

    #[view(halvingParamsTimelockExpiry)]
    #[storage_mapper("halvingParamsTimelockExpiry")]
    fn halving_params_timelock_expiry(&self) -> SingleValueMapper<u64>;
}
