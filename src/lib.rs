#![no_std]

multiversx_sc::imports!();

pub mod access_control;
pub mod errors;
pub mod governance;
pub mod halving;
pub mod ledger;
pub mod pause;
pub mod rate_limit;
pub mod reentrancy_guard;
pub mod transfer_hook;
pub mod types;

use errors::{ERR_ALLOCATION_EXCEEDS_SUPPLY, ERR_ZERO_AMOUNT};

// ============================================================
// Constants
// ============================================================

pub const TOKEN_NAME: &str = "HalvingToken";
pub const TOKEN_TICKER: &str = "HALV";
pub const TOKEN_DECIMALS: u32 = 18;

/// Reference schedule: one halving every 30 days
pub const DEFAULT_HALVING_INTERVAL: u64 = 30 * 86_400;

/// Shortest allowed interval: 1 day
pub const MIN_HALVING_INTERVAL: u64 = 86_400;

/// Longest allowed interval: twice the default (60 days)
pub const MAX_HALVING_INTERVAL: u64 = 2 * DEFAULT_HALVING_INTERVAL;

/// Rate bounds in whole percent, both inclusive
pub const MIN_HALVING_RATE: u64 = 5;
pub const MAX_HALVING_RATE: u64 = 20;

/// Hard ceiling no configuration may cross
pub const ABSOLUTE_MAX_HALVING_RATE: u64 = 50;

const _: () = assert!(MIN_HALVING_RATE <= MAX_HALVING_RATE);
const _: () = assert!(MAX_HALVING_RATE <= ABSOLUTE_MAX_HALVING_RATE);

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait HalvingToken:
    ledger::LedgerModule
    + access_control::AccessControlModule
    + pause::PauseModule
    + reentrancy_guard::ReentrancyGuardModule
    + rate_limit::RateLimitModule
    + halving::HalvingModule
    + governance::GovernanceModule
    + transfer_hook::TransferHookModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    /// Mints `initial_supply` to the deployer and moves
    /// `treasury_allocation` of it into the treasury.
    #[init]
    fn init(
        &self,
        treasury: ManagedAddress,
        initial_supply: BigUint,
        treasury_allocation: BigUint,
        halving_interval: u64,
        halving_rate: u64,
    ) {
        self.require_valid_treasury(&treasury);
        self.require_valid_halving_params(halving_interval, halving_rate);
        require!(
            treasury_allocation <= initial_supply,
            ERR_ALLOCATION_EXCEEDS_SUPPLY
        );

        let deployer = self.blockchain().get_caller();
        self.mint(&deployer, &initial_supply);
        if treasury_allocation > 0u64 {
            self.move_balance(&deployer, &treasury, &treasury_allocation);
        }

        self.treasury().set(&treasury);
        self.halving_interval().set(halving_interval);
        self.halving_rate().set(halving_rate);
        self.last_halving_time()
            .set(self.blockchain().get_block_timestamp());
        self.pending_treasury().set(ManagedAddress::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: fundTreasury
    // The only way to add to the treasury after deploy, since
    // plain transfers to it are rejected.
    // ========================================================

    #[endpoint(fundTreasury)]
    fn fund_treasury(&self, amount: BigUint) {
        self.require_admin();
        self.require_not_paused();
        self.require_not_entered();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let admin = self.blockchain().get_caller();
        let treasury = self.treasury().get();
        self.move_balance(&admin, &treasury, &amount);

        self.treasury_funded_event(&admin, &amount);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTokenInfo)]
    fn get_token_info(&self) -> MultiValue3<ManagedBuffer, ManagedBuffer, u32> {
        (
            ManagedBuffer::from(TOKEN_NAME),
            ManagedBuffer::from(TOKEN_TICKER),
            TOKEN_DECIMALS,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("treasuryFunded")]
    fn treasury_funded_event(&self, #[indexed] admin: &ManagedAddress, amount: &BigUint);
}
