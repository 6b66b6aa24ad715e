multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_ALLOWANCE, ERR_INSUFFICIENT_BALANCE, ERR_ZERO_ADDRESS};

// ============================================================
// Ledger — fungible balance and allowance bookkeeping
// ============================================================

#[multiversx_sc::module]
pub trait LedgerModule {
    // ========================================================
    // ENDPOINT: approve
    // Overwrites the spender's allowance on the caller's balance.
    // ========================================================

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) -> bool {
        require!(!spender.is_zero(), ERR_ZERO_ADDRESS);

        let owner = self.blockchain().get_caller();
        self.allowances(&owner, &spender).set(&amount);
        self.approval_event(&owner, &spender, &amount);
        true
    }

    // ========================================================
    // INTERNAL: balance movements
    // ========================================================

    fn mint(&self, account: &ManagedAddress, amount: &BigUint) {
        require!(!account.is_zero(), ERR_ZERO_ADDRESS);

        self.balances(account).update(|b| *b += amount);
        self.total_supply().update(|ts| *ts += amount);
        self.transfer_event(&ManagedAddress::zero(), account, amount);
    }

    fn burn(&self, account: &ManagedAddress, amount: &BigUint) {
        let balance = self.balances(account).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(account).set(&(balance - amount));
        self.total_supply().update(|ts| *ts -= amount);
        self.transfer_event(account, &ManagedAddress::zero(), amount);
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        require!(!to.is_zero(), ERR_ZERO_ADDRESS);

        let from_balance = self.balances(from).get();
        require!(&from_balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balances(from).set(&(from_balance - amount));
        self.balances(to).update(|b| *b += amount);
        self.transfer_event(from, to, amount);
    }

    /// Decrements `spender`'s allowance on `owner`, failing if it does not cover `amount`.
    fn spend_allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress, amount: &BigUint) {
        let allowance = self.allowances(owner, spender).get();
        require!(&allowance >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        self.allowances(owner, spender).set(&(allowance - amount));
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, account: &ManagedAddress) -> BigUint {
        self.balances(account).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: &ManagedAddress, spender: &ManagedAddress) -> BigUint {
        self.allowances(owner, spender).get()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    /// Zero `from` marks a mint, zero `to` marks a burn.
    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: &BigUint,
    );

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(totalSupply)]
    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowances")]
    fn allowances(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
