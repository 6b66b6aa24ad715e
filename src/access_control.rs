multiversx_sc::imports!();

use crate::errors::ERR_UNAUTHORIZED;

// ============================================================
// Access control — the contract owner is the single admin
// ============================================================

#[multiversx_sc::module]
pub trait AccessControlModule {
    fn is_admin(&self, caller: &ManagedAddress) -> bool {
        *caller == self.blockchain().get_owner_address()
    }

    fn require_admin(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.is_admin(&caller), ERR_UNAUTHORIZED);
    }
}
