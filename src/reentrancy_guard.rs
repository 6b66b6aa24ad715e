multiversx_sc::imports!();

use crate::errors::ERR_REENTRANT_CALL;

// ============================================================
// Reentrancy guard — single call-depth lock
// A panic reverts the whole transaction, lock included, so
// only the success path needs an explicit exit_guard().
// ============================================================

#[multiversx_sc::module]
pub trait ReentrancyGuardModule {
    fn enter_guard(&self) {
        self.require_not_entered();
        self.reentrancy_lock().set(true);
    }

    fn exit_guard(&self) {
        self.reentrancy_lock().clear();
    }

    fn require_not_entered(&self) {
        require!(!self.reentrancy_lock().get(), ERR_REENTRANT_CALL);
    }

    #[storage_mapper("reentrancyLock")]
    fn reentrancy_lock(&self) -> SingleValueMapper<bool>;
}
