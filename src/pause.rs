multiversx_sc::imports!();

use crate::errors::{ERR_NOT_PAUSED, ERR_PAUSED};

// ============================================================
// Pause — global emergency gate
// ============================================================

#[multiversx_sc::module]
pub trait PauseModule: crate::access_control::AccessControlModule {
    #[endpoint(pause)]
    fn pause(&self) {
        self.require_admin();
        require!(!self.is_paused(), ERR_PAUSED);

        self.set_paused(true);
        self.emergency_pause_event(&self.blockchain().get_caller());
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_admin();
        require!(self.is_paused(), ERR_NOT_PAUSED);

        self.set_paused(false);
        self.emergency_unpause_event(&self.blockchain().get_caller());
    }

    fn set_paused(&self, paused: bool) {
        self.paused().set(paused);
    }

    fn require_not_paused(&self) {
        require!(!self.is_paused(), ERR_PAUSED);
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[event("emergencyPause")]
    fn emergency_pause_event(&self, #[indexed] admin: &ManagedAddress);

    #[event("emergencyUnpause")]
    fn emergency_unpause_event(&self, #[indexed] admin: &ManagedAddress);

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;
}
