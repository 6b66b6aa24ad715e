multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Halving Schedule — live burn parameters
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct HalvingSchedule {
    /// Seconds between two eligible halvings
    pub halving_interval: u64,
    /// Percentage of the treasury balance burned per halving
    pub halving_rate: u64,
    /// Block timestamp of the last executed halving (deploy time before the first one)
    pub last_halving_time: u64,
}

impl HalvingSchedule {
    pub fn next_halving_time(&self) -> u64 {
        self.last_halving_time.saturating_add(self.halving_interval)
    }

    pub fn is_due(&self, now: u64) -> bool {
        now >= self.next_halving_time()
    }
}
