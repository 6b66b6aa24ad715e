multiversx_sc::imports!();

/// Minimum spacing between two halvings: 1 hour in seconds
pub const RATE_LIMIT_INTERVAL: u64 = 3_600;

// ============================================================
// Rate limiter — bounds how often a halving can burn
// ============================================================

#[multiversx_sc::module]
pub trait RateLimitModule {
    /// Read-only; callers record their own success with `record_operation`.
    fn check_rate_limit(&self) -> bool {
        let now = self.blockchain().get_block_timestamp();
        now >= self
            .last_operation_time()
            .get()
            .saturating_add(RATE_LIMIT_INTERVAL)
    }

    fn record_operation(&self) {
        let now = self.blockchain().get_block_timestamp();
        self.last_operation_time().set(now);
    }

    #[view(lastOperationTime)]
    #[storage_mapper("lastOperationTime")]
    fn last_operation_time(&self) -> SingleValueMapper<u64>;
}
