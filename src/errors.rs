// ============================================================
// Rejection reasons
// ============================================================

pub const ERR_UNAUTHORIZED: &str = "Unauthorized: caller is not the admin";

// ── Parameters ──
pub const ERR_INVALID_TREASURY: &str = "Invalid treasury address";
pub const ERR_INVALID_INTERVAL: &str = "Halving interval out of range";
pub const ERR_INVALID_RATE: &str = "Halving rate out of range";
pub const ERR_ZERO_ADDRESS: &str = "Zero address not allowed";
pub const ERR_TRANSFER_TO_TREASURY: &str = "Cannot transfer to treasury";
pub const ERR_ALLOCATION_EXCEEDS_SUPPLY: &str = "Treasury allocation exceeds initial supply";
pub const ERR_ZERO_AMOUNT: &str = "Amount must be greater than zero";

// ── Timelock ──
pub const ERR_TIMELOCK_NOT_ELAPSED: &str = "Timelock period has not elapsed";
pub const ERR_NO_PENDING_PROPOSAL: &str = "No pending proposal";

// ── Halving ──
pub const ERR_NOT_DUE: &str = "Halving is not due yet";
pub const ERR_RATE_LIMITED: &str = "Rate limit: operation too frequent";
pub const ERR_EMPTY_TREASURY: &str = "Treasury balance is empty";
pub const ERR_ZERO_BURN: &str = "Computed burn amount is zero";

// ── Guards ──
pub const ERR_REENTRANT_CALL: &str = "Reentrant call";
pub const ERR_PAUSED: &str = "Contract is paused";
pub const ERR_NOT_PAUSED: &str = "Contract is not paused";

// ── Ledger ──
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "Insufficient allowance";
