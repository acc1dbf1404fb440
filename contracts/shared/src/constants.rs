//! Common constants used across voting contracts
//!
//! Limits keep every call (in particular the tally scan) inside the host's
//! per-invocation instruction budget.

// ===== Proposal Limits =====

/// Maximum number of proposals accepted in one session
pub const MAX_PROPOSALS: u32 = 100;

/// Maximum proposal description length in bytes
pub const MAX_DESCRIPTION_LEN: u32 = 256;

// ===== Pagination =====

/// Maximum number of proposals returned by a single paginated request
pub const MAX_PAGINATION_LIMIT: u32 = 50;

// ===== Ledger TTL (in ledgers, ~5s each) =====

/// One day worth of ledgers
pub const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage (admin, workflow status, counters) is extended to this TTL
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;

/// Instance storage is only extended once its TTL drops below this threshold
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Voter and proposal entries are extended to this TTL on every write
pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// Persistent entries are only extended once their TTL drops below this threshold
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
