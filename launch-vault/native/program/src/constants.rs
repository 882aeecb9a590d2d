// Seed for the per-user deposit ledger PDA
pub const USER_DEPOSIT_SEED: &[u8] = b"user_deposit";

// Deposit entries are grown one at a time; this bounds a single ledger
// (every entry carries at least one NFT and caps are u8).
pub const MAX_DEPOSITS_PER_USER: usize = u8::MAX as usize;

// Prefix the runtime puts in front of `sol_log_data` payloads
pub const PROGRAM_DATA_LOG_PREFIX: &str = "Program data: ";
