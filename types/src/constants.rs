/// Maximum name length for player registration
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum number of bets a single update may carry
pub const MAX_BETS_PER_PLAYER: usize = 64;

/// Largest accepted wager on a single bet
pub const MAX_BET_AMOUNT: u64 = 1_000_000_000;

/// Largest accepted payout multiplier
pub const MAX_PAYOUT: u64 = 10_000;

/// Display name assigned when a player joins with an empty name
pub const DEFAULT_NAME: &str = "Anonymous";

/// Sender name used for server-originated chat lines
pub const SYSTEM_NAME: &str = "System";

/// Starting balance for new players
pub const STARTING_BALANCE: i64 = 500;

/// Length of the betting window in seconds (5 minutes)
pub const BETTING_SECONDS: u32 = 5 * 60;

/// Length of the spin display window in seconds
pub const SPIN_SECONDS: u64 = 8;
