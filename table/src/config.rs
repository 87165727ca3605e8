//! Service configuration.
//!
//! Compiled-in defaults match the table's fixed rules (stake 500, 300 second
//! betting window, 8 second spin window); environment variables exist for
//! operators and tests, not for players.

use wheelhouse_types::{BETTING_SECONDS, SPIN_SECONDS, STARTING_BALANCE};

#[derive(Clone, Debug)]
pub struct TableConfig {
    pub host: String,
    pub port: u16,
    pub starting_balance: i64,
    pub betting_secs: u32,
    pub spin_secs: u64,
    pub tick_ms: u64,
}

impl TableConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("TABLE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: read_u16("TABLE_PORT", 3000),
            starting_balance: read_i64("TABLE_STARTING_BALANCE", STARTING_BALANCE),
            betting_secs: read_u32("TABLE_BETTING_SECS", BETTING_SECONDS),
            spin_secs: read_u64("TABLE_SPIN_SECS", SPIN_SECONDS),
            tick_ms: read_u64("TABLE_TICK_MS", 1_000),
        }
    }

    /// Validate the configuration (all windows must be > 0).
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.betting_secs == 0 {
            return Err("betting window must be greater than zero");
        }
        if self.spin_secs == 0 {
            return Err("spin window must be greater than zero");
        }
        if self.tick_ms == 0 {
            return Err("tick interval must be greater than zero");
        }
        Ok(())
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            starting_balance: STARTING_BALANCE,
            betting_secs: BETTING_SECONDS,
            spin_secs: SPIN_SECONDS,
            tick_ms: 1_000,
        }
    }
}

fn read_u16(key: &str, fallback: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u16>().ok())
        .unwrap_or(fallback)
}

fn read_u32(key: &str, fallback: u32) -> u32 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u32>().ok())
        .unwrap_or(fallback)
}

fn read_u64(key: &str, fallback: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .unwrap_or(fallback)
}

fn read_i64(key: &str, fallback: i64) -> i64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(fallback)
}
