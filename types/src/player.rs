use super::{Bet, DEFAULT_NAME, MAX_NAME_LENGTH};

/// Per-connection player record.
///
/// Balance is the only field that outlives a round; bets and readiness are
/// round-scoped and reset on every settlement. The record itself lives only
/// as long as the connection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub balance: i64,
    pub bets: Vec<Bet>,
    pub ready: bool,
}

impl Player {
    /// Creates a player from a self-reported display name.
    pub fn new(raw_name: &str, balance: i64) -> Self {
        Self {
            name: sanitize_name(raw_name),
            balance,
            bets: Vec::new(),
            ready: false,
        }
    }

    /// Clears round-scoped state after settlement.
    pub fn clear_round(&mut self) {
        self.bets.clear();
        self.ready = false;
    }
}

/// Empty names fall back to the default; long names are truncated.
fn sanitize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_NAME.to_string();
    }
    trimmed.chars().take(MAX_NAME_LENGTH).collect()
}
