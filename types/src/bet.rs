use serde::Deserialize;
use thiserror::Error;

use super::{Wheel, MAX_BETS_PER_PLAYER, MAX_BET_AMOUNT, MAX_PAYOUT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet covers no pockets")]
    EmptyCoverage,
    #[error("pocket {got} is not on the wheel")]
    PocketOffWheel { got: u8 },
    #[error("bet amount out of range (got={got}, max={max})")]
    AmountOutOfRange { got: u64, max: u64 },
    #[error("payout multiplier out of range (got={got}, max={max})")]
    PayoutOutOfRange { got: u64, max: u64 },
    #[error("too many bets (got={got}, max={max})")]
    TooManyBets { got: usize, max: usize },
}

/// A wager covering a subset of pockets at a fixed payout multiplier.
///
/// Bets arrive from the client and are replaced wholesale on every update.
/// `id` and `label` are opaque to the server; they exist so the bet board can
/// be rendered without the server understanding bet categories.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Bet {
    pub id: String,
    pub label: String,
    pub nums: Vec<u8>,
    pub amount: u64,
    pub payout: u64,
}

impl Bet {
    /// Whether this bet covers the drawn pocket.
    pub fn covers(&self, pocket: u8) -> bool {
        self.nums.contains(&pocket)
    }

    /// Shape validation applied at the transport boundary. The caps keep
    /// settlement arithmetic inside i64; bankroll sufficiency is
    /// deliberately not checked.
    pub fn validate(&self) -> Result<(), BetError> {
        if self.nums.is_empty() {
            return Err(BetError::EmptyCoverage);
        }
        if let Some(&got) = self.nums.iter().find(|n| !Wheel::contains(**n)) {
            return Err(BetError::PocketOffWheel { got });
        }
        if self.amount == 0 || self.amount > MAX_BET_AMOUNT {
            return Err(BetError::AmountOutOfRange {
                got: self.amount,
                max: MAX_BET_AMOUNT,
            });
        }
        if self.payout == 0 || self.payout > MAX_PAYOUT {
            return Err(BetError::PayoutOutOfRange {
                got: self.payout,
                max: MAX_PAYOUT,
            });
        }
        Ok(())
    }
}

/// Validates a full replacement bet set.
pub fn validate_bets(bets: &[Bet]) -> Result<(), BetError> {
    if bets.len() > MAX_BETS_PER_PLAYER {
        return Err(BetError::TooManyBets {
            got: bets.len(),
            max: MAX_BETS_PER_PLAYER,
        });
    }
    for bet in bets {
        bet.validate()?;
    }
    Ok(())
}
