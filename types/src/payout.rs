//! Settlement arithmetic.
//!
//! A bet that covers the drawn pocket returns `amount * payout`; a bet that
//! does not forfeits `amount`. A bet contributes to exactly one of the two
//! sums, and the net is their difference. Pure in (pocket, bets) so the round
//! controller can settle every player against one draw and tests can replay
//! any outcome.

use super::Bet;

/// Net result of settling `bets` against the drawn `pocket`.
///
/// Assumes the bets passed boundary validation ([`Bet::validate`]), which
/// caps amounts and multipliers so the arithmetic stays inside `i64`.
pub fn settle(pocket: u8, bets: &[Bet]) -> i64 {
    let mut won: i64 = 0;
    let mut lost: i64 = 0;
    for bet in bets {
        if bet.covers(pocket) {
            won += (bet.amount * bet.payout) as i64;
        } else {
            lost += bet.amount as i64;
        }
    }
    won - lost
}
